use std::path::PathBuf;

use clap::Parser;

/// Command line surface. Every input doubles as an environment variable so
/// the binary can run unmodified as a workflow step, where inputs arrive as
/// `INPUT_*` variables and the runner context as `GITHUB_*`.
#[derive(Parser, Debug)]
#[command(name = "projectsync", about = "Sync issues onto GitHub Projects V2 boards")]
pub struct Args {
    /// Test (shadow) mode: perform every read and decision, but only log
    /// the writes that would happen. Accepts "true"/"false".
    #[arg(long, env = "INPUT_TEST", default_value = "false")]
    pub test: String,

    /// Label condition gating the sync: space-separated OR-groups, each a
    /// comma-separated list of labels that must all be present.
    #[arg(long, env = "INPUT_LABELS", default_value = "")]
    pub labels: String,

    /// Board title pattern, or "*" for every board on the repository.
    #[arg(long, env = "INPUT_PROJECTS", default_value = "*")]
    pub projects: String,

    /// Comma-separated name:value pairs to set on each board item.
    #[arg(long, env = "INPUT_ITEM_FIELDS", default_value = "")]
    pub item_fields: String,

    /// Re-apply field values when the issue is already on a board instead
    /// of skipping it. Accepts "true"/"false".
    #[arg(long, env = "INPUT_FORCE_UPDATE", default_value = "false")]
    pub force_update: String,

    /// Token forwarded to the GitHub GraphQL API. Opaque to this tool.
    #[arg(long, env = "INPUT_GH_TOKEN", default_value = "", hide_env_values = true)]
    pub gh_token: String,

    /// "owner/repo" slug of the repository whose boards are synced.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Path to the JSON event payload file. The runner sets this; the
    /// default only matters for local test-mode runs.
    #[arg(long, env = "GITHUB_EVENT_PATH", default_value = "./test-event.json")]
    pub event_path: PathBuf,

    /// Event name delivered by the runner, e.g. "issues".
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// File to append step outputs to; outputs go to stdout when unset.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_path: Option<PathBuf>,
}
