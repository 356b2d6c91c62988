use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::issue::Issue;

/// The slice of a webhook event payload this tool cares about.
#[derive(Debug, Deserialize)]
pub struct IssueEvent {
    pub action: Option<String>,
    pub issue: Option<Issue>,
}

pub fn load_event(path: &Path) -> Result<IssueEvent> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event payload from {}", path.display()))?;
    let event: IssueEvent =
        serde_json::from_str(&contents).context("failed to parse event payload JSON")?;
    Ok(event)
}
