use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::warn;

use crate::cli::Args;
use crate::predicate::LabelPredicate;

/// Everything a run needs, resolved once at startup. Components receive
/// this struct (or pieces of it) explicitly; nothing below the boundary
/// reads the environment.
#[derive(Debug)]
pub struct RunConfig {
    pub shadow_mode: bool,
    pub predicate: LabelPredicate,
    pub board_pattern: String,
    /// Desired field values in declaration order. A repeated name keeps
    /// its original position but takes the last value.
    pub desired_fields: Vec<(String, String)>,
    pub force_update: bool,
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub event_path: PathBuf,
    pub event_name: Option<String>,
    pub output_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let (owner, repo) = parse_repository(&args.repository)?;
        Ok(Self {
            shadow_mode: flag(&args.test),
            predicate: LabelPredicate::parse(&args.labels),
            board_pattern: args.projects,
            desired_fields: parse_item_fields(&args.item_fields),
            force_update: flag(&args.force_update),
            token: args.gh_token,
            owner,
            repo,
            event_path: args.event_path,
            event_name: args.event_name,
            output_path: args.output_path,
        })
    }
}

/// Workflow inputs are strings; only the literal "true" enables a flag.
fn flag(input: &str) -> bool {
    input == "true"
}

fn parse_repository(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => bail!("repository must be an 'owner/repo' slug, got '{slug}'"),
    }
}

/// Parses `item_fields` input: comma-separated `name:value` pairs. Order is
/// preserved, a repeated name overwrites in place, and a pair without a
/// colon is discarded with a warning.
fn parse_item_fields(input: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for pair in input.split(',').filter(|p| !p.is_empty()) {
        let Some((name, value)) = pair.split_once(':') else {
            warn!(pair = %pair, "item_fields entry has no ':' separator, ignoring");
            continue;
        };
        if let Some(existing) = fields.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            fields.push((name.to_string(), value.to_string()));
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_repo_slug() {
        let (owner, repo) = parse_repository("octocat/hello-world").unwrap();
        assert_eq!(owner, "octocat");
        assert_eq!(repo, "hello-world");
    }

    #[test]
    fn rejects_malformed_slug() {
        assert!(parse_repository("no-slash").is_err());
        assert!(parse_repository("/repo").is_err());
        assert!(parse_repository("owner/").is_err());
    }

    #[test]
    fn item_fields_parse_in_order() {
        let fields = parse_item_fields("Status:Done,Points:5");
        assert_eq!(
            fields,
            vec![
                ("Status".to_string(), "Done".to_string()),
                ("Points".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn item_fields_empty_input_is_empty() {
        assert!(parse_item_fields("").is_empty());
    }

    #[test]
    fn item_fields_duplicate_key_keeps_position_takes_last_value() {
        let fields = parse_item_fields("Status:Todo,Points:5,Status:Done");
        assert_eq!(
            fields,
            vec![
                ("Status".to_string(), "Done".to_string()),
                ("Points".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn item_fields_pair_without_colon_is_ignored() {
        let fields = parse_item_fields("Status:Done,broken,Points:5");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn item_fields_value_keeps_extra_colons() {
        let fields = parse_item_fields("Notes:a:b");
        assert_eq!(fields, vec![("Notes".to_string(), "a:b".to_string())]);
    }

    #[test]
    fn flags_require_the_literal_true() {
        assert!(flag("true"));
        assert!(!flag("True"));
        assert!(!flag("1"));
        assert!(!flag(""));
    }
}
