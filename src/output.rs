use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Publishes the run's outputs: a human-readable summary and the produced
/// item ids as a JSON array. When an output file is configured (as on a
/// workflow runner) the `name=value` lines are appended there, otherwise
/// they go to stdout.
pub fn write_outputs(
    path: Option<&Path>,
    issue_number: u64,
    action: &str,
    item_ids: &[String],
) -> Result<()> {
    let response = format!("Processed issue #{issue_number} ({action})");
    let ids = serde_json::to_string(item_ids)?;
    match path {
        Some(path) => {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open output file {}", path.display()))?;
            writeln!(file, "response={response}")?;
            writeln!(file, "project_item_ids={ids}")?;
        }
        None => {
            println!("response={response}");
            println!("project_item_ids={ids}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_both_output_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_outputs(
            Some(file.path()),
            42,
            "labeled",
            &["item-1".into(), "item-2".into()],
        )
        .unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("response=Processed issue #42 (labeled)"));
        assert!(contents.contains(r#"project_item_ids=["item-1","item-2"]"#));
    }

    #[test]
    fn empty_id_list_serializes_as_empty_array() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_outputs(Some(file.path()), 7, "opened", &[]).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("project_item_ids=[]"));
    }

    #[test]
    fn appends_rather_than_truncates() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "existing=1\n").unwrap();
        write_outputs(Some(file.path()), 7, "opened", &[]).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("existing=1\n"));
    }
}
