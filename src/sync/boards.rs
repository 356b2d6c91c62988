use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::error::SyncError;
use crate::github::{queries, GraphQlExecutor};
use crate::model::board::{Board, FieldKind, FieldSchema, IterationSchema, SelectOption};

#[derive(Deserialize)]
struct ProjectsData {
    repository: ProjectsRepository,
}

#[derive(Deserialize)]
struct ProjectsRepository {
    #[serde(rename = "projectsV2")]
    projects_v2: ProjectConnection,
}

#[derive(Deserialize)]
struct ProjectConnection {
    nodes: Vec<ProjectNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    id: String,
    title: String,
    number: u64,
    url: Option<String>,
}

/// Enumerates the repository's Projects V2 boards and keeps those whose
/// title matches `pattern`. `"*"` keeps everything; any other pattern is a
/// regular expression searched against the title. Remote order is kept.
pub async fn select_boards(
    client: &dyn GraphQlExecutor,
    owner: &str,
    repo: &str,
    pattern: &str,
) -> Result<Vec<Board>, SyncError> {
    let data = client
        .execute(
            queries::REPO_PROJECTS,
            json!({ "owner": owner, "name": repo, "first": 100 }),
        )
        .await?;
    let parsed: ProjectsData = serde_json::from_value(data)?;
    let boards = parsed
        .repository
        .projects_v2
        .nodes
        .into_iter()
        .map(|node| Board {
            id: node.id,
            title: node.title,
            number: node.number,
            url: node.url,
        })
        .collect();
    filter_boards(boards, pattern)
}

fn filter_boards(boards: Vec<Board>, pattern: &str) -> Result<Vec<Board>, SyncError> {
    if pattern == "*" {
        return Ok(boards);
    }
    let regex = Regex::new(pattern)
        .map_err(|e| SyncError::Config(format!("invalid board pattern '{pattern}': {e}")))?;
    Ok(boards
        .into_iter()
        .filter(|board| regex.is_match(&board.title))
        .collect())
}

#[derive(Deserialize)]
struct FieldsData {
    node: FieldsNode,
}

#[derive(Deserialize)]
struct FieldsNode {
    fields: FieldConnection,
}

#[derive(Deserialize)]
struct FieldConnection {
    nodes: Vec<RawFieldNode>,
}

/// A field node as the fragment-typed query returns it: nodes that match
/// none of the fragments come back as empty objects, so everything is
/// optional here.
#[derive(Deserialize)]
struct RawFieldNode {
    id: Option<String>,
    name: Option<String>,
    #[serde(rename = "dataType")]
    data_type: Option<String>,
    options: Option<Vec<RawOption>>,
    configuration: Option<RawConfiguration>,
}

#[derive(Deserialize)]
struct RawOption {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct RawConfiguration {
    #[serde(default)]
    iterations: Vec<RawIteration>,
}

#[derive(Deserialize)]
struct RawIteration {
    id: String,
    title: String,
    #[serde(rename = "startDate")]
    start_date: Option<String>,
    duration: Option<u32>,
}

/// Fetches a board's live field schema, narrowed to the kinds this tool
/// can write. Unsupported kinds are dropped here, so downstream code only
/// ever sees writable fields.
pub async fn fetch_fields(
    client: &dyn GraphQlExecutor,
    board_id: &str,
) -> Result<Vec<FieldSchema>, SyncError> {
    let data = client
        .execute(queries::PROJECT_FIELDS, json!({ "projectId": board_id }))
        .await?;
    let parsed: FieldsData = serde_json::from_value(data)?;
    Ok(parsed
        .node
        .fields
        .nodes
        .into_iter()
        .filter_map(into_schema)
        .collect())
}

fn into_schema(node: RawFieldNode) -> Option<FieldSchema> {
    let id = node.id?;
    let name = node.name?;
    let kind = match node.data_type?.as_str() {
        "TEXT" => FieldKind::Text,
        "NUMBER" => FieldKind::Number,
        "DATE" => FieldKind::Date,
        "SINGLE_SELECT" => FieldKind::SingleSelect(
            node.options
                .unwrap_or_default()
                .into_iter()
                .map(|o| SelectOption {
                    id: o.id,
                    name: o.name,
                })
                .collect(),
        ),
        "ITERATION" => FieldKind::Iteration(
            node.configuration
                .map(|c| c.iterations)
                .unwrap_or_default()
                .into_iter()
                .map(|i| IterationSchema {
                    id: i.id,
                    title: i.title,
                    start_date: i.start_date,
                    duration: i.duration,
                })
                .collect(),
        ),
        _ => return None,
    };
    Some(FieldSchema { id, name, kind })
}
