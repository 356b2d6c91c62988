use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::error::SyncError;
use crate::github::{queries, GraphQlExecutor};
use crate::model::board::Board;
use crate::model::issue::Issue;

/// Item id reported for items that would be created in test mode.
pub const SHADOW_ITEM_ID: &str = "test-id";

#[derive(Deserialize)]
struct LinksData {
    repository: LinksRepository,
}

#[derive(Deserialize)]
struct LinksRepository {
    issue: IssueNode,
}

#[derive(Deserialize)]
struct IssueNode {
    #[serde(rename = "projectItems")]
    project_items: ItemConnection,
    #[serde(rename = "projectsV2")]
    projects_v2: LinkedProjectConnection,
}

#[derive(Deserialize)]
struct ItemConnection {
    nodes: Vec<ItemNode>,
}

#[derive(Deserialize)]
struct ItemNode {
    id: String,
    project: LinkedProject,
}

#[derive(Deserialize)]
struct LinkedProjectConnection {
    nodes: Vec<LinkedProject>,
}

#[derive(Deserialize)]
struct LinkedProject {
    id: String,
}

#[derive(Deserialize)]
struct AddItemData {
    #[serde(rename = "addProjectV2ItemById")]
    add_item: AddItemPayload,
}

#[derive(Deserialize)]
struct AddItemPayload {
    item: CreatedItem,
}

#[derive(Deserialize)]
struct CreatedItem {
    id: String,
}

/// Ensures the issue has an item on `board`, without ever creating a
/// duplicate. Returns the item id to write fields to, or `None` when this
/// board should be skipped:
///
/// - not linked yet: create the item (or report a placeholder in test mode)
/// - already linked, no force update: skip
/// - already linked with force update: reuse the existing item id, or skip
///   with a warning when the links query did not surface it
pub async fn reconcile(
    client: &dyn GraphQlExecutor,
    owner: &str,
    repo: &str,
    issue: &Issue,
    board: &Board,
    force_update: bool,
    shadow_mode: bool,
) -> Result<Option<String>, SyncError> {
    let data = client
        .execute(
            queries::ISSUE_PROJECT_LINKS,
            json!({ "owner": owner, "name": repo, "issueNumber": issue.number }),
        )
        .await?;
    let parsed: LinksData = serde_json::from_value(data)?;
    let issue_node = parsed.repository.issue;

    let already_linked = issue_node
        .projects_v2
        .nodes
        .iter()
        .any(|p| p.id == board.id);
    let existing_item_id = issue_node
        .project_items
        .nodes
        .iter()
        .find(|item| item.project.id == board.id)
        .map(|item| item.id.clone());

    if already_linked {
        if !force_update {
            if shadow_mode {
                info!("Test mode: item already exists on board '{}'", board.title);
            } else {
                info!("Item already exists on board '{}'", board.title);
            }
            return Ok(None);
        }
        return match existing_item_id {
            Some(id) => {
                if shadow_mode {
                    info!(
                        "Test mode: force update is enabled, updating the item on '{}'",
                        board.title
                    );
                } else {
                    info!("Force update is enabled, updating the item on '{}'", board.title);
                }
                Ok(Some(id))
            }
            None => {
                warn!("Could not find item id for board '{}'", board.title);
                Ok(None)
            }
        };
    }

    if shadow_mode {
        info!("Test mode: item will be created for board '{}'", board.title);
        return Ok(Some(SHADOW_ITEM_ID.to_string()));
    }

    let data = client
        .execute(
            queries::ADD_ITEM,
            json!({ "projectId": board.id, "contentId": issue.node_id }),
        )
        .await
        .map_err(|source| SyncError::Mutation {
            what: format!("add item to board '{}'", board.title),
            source,
        })?;
    let parsed: AddItemData = serde_json::from_value(data)?;
    info!("Created item on board '{}'", board.title);
    Ok(Some(parsed.add_item.item.id))
}
