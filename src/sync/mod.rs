pub mod boards;
pub mod fields;
pub mod reconcile;


use tracing::info;

use crate::coerce::coerce_fields;
use crate::config::RunConfig;
use crate::error::SyncError;
use crate::github::GraphQlExecutor;
use crate::model::issue::Issue;

/// Orchestrates one run: gate on the label condition, select boards once,
/// then per board fetch the schema, coerce the desired values, reconcile
/// the item, and apply each surviving field. Boards and fields are
/// processed strictly sequentially; nothing is cached between boards.
pub struct Synchronizer<'a> {
    client: &'a dyn GraphQlExecutor,
    config: &'a RunConfig,
}

impl<'a> Synchronizer<'a> {
    pub fn new(client: &'a dyn GraphQlExecutor, config: &'a RunConfig) -> Self {
        Self { client, config }
    }

    /// Routes an issue event action. Only `opened` and `labeled` trigger a
    /// sync; anything else produces an empty result.
    pub async fn handle_event(
        &self,
        action: &str,
        issue: &Issue,
    ) -> Result<Vec<String>, SyncError> {
        match action {
            "opened" => {
                info!("New issue opened: #{}", issue.number);
                self.sync_issue(issue).await
            }
            "labeled" => {
                info!("Issue #{} was labeled", issue.number);
                self.sync_issue(issue).await
            }
            other => {
                info!("Unhandled issue action: {other}");
                Ok(Vec::new())
            }
        }
    }

    /// Returns the item ids produced across all selected boards, in board
    /// order. Skipped boards contribute nothing.
    pub async fn sync_issue(&self, issue: &Issue) -> Result<Vec<String>, SyncError> {
        if !self.config.predicate.matches(&issue.label_names()) {
            if self.config.shadow_mode {
                info!("Test mode: board item will not be created");
            } else {
                info!("Board item will not be created");
            }
            return Ok(Vec::new());
        }

        let boards = boards::select_boards(
            self.client,
            &self.config.owner,
            &self.config.repo,
            &self.config.board_pattern,
        )
        .await?;

        let mut item_ids = Vec::new();
        for board in &boards {
            info!("Processing board '{}' (#{})", board.title, board.number);
            let schema = boards::fetch_fields(self.client, &board.id).await?;
            let coerced = coerce_fields(&self.config.desired_fields, &schema);

            let Some(item_id) = reconcile::reconcile(
                self.client,
                &self.config.owner,
                &self.config.repo,
                issue,
                board,
                self.config.force_update,
                self.config.shadow_mode,
            )
            .await?
            else {
                continue;
            };

            for field in &coerced {
                fields::apply_field(self.client, board, &item_id, field, self.config.shadow_mode)
                    .await?;
            }
            item_ids.push(item_id);
        }
        Ok(item_ids)
    }
}
