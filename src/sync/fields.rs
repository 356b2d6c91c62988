use tracing::info;

use crate::error::SyncError;
use crate::github::GraphQlExecutor;
use crate::model::board::{Board, CoercedField};

/// Applies one coerced field value to one board item. In test mode the
/// mutation is only reported, with ids rendered back to human-readable
/// values. A remote failure here is fatal for the run; fields already
/// applied stay applied.
pub async fn apply_field(
    client: &dyn GraphQlExecutor,
    board: &Board,
    item_id: &str,
    field: &CoercedField,
    shadow_mode: bool,
) -> Result<(), SyncError> {
    if shadow_mode {
        info!(
            "Test mode: {} will be updated with '{}'",
            field.name,
            field.value.display()
        );
        return Ok(());
    }

    let document = field.value.mutation_document();
    let variables = field
        .value
        .mutation_variables(&board.id, item_id, &field.field_id);
    client
        .execute(document, variables)
        .await
        .map_err(|source| SyncError::Mutation {
            what: format!("update field '{}'", field.name),
            source,
        })?;
    info!("Updated field '{}' on board '{}'", field.name, board.title);
    Ok(())
}
