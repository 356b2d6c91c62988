use thiserror::Error;

use crate::github::GraphQlError;

/// Fatal failure classes for a sync run. Field values that fail coercion
/// and boards that skip reconciliation are not errors; they are dropped or
/// skipped in place and the run continues.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("remote query failed: {0}")]
    Query(#[from] GraphQlError),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("mutation '{what}' failed: {source}")]
    Mutation {
        what: String,
        #[source]
        source: GraphQlError,
    },
}
