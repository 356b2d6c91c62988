pub mod queries;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphQlError {
    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("GitHub API returned errors: {0}")]
    Api(String),
    #[error("GitHub API response carried no data")]
    MissingData,
}

/// Executes GraphQL documents against a remote endpoint. The synchronizer
/// only ever talks to this trait, so tests can substitute a fake executor
/// and exercise every decision path without the network.
#[async_trait]
pub trait GraphQlExecutor: Send + Sync {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, GraphQlError>;
}

pub struct GithubClient {
    token: String,
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GraphQlExecutor for GithubClient {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, GraphQlError> {
        let body = serde_json::json!({ "query": document, "variables": variables });
        let resp = self
            .client
            .post("https://api.github.com/graphql")
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", "projectsync")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Value = resp.json().await?;
        extract_data(envelope)
    }
}

/// Unwraps a GraphQL response envelope: an `errors` array is a failure
/// even when the transport succeeded.
fn extract_data(envelope: Value) -> Result<Value, GraphQlError> {
    if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GraphQlError::Api(messages));
        }
    }
    match envelope.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(GraphQlError::MissingData),
    }
}
