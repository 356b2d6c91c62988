use serde::Deserialize;

/// An issue as delivered in the webhook event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// GraphQL global node id, used as the content id when adding the
    /// issue to a board.
    pub node_id: String,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Issue {
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }
}
