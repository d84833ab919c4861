use serde::{Deserialize, Serialize};

/// Body of `POST /api/research/process`.
///
/// The browser side panel sends the mode as `operations`; both spellings are
/// accepted.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResearchRequest {
    #[serde(alias = "operations")]
    pub operation: String,
    pub content: String,
}

impl ResearchRequest {
    pub fn new(operation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            content: content.into(),
        }
    }
}
