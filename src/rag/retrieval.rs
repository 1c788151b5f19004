//! Retrieval oracle boundary.
//!
//! The vector store is an external collaborator; this module only defines
//! the document shape it must return and the trait it is called through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::errors::ScoutError;

/// A context document returned by the retrieval oracle, already
/// relevance-ranked. Metadata must carry at least a `type` discriminator
/// ("paper" or "article") plus the fields needed to build a citation:
/// `title`, `url`, and `paper_id` or `source`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub text: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RetrievedDocument {
    pub fn new(text: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

#[async_trait]
pub trait RetrievalOracle: Send + Sync {
    /// Top-k documents for a query, most relevant first.
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<RetrievedDocument>, ScoutError>;
}
