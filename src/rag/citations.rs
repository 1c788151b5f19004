//! Citations derived from retrieved-document metadata.

use serde::{Deserialize, Serialize};

use super::retrieval::RetrievedDocument;

/// Read-only bibliographic projection of one context document. Produced once
/// per answer, never mutated; numbering is positional over the context list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Citation {
    Paper {
        title: String,
        arxiv_id: String,
        url: String,
    },
    Article {
        title: String,
        url: String,
        source: String,
    },
}

/// One citation per document carrying a recognized `type`; documents with a
/// missing or unknown type are dropped without affecting the relative order
/// of the rest. Best-effort index over the supplied context, independent of
/// which sources the generated text actually references.
pub fn extract_citations(context: &[RetrievedDocument]) -> Vec<Citation> {
    context
        .iter()
        .filter_map(|doc| match doc.meta_str("type") {
            Some("paper") => Some(Citation::Paper {
                title: doc.meta_str("title").unwrap_or("Unknown").to_string(),
                arxiv_id: doc.meta_str("paper_id").unwrap_or_default().to_string(),
                url: doc.meta_str("url").unwrap_or_default().to_string(),
            }),
            Some("article") => Some(Citation::Article {
                title: doc.meta_str("title").unwrap_or("Unknown").to_string(),
                url: doc.meta_str("url").unwrap_or_default().to_string(),
                source: doc.meta_str("source").unwrap_or_default().to_string(),
            }),
            _ => None,
        })
        .collect()
}
