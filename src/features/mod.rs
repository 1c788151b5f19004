//! Fixed-schema feature vectors, one schema per content kind.
//!
//! The two schemas intentionally diverge: paper titles are penalized for
//! length while article bodies are rewarded for it, so they cannot share a
//! single polymorphic layout. Each schema pairs with its own ranking model
//! state, and the name order below is part of that model's contract.

pub mod extractor;

pub use extractor::FeatureExtractor;

use crate::content::ContentKind;

pub const PAPER_FEATURE_NAMES: [&str; 5] =
    ["similarity", "recency", "citations", "category", "title_length"];

pub const ARTICLE_FEATURE_NAMES: [&str; 5] =
    ["similarity", "recency", "engagement", "source", "content_length"];

pub fn feature_names(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Paper => &PAPER_FEATURE_NAMES,
        ContentKind::Article => &ARTICLE_FEATURE_NAMES,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaperFeatures {
    pub similarity: f64,
    pub recency: f64,
    pub citations: f64,
    pub category: f64,
    pub title_length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFeatures {
    pub similarity: f64,
    pub recency: f64,
    pub engagement: f64,
    pub source: f64,
    pub content_length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureVector {
    Paper(PaperFeatures),
    Article(ArticleFeatures),
}

impl FeatureVector {
    pub fn kind(&self) -> ContentKind {
        match self {
            FeatureVector::Paper(_) => ContentKind::Paper,
            FeatureVector::Article(_) => ContentKind::Article,
        }
    }

    /// Value by feature name, or None for a name outside this schema.
    pub fn get(&self, name: &str) -> Option<f64> {
        match self {
            FeatureVector::Paper(f) => match name {
                "similarity" => Some(f.similarity),
                "recency" => Some(f.recency),
                "citations" => Some(f.citations),
                "category" => Some(f.category),
                "title_length" => Some(f.title_length),
                _ => None,
            },
            FeatureVector::Article(f) => match name {
                "similarity" => Some(f.similarity),
                "recency" => Some(f.recency),
                "engagement" => Some(f.engagement),
                "source" => Some(f.source),
                "content_length" => Some(f.content_length),
                _ => None,
            },
        }
    }

    /// Value by name with the model's 0.0 default for unknown names.
    pub fn value_or_zero(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    /// (name, value) pairs in schema order.
    pub fn pairs(&self) -> Vec<(&'static str, f64)> {
        feature_names(self.kind())
            .iter()
            .map(|name| (*name, self.value_or_zero(name)))
            .collect()
    }
}
