//! Collected content records and the user interest profile.
//!
//! Items are immutable once collected; every optional field has a defined
//! neutral substitute applied at feature-extraction time, so a partially
//! populated record never blocks ranking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An arXiv-style research paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub arxiv_id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub abstract_text: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    pub url: String,
    #[serde(default)]
    pub citation_count: Option<u32>,
}

/// A tech article from an aggregator (Hacker News, dev.to, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub source: String,
    pub source_id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    #[serde(default)]
    pub upvotes: Option<u32>,
}

/// Discriminator for the two content variants. Each kind has its own feature
/// schema and its own ranking model state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Paper,
    Article,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Paper => "paper",
            ContentKind::Article => "article",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentItem {
    Paper(Paper),
    Article(Article),
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Paper(_) => ContentKind::Paper,
            ContentItem::Article(_) => ContentKind::Article,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Paper(p) => &p.title,
            ContentItem::Article(a) => &a.title,
        }
    }

    /// Abstract for papers, body content for articles.
    pub fn body(&self) -> &str {
        match self {
            ContentItem::Paper(p) => &p.abstract_text,
            ContentItem::Article(a) => &a.content,
        }
    }

    pub fn published(&self) -> Option<DateTime<Utc>> {
        match self {
            ContentItem::Paper(p) => p.published,
            ContentItem::Article(a) => a.published,
        }
    }
}

/// Ordered set of free-text interest strings declared by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestProfile(pub Vec<String>);

impl InterestProfile {
    pub fn new<I, S>(interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(interests.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-joined form, fed to the similarity oracle.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    /// Comma-joined form, used inside prompts.
    pub fn listed(&self) -> String {
        self.0.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_accessors_cover_both_variants() {
        let paper = ContentItem::Paper(Paper {
            arxiv_id: "2501.00001".to_string(),
            title: "Attention Is Not All You Need".to_string(),
            authors: vec!["A. Researcher".to_string()],
            abstract_text: "We revisit attention.".to_string(),
            categories: vec!["cs.LG".to_string()],
            published: None,
            url: "https://arxiv.org/abs/2501.00001".to_string(),
            citation_count: Some(12),
        });

        assert_eq!(paper.kind(), ContentKind::Paper);
        assert_eq!(paper.body(), "We revisit attention.");
        assert!(paper.published().is_none());

        let article = ContentItem::Article(Article {
            source: "hackernews".to_string(),
            source_id: "41000000".to_string(),
            title: "Rust in production".to_string(),
            url: "https://example.com/rust".to_string(),
            content: String::new(),
            author: None,
            published: None,
            upvotes: None,
        });

        assert_eq!(article.kind(), ContentKind::Article);
        assert_eq!(article.kind().as_str(), "article");
    }

    #[test]
    fn profile_joins_preserve_order() {
        let profile = InterestProfile::new(["nlp", "vision"]);
        assert_eq!(profile.joined(), "nlp vision");
        assert_eq!(profile.listed(), "nlp, vision");
    }
}
