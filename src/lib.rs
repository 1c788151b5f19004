//! research-scout: ranking and RAG core for a personal research assistant.
//!
//! Collected papers and articles are turned into fixed-schema feature
//! vectors, scored by a per-kind trainable model, and ranked; free-form
//! questions are answered against retrieved context with positional
//! citations. Collectors, storage, and the vector store are external
//! collaborators behind narrow trait seams.

pub mod content;
pub mod core;
pub mod features;
pub mod llm;
pub mod logging;
pub mod rag;
pub mod ranking;
pub mod similarity;

pub use crate::content::{Article, ContentItem, ContentKind, InterestProfile, Paper};
pub use crate::core::config::{AppConfig, AppPaths};
pub use crate::core::errors::ScoutError;
pub use crate::features::{FeatureExtractor, FeatureVector};
pub use crate::llm::{build_provider, LlmProvider};
pub use crate::rag::{AnswerGenerator, AnswerResult, Citation, RetrievalOracle, RetrievedDocument};
pub use crate::ranking::Ranker;
pub use crate::similarity::{EmbeddingSimilarity, SimilarityOracle};
