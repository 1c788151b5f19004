//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `RetrievalOracle` / `RetrievedDocument`: the vector-store boundary
//! - `Citation` extraction from document metadata
//! - `AnswerGenerator`: cited answers and personalized digests

mod citations;
mod generator;
mod retrieval;

pub use citations::{extract_citations, Citation};
pub use generator::{AnswerGenerator, AnswerResult};
pub use retrieval::{RetrievalOracle, RetrievedDocument};
