//! Learned relevance ranking.
//!
//! This module provides:
//! - `RankingModel`: trainable regressor over a fixed feature schema
//! - `ModelStore`: the persisted `{weights, feature_names}` blob
//! - `Ranker`: batch ranking with per-kind model state

mod model;
mod ranker;
mod store;

pub use model::RankingModel;
pub use ranker::Ranker;
pub use store::ModelStore;
