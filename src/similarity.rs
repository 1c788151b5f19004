//! Semantic similarity oracle.
//!
//! The feature extractor treats the score as an opaque relevance signal in
//! [0, 1]. The shipped implementation embeds both texts through the LLM
//! provider and takes cosine similarity, remapped from [-1, 1].

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::ScoutError;
use crate::llm::LlmProvider;

#[async_trait]
pub trait SimilarityOracle: Send + Sync {
    /// Scalar semantic similarity of two texts. Deterministic for a fixed
    /// embedding model; no side effects.
    async fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, ScoutError>;
}

pub struct EmbeddingSimilarity {
    provider: Arc<dyn LlmProvider>,
}

impl EmbeddingSimilarity {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SimilarityOracle for EmbeddingSimilarity {
    async fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, ScoutError> {
        let inputs = [text_a.to_string(), text_b.to_string()];
        let embeddings = self.provider.embed(&inputs).await?;

        if embeddings.len() != 2 {
            return Err(ScoutError::Provider(format!(
                "expected 2 embeddings, got {}",
                embeddings.len()
            )));
        }

        let cosine = cosine_similarity(&embeddings[0], &embeddings[1])?;
        // Map [-1, 1] onto [0, 1] so downstream code sees one fixed range.
        Ok(((cosine + 1.0) / 2.0).clamp(0.0, 1.0))
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoutError> {
    if a.is_empty() || b.is_empty() {
        return Err(ScoutError::InvalidInput(
            "vectors must not be empty".to_string(),
        ));
    }
    if a.len() != b.len() {
        return Err(ScoutError::InvalidInput(format!(
            "vector length mismatch: {} != {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| (*x as f64) * (*y as f64)).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    let denom = norm_a * norm_b;
    if denom <= f64::EPSILON {
        return Ok(0.0);
    }

    Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}
