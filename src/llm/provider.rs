use std::sync::Arc;

use async_trait::async_trait;

use super::openai::OpenAiProvider;
use super::types::CompletionRequest;
use crate::core::config::LlmConfig;
use crate::core::errors::ScoutError;

#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// return the provider name (e.g. "openai")
    fn name(&self) -> &str;

    /// chat completion (non-streaming)
    async fn complete(&self, request: CompletionRequest) -> Result<String, ScoutError>;

    /// generate embeddings
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoutError>;
}

/// Select and construct the generation backend. Unsupported provider names
/// and missing credentials are configuration errors raised here, before any
/// work is attempted.
pub fn build_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, ScoutError> {
    match config.provider.as_str() {
        "openai" => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| ScoutError::Config("OPENAI_API_KEY not set".to_string()))?;
            Ok(Arc::new(OpenAiProvider::new(
                config.base_url.clone(),
                api_key,
                config.model.clone(),
                config.embedding_model.clone(),
                config.request_timeout_secs,
            )))
        }
        other => Err(ScoutError::Config(format!(
            "unsupported LLM provider: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LlmConfig;

    #[test]
    fn unsupported_provider_fails_at_construction() {
        let config = LlmConfig {
            provider: "parrot".to_string(),
            api_key: Some("k".to_string()),
            ..Default::default()
        };

        let err = build_provider(&config).expect_err("should fail");
        assert!(matches!(err, ScoutError::Config(_)));
        assert!(err.to_string().contains("parrot"));
    }

    #[test]
    fn missing_api_key_fails_at_construction() {
        let config = LlmConfig {
            api_key: None,
            ..Default::default()
        };

        let err = build_provider(&config).expect_err("should fail");
        assert!(matches!(err, ScoutError::Config(_)));
    }

    #[test]
    fn openai_provider_builds_with_key() {
        let config = LlmConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };

        let provider = build_provider(&config).expect("should build");
        assert_eq!(provider.name(), "openai");
    }
}
