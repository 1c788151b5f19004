//! Cited answer generation.
//!
//! Builds a numbered context block from the retrieved documents, issues one
//! completion, and attaches citations derived from the same context. The
//! numbering of the context block is the citation numbering: positional and
//! 1-indexed, in the order the retrieval oracle returned the documents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::citations::{extract_citations, Citation};
use super::retrieval::RetrievedDocument;
use crate::content::InterestProfile;
use crate::core::config::GeneratorConfig;
use crate::core::errors::ScoutError;
use crate::llm::{CompletionRequest, LlmProvider};

const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant specialized in machine learning and research.";

/// Generated answer plus the citations for its context, in context order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub citations: Vec<Citation>,
}

pub struct AnswerGenerator {
    provider: Arc<dyn LlmProvider>,
    config: GeneratorConfig,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    /// Answer a question against the supplied context.
    ///
    /// Always returns an `AnswerResult`: a failed completion produces an
    /// answer bearing an explicit error message, and the citations are
    /// computed from the context either way. Citations index the supplied
    /// documents, not the `[Source N]` markers the model actually emitted;
    /// a marker-verified citation list is a known gap.
    pub async fn generate_answer(
        &self,
        question: &str,
        context: &[RetrievedDocument],
        profile: &InterestProfile,
    ) -> AnswerResult {
        let prompt = answer_prompt(question, context, profile);

        let answer = match self
            .provider
            .complete(CompletionRequest {
                system_prompt: SYSTEM_PROMPT.to_string(),
                user_prompt: prompt,
                max_tokens: self.config.answer_max_tokens,
                temperature: self.config.temperature,
            })
            .await
        {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("answer generation failed: {}", err);
                format!("Error generating response: {err}")
            }
        };

        AnswerResult {
            answer,
            citations: extract_citations(context),
        }
    }

    /// Short personalized digest (~100 words) for one collected item. The
    /// body is truncated before prompting to bound prompt size. Same degraded
    /// error policy as `generate_answer`.
    pub async fn summarize(
        &self,
        title: &str,
        body: &str,
        profile: &InterestProfile,
    ) -> String {
        let truncated: String = body.chars().take(self.config.summary_truncate_chars).collect();
        let prompt = summary_prompt(title, &truncated, profile);

        match self
            .provider
            .complete(CompletionRequest {
                system_prompt: SYSTEM_PROMPT.to_string(),
                user_prompt: prompt,
                max_tokens: self.config.summary_max_tokens,
                temperature: self.config.temperature,
            })
            .await
        {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("summary generation failed: {}", err);
                format!("Error generating response: {err}")
            }
        }
    }
}

fn answer_prompt(
    question: &str,
    context: &[RetrievedDocument],
    profile: &InterestProfile,
) -> String {
    let context_text = context
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            format!(
                "[Source {}]: {}\nMetadata: {}",
                i + 1,
                doc.text,
                Value::Object(doc.metadata.clone())
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are a helpful AI teaching assistant. Answer the following question using the provided context.\n\
         \n\
         User interests: {interests}\n\
         \n\
         Question: {question}\n\
         \n\
         Context:\n\
         {context_text}\n\
         \n\
         Instructions:\n\
         1. Provide a clear, comprehensive answer\n\
         2. Cite specific sources using [Source N] format\n\
         3. If the context doesn't fully answer the question, say so\n\
         4. Explain concepts in a way that's accessible but technically accurate\n\
         5. Relate the answer to the user's interests when relevant\n\
         \n\
         Answer:",
        interests = profile.listed(),
    )
}

fn summary_prompt(title: &str, body: &str, profile: &InterestProfile) -> String {
    format!(
        "Summarize this for an ML grad student focused on {interests}.\n\
         \n\
         Title: {title}\n\
         Content: {body}\n\
         \n\
         Provide:\n\
         - One-sentence key insight\n\
         - Why they should care (2-3 sentences)\n\
         - How it relates to their interests\n\
         \n\
         Keep under 100 words. Be concise and actionable.",
        interests = profile.listed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Map};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct RecordingProvider {
        response: Result<String, String>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl RecordingProvider {
        fn ok(response: &str) -> Self {
            Self {
                response: Ok(response.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> CompletionRequest {
            self.requests
                .lock()
                .expect("lock")
                .last()
                .cloned()
                .expect("a request was made")
        }
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn complete(&self, request: CompletionRequest) -> Result<String, ScoutError> {
            self.requests.lock().expect("lock").push(request);
            self.response
                .clone()
                .map_err(ScoutError::Provider)
        }

        async fn embed(&self, _inputs: &[String]) -> Result<Vec<Vec<f32>>, ScoutError> {
            Err(ScoutError::Provider("not an embedder".to_string()))
        }
    }

    fn paper_doc(text: &str) -> RetrievedDocument {
        let metadata = match json!({
            "type": "paper",
            "title": "Scaling Laws",
            "paper_id": "2001.08361",
            "url": "https://arxiv.org/abs/2001.08361"
        }) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        RetrievedDocument::new(text, metadata)
    }

    fn article_doc(text: &str) -> RetrievedDocument {
        let metadata = match json!({
            "type": "article",
            "title": "Async in Practice",
            "url": "https://example.com/async",
            "source": "hackernews"
        }) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        RetrievedDocument::new(text, metadata)
    }

    fn generator(provider: Arc<RecordingProvider>) -> AnswerGenerator {
        AnswerGenerator::new(provider, GeneratorConfig::default())
    }

    #[tokio::test]
    async fn answer_carries_context_citations() {
        let provider = Arc::new(RecordingProvider::ok(
            "Scaling is power-law [Source 1], async is hard [Source 2].",
        ));
        let gen = generator(provider.clone());

        let context = vec![paper_doc("scaling laws text"), article_doc("async text")];
        let result = gen
            .generate_answer("How do models scale?", &context, &InterestProfile::new(["ml"]))
            .await;

        assert!(result.answer.contains("[Source 1]"));
        assert_eq!(result.citations.len(), 2);
        assert!(matches!(result.citations[0], Citation::Paper { .. }));
        assert!(matches!(result.citations[1], Citation::Article { .. }));
    }

    #[tokio::test]
    async fn context_block_is_numbered_in_input_order() {
        let provider = Arc::new(RecordingProvider::ok("answer"));
        let gen = generator(provider.clone());

        let context = vec![paper_doc("first document"), article_doc("second document")];
        gen.generate_answer("q", &context, &InterestProfile::new(["ml", "rust"]))
            .await;

        let request = provider.last_request();
        let source_1 = request.user_prompt.find("[Source 1]: first document");
        let source_2 = request.user_prompt.find("[Source 2]: second document");
        assert!(source_1.is_some() && source_2.is_some());
        assert!(source_1 < source_2);
        assert!(request.user_prompt.contains("User interests: ml, rust"));
        assert_eq!(request.max_tokens, 1000);
    }

    #[tokio::test]
    async fn failed_completion_degrades_but_keeps_citations() {
        let provider = Arc::new(RecordingProvider::failing("rate limited"));
        let gen = generator(provider);

        let context = vec![paper_doc("doc"), article_doc("doc")];
        let result = gen
            .generate_answer("q", &context, &InterestProfile::default())
            .await;

        assert!(result.answer.contains("Error generating response"));
        assert!(result.answer.contains("rate limited"));
        assert_eq!(result.citations.len(), 2);
    }

    #[tokio::test]
    async fn summarize_truncates_body_and_caps_tokens() {
        let provider = Arc::new(RecordingProvider::ok("A digest."));
        let gen = generator(provider.clone());

        let body = "x".repeat(5000);
        let summary = gen
            .summarize("Long Paper", &body, &InterestProfile::new(["nlp"]))
            .await;
        assert_eq!(summary, "A digest.");

        let request = provider.last_request();
        assert_eq!(request.max_tokens, 200);
        assert!(request.user_prompt.contains("focused on nlp"));
        // 2000-char truncation applied before prompting
        assert!(!request.user_prompt.contains(&"x".repeat(2001)));
        assert!(request.user_prompt.contains(&"x".repeat(2000)));
    }

    #[tokio::test]
    async fn empty_context_still_yields_an_answer_shape() {
        let provider = Arc::new(RecordingProvider::ok("I don't have enough context."));
        let gen = generator(provider);

        let result = gen
            .generate_answer("q", &[], &InterestProfile::default())
            .await;

        assert!(!result.answer.is_empty());
        assert!(result.citations.is_empty());
    }
}
