pub mod openai;
pub mod provider;
pub mod types;

pub use provider::{build_provider, LlmProvider};
pub use types::{ChatMessage, CompletionRequest};
