//! Typed application configuration.
//!
//! One `AppConfig` is constructed at startup (YAML file plus environment
//! overrides) and handed to each component's constructor. Components never
//! reach into process-wide state.

pub mod paths;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::ScoutError;
pub use paths::AppPaths;

/// LLM provider selection and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name; only "openai" (and OpenAI-compatible endpoints) today.
    pub provider: String,
    /// Chat model identifier.
    pub model: String,
    /// Embedding model identifier, used by the similarity oracle.
    pub embedding_model: String,
    /// API key; falls back to `SCOUT_OPENAI_API_KEY` / `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Endpoint base URL, for OpenAI-compatible servers.
    pub base_url: String,
    /// Per-request timeout, enforced at the HTTP boundary.
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-5-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Feature extraction and scoring knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Recency half-life for papers, in days.
    pub paper_half_life_days: f64,
    /// Recency half-life for articles, in days. Articles go stale faster.
    pub article_half_life_days: f64,
    /// Citation count treated as "maximally cited".
    pub citation_cap: u32,
    /// Upvote count treated as "maximally engaged".
    pub upvote_cap: u32,
    /// Paper categories that carry the quality prior.
    pub core_categories: Vec<String>,
    /// Article sources that carry the quality prior.
    pub trusted_sources: Vec<String>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            paper_half_life_days: 30.0,
            article_half_life_days: 7.0,
            citation_cap: 100,
            upvote_cap: 500,
            core_categories: vec!["cs.LG".to_string(), "cs.AI".to_string()],
            trusted_sources: vec!["hackernews".to_string()],
        }
    }
}

/// Answer generation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Token cap for a full answer.
    pub answer_max_tokens: u32,
    /// Token cap for a personalized digest.
    pub summary_max_tokens: u32,
    /// Body text is truncated to this many characters before summarization.
    pub summary_truncate_chars: usize,
    /// Sampling temperature for both operations.
    pub temperature: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            answer_max_tokens: 1000,
            summary_max_tokens: 200,
            summary_truncate_chars: 2000,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Fallback interest profile when the user has not declared one.
    #[serde(default = "default_interests")]
    pub interests: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            ranking: RankingConfig::default(),
            generator: GeneratorConfig::default(),
            interests: default_interests(),
        }
    }
}

fn default_interests() -> Vec<String> {
    [
        "machine learning",
        "deep learning",
        "natural language processing",
        "computer vision",
        "reinforcement learning",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl AppConfig {
    /// Load from the discovered config path, falling back to defaults when
    /// no file exists. A file that exists but does not parse is an error;
    /// silently ignoring it would mask typos in user-edited YAML.
    pub fn load(paths: &AppPaths) -> Result<Self, ScoutError> {
        Self::load_from(&config_path(paths))
    }

    pub fn load_from(path: &Path) -> Result<Self, ScoutError> {
        if !path.exists() {
            return Ok(Self::with_env_overrides(Self::default()));
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ScoutError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: AppConfig = serde_yaml::from_str(&contents)
            .map_err(|e| ScoutError::Config(format!("cannot parse {}: {e}", path.display())))?;

        Ok(Self::with_env_overrides(config))
    }

    fn with_env_overrides(mut config: Self) -> Self {
        if config.llm.api_key.is_none() {
            config.llm.api_key = env::var("SCOUT_OPENAI_API_KEY")
                .or_else(|_| env::var("OPENAI_API_KEY"))
                .ok();
        }
        config
    }
}

fn config_path(paths: &AppPaths) -> PathBuf {
    if let Ok(path) = env::var("SCOUT_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    paths.data_dir.join("scout.yml")
}
