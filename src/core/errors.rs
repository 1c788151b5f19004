use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    /// Caller bug: an input contract was violated (e.g. parallel slice lengths).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Bad or incomplete configuration, raised at construction time.
    #[error("configuration error: {0}")]
    Config(String),
    /// An external collaborator (LLM, embedding service) failed.
    #[error("provider error: {0}")]
    Provider(String),
    /// Model blob could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl ScoutError {
    pub fn provider<E: std::fmt::Display>(err: E) -> Self {
        ScoutError::Provider(err.to_string())
    }

    pub fn persistence<E: std::fmt::Display>(err: E) -> Self {
        ScoutError::Persistence(err.to_string())
    }
}
