//! Error types for TunisBot.
//!
//! `BotError` covers initialization failures, which are fatal at startup.
//! `EmbeddingError` never aborts anything: it degrades the semantic index.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Message vide")]
    EmptyInput,

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Invalid intent pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Stopword list error: {0}")]
    Stopwords(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl BotError {
    /// True for errors that must abort startup.
    pub fn is_initialization_failure(&self) -> bool {
        !matches!(self, BotError::EmptyInput)
    }
}

#[derive(Error, Debug, Clone)]
pub enum EmbeddingError {
    #[error("embeddings are disabled in configuration")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),

    #[error("embedding provider returned an empty vector")]
    Empty,

    #[error("dimension mismatch: expected {expected}, got {got}")]
    Dimension { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, BotError>;
