//! Shared core for TunisBot components.
//!
//! Hybrid utterance resolution: intent patterns, TF-IDF and sentence
//! embeddings over a small French knowledge base about Tunis.

pub mod arbiter;
pub mod bot;
pub mod config;
pub mod conversation;
pub mod error;
pub mod knowledge;
pub mod patterns;
pub mod preprocess;

pub use arbiter::{Method, Resolution, FALLBACK_REPLY};
pub use bot::TunisBot;
pub use config::Config;
pub use conversation::{ConversationLog, ConversationStats, ConversationTurn};
pub use error::{BotError, EmbeddingError, Result};
pub use knowledge::embedding::{EmbeddingProvider, OllamaEmbedder};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use preprocess::Preprocessor;

/// Version shown in banners and health output
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
