//! Configuration management for TunisBot.
//!
//! Loads settings from a TOML file or uses defaults. Every field has a serde
//! default, so partial files are valid.

use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// System-wide config file path
pub const CONFIG_PATH: &str = "/etc/tunisbot/config.toml";

/// Environment override for the config path
pub const CONFIG_ENV: &str = "TUNISBOT_CONFIG";

/// HTTP service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Knowledge base and language resources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// JSON knowledge file; built-in Tunis pack when absent
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Newline-separated stopword file; built-in French list when absent
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,
}

/// Embedding backend (Ollama)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    #[serde(default = "default_embeddings_enabled")]
    pub enabled: bool,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Multilingual sentence-embedding model
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Per-request timeout; expiry makes that query "unavailable"
    #[serde(default = "default_embedding_timeout")]
    pub timeout_secs: u64,
}

fn default_embeddings_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_embedding_model() -> String {
    "paraphrase-multilingual".to_string()
}

fn default_embedding_timeout() -> u64 {
    10
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: default_embeddings_enabled(),
            endpoint: default_endpoint(),
            model: default_embedding_model(),
            timeout_secs: default_embedding_timeout(),
        }
    }
}

/// Arbiter gates (strictly greater than)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_semantic_threshold")]
    pub semantic: f64,

    #[serde(default = "default_lexical_threshold")]
    pub lexical: f64,
}

fn default_semantic_threshold() -> f64 {
    0.5
}

fn default_lexical_threshold() -> f64 {
    0.3
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            semantic: default_semantic_threshold(),
            lexical: default_lexical_threshold(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    #[serde(default)]
    pub embeddings: EmbeddingConfig,

    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl Config {
    /// Load config. An explicit path must exist and parse; otherwise the
    /// environment override, system path, and user path are tried in turn,
    /// falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        for path in Self::search_paths() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        warn!("Config not found, using defaults");
        Ok(Config::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(p));
        }
        paths.push(PathBuf::from(CONFIG_PATH));
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("tunisbot").join("config.toml"));
        }
        paths
    }

    /// Load config from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("thresholds.semantic", self.thresholds.semantic),
            ("thresholds.lexical", self.thresholds.lexical),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(BotError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
