//! Embedding provider abstraction.
//!
//! The semantic index only sees the `EmbeddingProvider` trait. The production
//! implementation talks to a local Ollama server; tests plug in fakes.

use crate::config::EmbeddingConfig;
use crate::error::EmbeddingError;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Sentence encoder: same text, same model, same vector
pub trait EmbeddingProvider: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Model identifier for logs and health output
    fn model(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

/// Ollama `/api/embeddings` client
pub struct OllamaEmbedder {
    config: EmbeddingConfig,
    client: reqwest::blocking::Client,
    dimension: usize,
}

impl OllamaEmbedder {
    /// Build the client and query the server once. Any failure here means the
    /// capability is absent for the process lifetime.
    pub fn connect(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        if !config.enabled {
            return Err(EmbeddingError::Disabled);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::Http(format!("failed to create HTTP client: {}", e)))?;

        let mut embedder = Self {
            config: config.clone(),
            client,
            dimension: 0,
        };
        let sample = embedder.request("bonjour")?;
        embedder.dimension = sample.len();
        info!(
            "Embedding model {} ready ({} dimensions)",
            embedder.config.model, embedder.dimension
        );
        Ok(embedder)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn request(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/api/embeddings", self.config.endpoint.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.config.model,
            "prompt": text,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    EmbeddingError::Timeout(self.config.timeout_secs)
                } else {
                    EmbeddingError::Http(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(EmbeddingError::Http(format!("status {}: {}", status, text)));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;
        if parsed.embedding.is_empty() {
            return Err(EmbeddingError::Empty);
        }
        debug!("encoded {} chars into {} dims", text.len(), parsed.embedding.len());
        Ok(parsed.embedding)
    }
}

impl EmbeddingProvider for OllamaEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let vector = self.request(text)?;
        if self.dimension != 0 && vector.len() != self.dimension {
            return Err(EmbeddingError::Dimension {
                expected: self.dimension,
                got: vector.len(),
            });
        }
        Ok(vector)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
