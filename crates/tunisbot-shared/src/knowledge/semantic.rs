//! Dense-vector index over raw knowledge base questions.
//!
//! Availability is decided once at build time. A per-query provider failure
//! is reported as `Unavailable` for that call only, never as a zero score.

use super::embedding::EmbeddingProvider;
use super::vector::{best_match, is_finite, ScoredMatch};
use super::KnowledgeBase;
use crate::error::EmbeddingError;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a semantic query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SemanticOutcome {
    Unavailable,
    Scored(ScoredMatch),
}

impl SemanticOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, SemanticOutcome::Scored(_))
    }
}

/// Semantic similarity index
pub enum SemanticIndex {
    Ready {
        provider: Arc<dyn EmbeddingProvider>,
        rows: Vec<Vec<f64>>,
    },
    Unavailable {
        reason: String,
    },
}

impl std::fmt::Debug for SemanticIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready { provider, rows } => f
                .debug_struct("Ready")
                .field("model", &provider.model())
                .field("rows", &rows.len())
                .finish(),
            Self::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}

/// Widen to f64, rejecting vectors with NaN or infinite components
fn widen(v: Vec<f32>) -> Result<Vec<f64>, EmbeddingError> {
    let wide: Vec<f64> = v.into_iter().map(f64::from).collect();
    if is_finite(&wide) {
        Ok(wide)
    } else {
        Err(EmbeddingError::InvalidResponse(
            "non-finite vector component".to_string(),
        ))
    }
}

impl SemanticIndex {
    /// Encode every question; any failure leaves the index unavailable
    pub fn build(
        kb: &KnowledgeBase,
        provider: Result<Arc<dyn EmbeddingProvider>, EmbeddingError>,
    ) -> Self {
        let provider = match provider {
            Ok(p) => p,
            Err(e) => {
                warn!("Semantic index unavailable: {}", e);
                return Self::unavailable(e.to_string());
            }
        };

        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(kb.len());
        for (i, question) in kb.questions().enumerate() {
            let vector = match provider.encode(question).and_then(widen) {
                Ok(v) if v.is_empty() => {
                    warn!("Semantic index unavailable: entry {} encoded to nothing", i);
                    return Self::unavailable(EmbeddingError::Empty.to_string());
                }
                Ok(v) => v,
                Err(e) => {
                    warn!("Semantic index unavailable: entry {} failed: {}", i, e);
                    return Self::unavailable(e.to_string());
                }
            };
            if let Some(first) = rows.first() {
                if first.len() != vector.len() {
                    let err = EmbeddingError::Dimension {
                        expected: first.len(),
                        got: vector.len(),
                    };
                    warn!("Semantic index unavailable: entry {}: {}", i, err);
                    return Self::unavailable(err.to_string());
                }
            }
            rows.push(vector);
        }

        info!(
            "Semantic index built: {} entries with model {}",
            rows.len(),
            provider.model()
        );
        Self::Ready { provider, rows }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Why the index is unavailable, if it is
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Ready { .. } => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Ready { provider, .. } => Some(provider.model()),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ready { rows, .. } => rows.len(),
            Self::Unavailable { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode the raw utterance and return the best entry
    pub fn score(&self, utterance: &str) -> SemanticOutcome {
        let (provider, rows) = match self {
            Self::Ready { provider, rows } => (provider, rows),
            Self::Unavailable { .. } => return SemanticOutcome::Unavailable,
        };

        let query = match provider.encode(utterance).and_then(widen) {
            Ok(v) => v,
            Err(e) => {
                warn!("Semantic query failed, skipping for this call: {}", e);
                return SemanticOutcome::Unavailable;
            }
        };

        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if query.len() != expected {
            warn!(
                "Semantic query failed, skipping for this call: {}",
                EmbeddingError::Dimension {
                    expected,
                    got: query.len()
                }
            );
            return SemanticOutcome::Unavailable;
        }

        match best_match(&query, rows) {
            Some(m) => SemanticOutcome::Scored(m),
            None => SemanticOutcome::Unavailable,
        }
    }
}
