//! Fixed-priority arbitration between the three matching strategies.
//!
//! Order: rule hit, confident semantic, confident lexical, low semantic,
//! low lexical, fallback. Semantic wins over lexical at equal tier even when
//! its score is lower.

use crate::config::ThresholdConfig;
use crate::knowledge::semantic::SemanticOutcome;
use crate::knowledge::vector::ScoredMatch;
use crate::patterns::RuleHit;
use serde::{Deserialize, Serialize};

/// Reply used when no strategy produced a usable entry
pub const FALLBACK_REPLY: &str = "Je ne suis pas sûr de bien comprendre votre question. \
Pourriez-vous la reformuler? Je peux vous renseigner sur:\n\
- Les sites touristiques (Médina, Carthage, Sidi Bou Saïd)\n\
- Les restaurants et la gastronomie tunisienne\n\
- Les transports et informations pratiques\n\
- L'histoire et la culture\n\
- Des suggestions d'itinéraires";

/// Strategy and confidence tier that produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    RuleBased,
    Embedding,
    Tfidf,
    EmbeddingLow,
    TfidfLow,
    Fallback,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::RuleBased => "rule-based",
            Self::Embedding => "embedding",
            Self::Tfidf => "tfidf",
            Self::EmbeddingLow => "embedding-low",
            Self::TfidfLow => "tfidf-low",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of the priority policy once no rule fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Embedding(ScoredMatch),
    Tfidf(ScoredMatch),
    EmbeddingLow(ScoredMatch),
    TfidfLow(ScoredMatch),
    Fallback,
}

impl Decision {
    pub fn method(&self) -> Method {
        match self {
            Self::Embedding(_) => Method::Embedding,
            Self::Tfidf(_) => Method::Tfidf,
            Self::EmbeddingLow(_) => Method::EmbeddingLow,
            Self::TfidfLow(_) => Method::TfidfLow,
            Self::Fallback => Method::Fallback,
        }
    }

    /// Selected knowledge entry, if any
    pub fn selected(&self) -> Option<ScoredMatch> {
        match self {
            Self::Embedding(m) | Self::Tfidf(m) | Self::EmbeddingLow(m) | Self::TfidfLow(m) => {
                Some(*m)
            }
            Self::Fallback => None,
        }
    }
}

/// Apply the priority policy to both index results.
///
/// The lexical best entry only counts as existing when it shares at least one
/// term with the utterance (score > 0); otherwise the fallback is reachable.
pub fn decide(
    semantic: SemanticOutcome,
    lexical: ScoredMatch,
    thresholds: &ThresholdConfig,
) -> Decision {
    match semantic {
        SemanticOutcome::Scored(s) if s.score > thresholds.semantic => Decision::Embedding(s),
        _ if lexical.score > thresholds.lexical => Decision::Tfidf(lexical),
        SemanticOutcome::Scored(s) => Decision::EmbeddingLow(s),
        SemanticOutcome::Unavailable if lexical.score > 0.0 => Decision::TfidfLow(lexical),
        SemanticOutcome::Unavailable => Decision::Fallback,
    }
}

/// Final answer for one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub answer: String,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Knowledge entry position, absent for rule and fallback replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<usize>,
}

impl Resolution {
    pub fn rule(hit: RuleHit) -> Self {
        Self {
            answer: hit.reply.to_string(),
            method: Method::RuleBased,
            score: None,
            entry: None,
        }
    }

    pub fn fallback() -> Self {
        Self {
            answer: FALLBACK_REPLY.to_string(),
            method: Method::Fallback,
            score: None,
            entry: None,
        }
    }

    pub fn from_entry(method: Method, m: ScoredMatch, answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            method,
            score: Some(m.score),
            entry: Some(m.index),
        }
    }

    /// Method label as recorded in the conversation log,
    /// e.g. `tfidf (score: 0.42)`
    pub fn label(&self) -> String {
        match self.score {
            Some(score) => format!("{} (score: {:.2})", self.method, score),
            None => self.method.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(index: usize, score: f64) -> ScoredMatch {
        ScoredMatch { index, score }
    }

    fn defaults() -> ThresholdConfig {
        ThresholdConfig::default()
    }

    #[test]
    fn test_semantic_beats_stronger_lexical() {
        let d = decide(SemanticOutcome::Scored(m(1, 0.51)), m(2, 0.90), &defaults());
        assert_eq!(d, Decision::Embedding(m(1, 0.51)));
    }

    #[test]
    fn test_lexical_when_semantic_weak() {
        let d = decide(SemanticOutcome::Scored(m(1, 0.40)), m(2, 0.35), &defaults());
        assert_eq!(d, Decision::Tfidf(m(2, 0.35)));
    }

    #[test]
    fn test_lexical_when_semantic_unavailable() {
        let d = decide(SemanticOutcome::Unavailable, m(3, 0.31), &defaults());
        assert_eq!(d.method(), Method::Tfidf);
    }

    #[test]
    fn test_low_semantic_beats_moderate_lexical() {
        let d = decide(SemanticOutcome::Scored(m(4, 0.02)), m(5, 0.29), &defaults());
        assert_eq!(d, Decision::EmbeddingLow(m(4, 0.02)));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let d = decide(SemanticOutcome::Scored(m(0, 0.5)), m(1, 0.3), &defaults());
        assert_eq!(d.method(), Method::EmbeddingLow);
    }

    #[test]
    fn test_low_lexical_without_semantic() {
        let d = decide(SemanticOutcome::Unavailable, m(6, 0.12), &defaults());
        assert_eq!(d, Decision::TfidfLow(m(6, 0.12)));
    }

    #[test]
    fn test_fallback_without_overlap() {
        let d = decide(SemanticOutcome::Unavailable, m(0, 0.0), &defaults());
        assert_eq!(d, Decision::Fallback);
        assert!(d.selected().is_none());
    }

    #[test]
    fn test_labels() {
        let r = Resolution::from_entry(Method::Tfidf, m(0, 0.4213), "x");
        assert_eq!(r.label(), "tfidf (score: 0.42)");
        let r = Resolution::from_entry(Method::EmbeddingLow, m(0, 0.12), "x");
        assert_eq!(r.label(), "embedding-low (score: 0.12)");
        assert_eq!(Resolution::fallback().label(), "fallback");
    }

    #[test]
    fn test_method_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Method::RuleBased).unwrap(),
            "\"rule-based\""
        );
        assert_eq!(
            serde_json::to_string(&Method::TfidfLow).unwrap(),
            "\"tfidf-low\""
        );
    }
}
