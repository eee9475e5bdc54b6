//! TunisBot - the utterance resolution pipeline.
//!
//! Flow: pattern rules short-circuit; otherwise both indexes are queried and
//! the arbiter picks the answer. `chat` also records the turn.

use crate::arbiter::{decide, Resolution};
use crate::config::{Config, ThresholdConfig};
use crate::conversation::{ConversationLog, ConversationStats, ConversationTurn};
use crate::error::{EmbeddingError, Result};
use crate::knowledge::embedding::{EmbeddingProvider, OllamaEmbedder};
use crate::knowledge::lexical::LexicalIndex;
use crate::knowledge::semantic::SemanticIndex;
use crate::knowledge::KnowledgeBase;
use crate::patterns::PatternMatcher;
use crate::preprocess::Preprocessor;
use std::sync::Arc;
use tracing::{debug, info};

pub struct TunisBot {
    knowledge: KnowledgeBase,
    patterns: PatternMatcher,
    lexical: LexicalIndex,
    semantic: SemanticIndex,
    thresholds: ThresholdConfig,
    log: ConversationLog,
}

impl TunisBot {
    /// Load every resource named by the config and connect the embedding backend.
    ///
    /// Knowledge, stopword and pattern failures are fatal. An embedding failure
    /// only leaves the semantic index unavailable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let knowledge = KnowledgeBase::load(config.knowledge.path.as_deref())?;
        let preprocessor = Preprocessor::load(config.knowledge.stopwords_path.as_deref())?;
        let provider = OllamaEmbedder::connect(&config.embeddings)
            .map(|e| Arc::new(e) as Arc<dyn EmbeddingProvider>);
        Self::with_provider(knowledge, preprocessor, provider, config.thresholds)
    }

    /// Assemble the pipeline around an explicit embedding provider
    pub fn with_provider(
        knowledge: KnowledgeBase,
        preprocessor: Preprocessor,
        provider: std::result::Result<Arc<dyn EmbeddingProvider>, EmbeddingError>,
        thresholds: ThresholdConfig,
    ) -> Result<Self> {
        let patterns = PatternMatcher::new()?;
        let lexical = LexicalIndex::build(&knowledge, preprocessor);
        let semantic = SemanticIndex::build(&knowledge, provider);

        info!(
            "TunisBot ready: {} entries, {} terms, {} patterns, semantic {}",
            knowledge.len(),
            lexical.vocabulary_size(),
            patterns.pattern_count(),
            if semantic.is_available() { "on" } else { "off" }
        );

        Ok(Self {
            knowledge,
            patterns,
            lexical,
            semantic,
            thresholds,
            log: ConversationLog::new(),
        })
    }

    /// Resolve an utterance without touching the conversation log
    pub fn resolve(&self, utterance: &str) -> Resolution {
        if let Some(hit) = self.patterns.matches(utterance) {
            debug!("rule hit: {}", hit.intent);
            return Resolution::rule(hit);
        }

        let semantic = self.semantic.score(utterance);
        let lexical = self.lexical.score(utterance);
        let decision = decide(semantic, lexical, &self.thresholds);
        debug!(
            "semantic={:?} lexical={:.3}@{} -> {}",
            semantic,
            lexical.score,
            lexical.index,
            decision.method()
        );

        let selected = decision
            .selected()
            .and_then(|m| self.knowledge.get(m.index).map(|entry| (m, entry)));
        match selected {
            Some((m, entry)) => Resolution::from_entry(decision.method(), m, &entry.answer),
            None => Resolution::fallback(),
        }
    }

    /// Resolve and record the turn
    pub fn chat(&self, utterance: &str) -> Resolution {
        let resolution = self.resolve(utterance);
        self.log.record(
            utterance,
            &resolution.answer,
            &resolution.label(),
            resolution.score,
        );
        resolution
    }

    pub fn history(&self) -> Vec<ConversationTurn> {
        self.log.history()
    }

    pub fn clear_history(&self) {
        self.log.clear();
        info!("Conversation history cleared");
    }

    pub fn stats(&self) -> ConversationStats {
        self.log.stats()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn vocabulary_size(&self) -> usize {
        self.lexical.vocabulary_size()
    }

    pub fn semantic_available(&self) -> bool {
        self.semantic.is_available()
    }

    /// Embedding model in use, if the semantic index is ready
    pub fn semantic_model(&self) -> Option<&str> {
        self.semantic.model()
    }
}
