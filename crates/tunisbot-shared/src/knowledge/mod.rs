//! Knowledge base and similarity indexes.
//!
//! The knowledge base is loaded once, validated, and shared read-only through `Arc`.
//! Row `i` of every index refers to entry `i` of the base.

pub mod embedding;
pub mod lexical;
pub mod pack;
pub mod semantic;
pub mod vector;

use crate::error::{BotError, Result};
use pack::TUNIS_PACK;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// One canned question/answer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

/// Immutable, ordered knowledge base
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Arc<[KnowledgeEntry]>,
}

impl KnowledgeBase {
    /// Build from entries, rejecting empty bases and blank records
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(BotError::KnowledgeBase(
                "knowledge base has no entries".to_string(),
            ));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.question.trim().is_empty() {
                return Err(BotError::KnowledgeBase(format!(
                    "entry {} has an empty question",
                    i
                )));
            }
            if entry.answer.trim().is_empty() {
                return Err(BotError::KnowledgeBase(format!(
                    "entry {} has an empty answer",
                    i
                )));
            }
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The built-in Tunis tourism base
    pub fn builtin() -> Self {
        let entries: Vec<KnowledgeEntry> = TUNIS_PACK
            .iter()
            .map(|e| KnowledgeEntry {
                question: e.question.to_string(),
                answer: e.answer.to_string(),
                category: e.category.to_string(),
            })
            .collect();
        Self {
            entries: entries.into(),
        }
    }

    /// Load a JSON array of `{question, answer, category}` records
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BotError::KnowledgeBase(format!("cannot read {}: {}", path.display(), e))
        })?;
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(&content)?;
        let kb = Self::new(entries)?;
        info!("Loaded {} knowledge entries from {}", kb.len(), path.display());
        Ok(kb)
    }

    /// Configured file when given, built-in pack otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => {
                let kb = Self::builtin();
                info!("Using built-in knowledge base ({} entries)", kb.len());
                Ok(kb)
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&KnowledgeEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
