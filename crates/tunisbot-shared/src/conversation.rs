//! Append-only conversation log.
//!
//! The only mutable state shared between concurrent requests. Appends take the
//! write guard, which also assigns the sequence number, so log order equals
//! arrival order. Reads clone a snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One user/bot exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// 1-based, never reused (not reset by `clear`)
    pub sequence: u64,
    #[serde(rename = "user")]
    pub user_text: String,
    #[serde(rename = "bot")]
    pub bot_text: String,
    /// Exact label, including the formatted score
    #[serde(rename = "method")]
    pub method_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Total turns and occurrences per exact method label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStats {
    pub total: usize,
    pub by_label: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
struct LogState {
    turns: Vec<ConversationTurn>,
    next_sequence: u64,
}

#[derive(Debug, Default)]
pub struct ConversationLog {
    state: RwLock<LogState>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends are all-or-nothing, a poisoned guard still holds a consistent log
    fn read(&self) -> RwLockReadGuard<'_, LogState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LogState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a turn and return it with its sequence number
    pub fn record(
        &self,
        user_text: &str,
        bot_text: &str,
        method_label: &str,
        score: Option<f64>,
    ) -> ConversationTurn {
        let mut state = self.write();
        state.next_sequence += 1;
        let turn = ConversationTurn {
            sequence: state.next_sequence,
            user_text: user_text.to_string(),
            bot_text: bot_text.to_string(),
            method_label: method_label.to_string(),
            score,
            timestamp: Utc::now(),
        };
        state.turns.push(turn.clone());
        turn
    }

    /// Ordered snapshot
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.read().turns.clone()
    }

    pub fn clear(&self) {
        self.write().turns.clear();
    }

    pub fn len(&self) -> usize {
        self.read().turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts per exact label. Labels embed scores, so one strategy may
    /// spread over many keys.
    pub fn stats(&self) -> ConversationStats {
        let state = self.read();
        let mut by_label = BTreeMap::new();
        for turn in &state.turns {
            *by_label.entry(turn.method_label.clone()).or_insert(0) += 1;
        }
        ConversationStats {
            total: state.turns.len(),
            by_label,
        }
    }
}
