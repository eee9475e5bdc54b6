//! Rule-based intent matcher for canned conversational replies.
//!
//! Intents are scanned in declaration order; the first matching pattern wins
//! and short-circuits the rest of the pipeline.

use crate::error::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Conversational intents with a fixed reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Salutation,
    Farewell,
    Help,
    Identity,
}

impl Intent {
    /// Scan order
    pub const ALL: [Intent; 4] = [
        Intent::Salutation,
        Intent::Farewell,
        Intent::Help,
        Intent::Identity,
    ];

    /// Pattern sources, tried in order
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Intent::Salutation => &[r"\b(bonjour|salut|hey|hello|bonsoir)\b"],
            Intent::Farewell => &[r"\b(au revoir|bye|à bientôt|merci|adieu)\b"],
            Intent::Help => &[r"\b(aide|aider|comment|commencer|que faire)\b"],
            Intent::Identity => &[r"\b(qui es-tu|ton nom|tu es qui|c'est quoi ton nom)\b"],
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Intent::Salutation => "Bonjour! Je suis votre guide touristique virtuel pour Tunis. Comment puis-je vous aider à découvrir notre belle ville?",
            Intent::Farewell => "Au revoir! J'espère que vous passerez un merveilleux séjour à Tunis. Bon voyage! 🌟",
            Intent::Help => "Je peux vous aider avec:\n- Les lieux touristiques (Médina, Carthage, Sidi Bou Saïd...)\n- Les restaurants et spécialités culinaires\n- Les transports et infos pratiques\n- L'histoire et la culture\n- Des itinéraires suggérés\n\nPosez-moi une question!",
            Intent::Identity => "Je suis TunisBot, votre assistant touristique intelligent pour découvrir Tunis et ses merveilles! 🇹🇳",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Salutation => "salutation",
            Self::Farewell => "farewell",
            Self::Help => "help",
            Self::Identity => "identity",
        };
        write!(f, "{}", s)
    }
}

/// Matched intent and its canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub intent: Intent,
    pub reply: &'static str,
}

/// Compiled, ordered intent patterns
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rules: Vec<(Intent, Vec<Regex>)>,
}

impl PatternMatcher {
    /// Compile every intent pattern; an invalid pattern is an initialization failure
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(Intent::ALL.len());
        for intent in Intent::ALL {
            let compiled = intent
                .patterns()
                .iter()
                .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rules.push((intent, compiled));
        }
        Ok(Self { rules })
    }

    /// First matching intent in scan order
    pub fn matches(&self, utterance: &str) -> Option<RuleHit> {
        let lowered = utterance.to_lowercase();
        self.rules
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&lowered)))
            .map(|(intent, _)| RuleHit {
                intent: *intent,
                reply: intent.reply(),
            })
    }

    pub fn pattern_count(&self) -> usize {
        self.rules.iter().map(|(_, p)| p.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(text: &str) -> Option<Intent> {
        PatternMatcher::new().unwrap().matches(text).map(|h| h.intent)
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(intent_of("BONJOUR"), Some(Intent::Salutation));
        assert_eq!(intent_of("Salut!"), Some(Intent::Salutation));
    }

    #[test]
    fn test_salutation_wins_over_help() {
        // "comment" alone is a help trigger; salutation is scanned first
        assert_eq!(
            intent_of("bonjour, comment allez-vous"),
            Some(Intent::Salutation)
        );
    }

    #[test]
    fn test_farewell_and_thanks() {
        assert_eq!(intent_of("Au revoir"), Some(Intent::Farewell));
        assert_eq!(intent_of("merci beaucoup"), Some(Intent::Farewell));
        assert_eq!(intent_of("À bientôt"), Some(Intent::Farewell));
    }

    #[test]
    fn test_help() {
        assert_eq!(intent_of("que faire?"), Some(Intent::Help));
        assert_eq!(intent_of("j'ai besoin d'aide"), Some(Intent::Help));
    }

    #[test]
    fn test_identity() {
        assert_eq!(intent_of("Qui es-tu ?"), Some(Intent::Identity));
        assert_eq!(intent_of("c'est quoi ton nom"), Some(Intent::Identity));
    }

    #[test]
    fn test_word_boundaries() {
        // "hey" inside "heyday" and "aide" inside "aidez" must not fire
        assert_eq!(intent_of("heyday"), None);
        assert_eq!(intent_of("aidez-moi"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(intent_of("Où dormir à Tunis?"), None);
    }

    #[test]
    fn test_reply_is_intent_reply() {
        let hit = PatternMatcher::new().unwrap().matches("hello").unwrap();
        assert_eq!(hit.reply, Intent::Salutation.reply());
    }

    #[test]
    fn test_pattern_count() {
        assert_eq!(PatternMatcher::new().unwrap().pattern_count(), 4);
    }
}
