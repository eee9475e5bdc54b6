//! Text normalization for lexical comparison.
//!
//! Lowercase, strip punctuation, tokenize, drop stopwords and short tokens.
//! Only the lexical index uses this; semantic encoding sees raw text.

use crate::error::{BotError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Tokens of this many characters or fewer are dropped
const MIN_TOKEN_CHARS: usize = 2;

/// French function words
pub const FRENCH_STOPWORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux",
    "il", "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes",
    "moi", "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que",
    "qui", "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une",
    "vos", "votre", "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "étée",
    "étées", "étés", "étant", "étante", "étants", "étantes", "suis", "es", "est", "sommes",
    "êtes", "sont", "serai", "seras", "sera", "serons", "serez", "seront", "serais", "serait",
    "serions", "seriez", "seraient", "étais", "était", "étions", "étiez", "étaient", "fus",
    "fut", "fûmes", "fûtes", "furent", "sois", "soit", "soyons", "soyez", "soient", "fusse",
    "fusses", "fût", "fussions", "fussiez", "fussent", "ayant", "ayante", "ayantes", "ayants",
    "eu", "eue", "eues", "eus", "ai", "as", "avons", "avez", "ont", "aurai", "auras", "aura",
    "aurons", "aurez", "auront", "aurais", "aurait", "aurions", "auriez", "auraient", "avais",
    "avait", "avions", "aviez", "avaient", "eut", "eûmes", "eûtes", "eurent", "aie", "aies",
    "ait", "ayons", "ayez", "aient", "eusse", "eusses", "eût", "eussions", "eussiez",
    "eussent",
];

/// Deterministic normalizer backed by a fixed stopword set
#[derive(Debug, Clone)]
pub struct Preprocessor {
    stopwords: HashSet<String>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::french()
    }
}

impl Preprocessor {
    /// Built-in French stopword list
    pub fn french() -> Self {
        Self::with_stopwords(FRENCH_STOPWORDS.iter().copied())
    }

    pub fn with_stopwords<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            stopwords: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load one stopword per line; blank lines and `#` comments are skipped
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| BotError::Stopwords(format!("{}: {}", path.display(), e)))?;
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        if words.is_empty() {
            return Err(BotError::Stopwords(format!(
                "{}: no stopwords found",
                path.display()
            )));
        }
        Ok(Self::with_stopwords(words))
    }

    /// Configured file when given, built-in French list otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::french()),
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Surviving tokens in input order
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = NON_WORD.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .filter(|t| t.chars().count() > MIN_TOKEN_CHARS && !self.is_stopword(t))
            .map(String::from)
            .collect()
    }

    /// Surviving tokens joined by single spaces
    pub fn process(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
