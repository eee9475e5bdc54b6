//! End-to-end properties of the resolution pipeline, driven with fake
//! embedding providers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use tunisbot_shared::config::ThresholdConfig;
use tunisbot_shared::patterns::{Intent, PatternMatcher};
use tunisbot_shared::{
    EmbeddingError, EmbeddingProvider, KnowledgeBase, KnowledgeEntry, Method, Preprocessor,
    TunisBot, FALLBACK_REPLY,
};

const DIM: usize = 256;

/// Bag of hashed character trigrams: identical text, identical vector
struct TrigramEmbedder;

impl TrigramEmbedder {
    fn bucket(window: &[char]) -> usize {
        let mut hash: u64 = 0xcbf29ce484222325;
        for c in window {
            hash ^= *c as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        (hash % DIM as u64) as usize
    }
}

impl EmbeddingProvider for TrigramEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let chars: Vec<char> = format!("  {}  ", text.to_lowercase()).chars().collect();
        let mut v = vec![0.0f32; DIM];
        for window in chars.windows(3) {
            v[Self::bucket(window)] += 1.0;
        }
        Ok(v)
    }

    fn model(&self) -> &str {
        "trigram-test"
    }
}

/// Counts every encode call and can be told to fail queries
struct CountingEmbedder {
    inner: TrigramEmbedder,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl CountingEmbedder {
    fn new() -> Self {
        Self {
            inner: TrigramEmbedder,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for CountingEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(EmbeddingError::Timeout(1));
        }
        self.inner.encode(text)
    }

    fn model(&self) -> &str {
        "counting-test"
    }
}

/// Fixed vectors for known texts, a constant one otherwise
struct TableEmbedder {
    table: HashMap<String, Vec<f32>>,
}

impl EmbeddingProvider for TableEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self
            .table
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0, 0.0, 1.0]))
    }

    fn model(&self) -> &str {
        "table-test"
    }
}

fn bot_with(
    kb: KnowledgeBase,
    provider: Result<Arc<dyn EmbeddingProvider>, EmbeddingError>,
) -> TunisBot {
    TunisBot::with_provider(kb, Preprocessor::french(), provider, ThresholdConfig::default())
        .unwrap()
}

fn entry(question: &str, answer: &str) -> KnowledgeEntry {
    KnowledgeEntry {
        question: question.to_string(),
        answer: answer.to_string(),
        category: "test".to_string(),
    }
}

#[test]
fn test_greetings_short_circuit_before_indexes() {
    let embedder = Arc::new(CountingEmbedder::new());
    let bot = bot_with(KnowledgeBase::builtin(), Ok(embedder.clone()));
    assert!(bot.semantic_available());
    let after_build = embedder.calls();
    assert_eq!(after_build, 19);

    for text in ["BONJOUR", "bonjour, comment allez-vous"] {
        let r = bot.resolve(text);
        assert_eq!(r.method, Method::RuleBased, "{}", text);
        assert_eq!(r.answer, Intent::Salutation.reply());
    }
    assert_eq!(embedder.calls(), after_build);

    bot.resolve("Où dormir à Tunis?");
    assert_eq!(embedder.calls(), after_build + 1);
}

#[test]
fn test_semantic_wins_over_stronger_lexical() {
    let kb = KnowledgeBase::new(vec![
        entry("plage sable fin", "Gammarth"),
        entry("musée mosaïques romaines", "Bardo"),
    ])
    .unwrap();

    let mut table = HashMap::new();
    table.insert("plage sable fin".to_string(), vec![1.0, 0.0, 0.0]);
    table.insert("musée mosaïques romaines".to_string(), vec![0.0, 0.0, 1.0]);
    table.insert("mosaïques romaines musée".to_string(), vec![0.6, 0.8, 0.0]);
    let bot = bot_with(kb, Ok(Arc::new(TableEmbedder { table })));

    // Lexically identical to entry 1, semantically closest to entry 0
    let r = bot.resolve("mosaïques romaines musée");
    assert_eq!(r.method, Method::Embedding);
    assert_eq!(r.answer, "Gammarth");
    assert_eq!(r.entry, Some(0));
    assert_eq!(r.label(), "embedding (score: 0.60)");
}

#[test]
fn test_overflowing_query_vector_never_scores() {
    let kb = KnowledgeBase::new(vec![
        entry("plage sable fin", "Gammarth"),
        entry("musée mosaïques romaines", "Bardo"),
    ])
    .unwrap();

    let mut table = HashMap::new();
    table.insert("plage sable fin".to_string(), vec![1.0, 0.0, 0.0]);
    table.insert("musée mosaïques romaines".to_string(), vec![0.0, 0.0, 1.0]);
    table.insert("musée mosaïques romaines!".to_string(), vec![f32::INFINITY, 1.0, 0.0]);
    table.insert("xylophone".to_string(), vec![f32::INFINITY, 1.0, 0.0]);
    let bot = bot_with(kb, Ok(Arc::new(TableEmbedder { table })));
    assert!(bot.semantic_available());

    let r = bot.resolve("musée mosaïques romaines!");
    assert_eq!(r.method, Method::Tfidf);
    assert_eq!(r.answer, "Bardo");

    let r = bot.resolve("xylophone");
    assert_eq!(r.method, Method::Fallback);
    assert!(!r.label().contains("NaN"));
}

#[test]
fn test_lexical_answers_when_semantic_unavailable() {
    let bot = bot_with(KnowledgeBase::builtin(), Err(EmbeddingError::Disabled));
    let r = bot.resolve("Que voir au Musée du Bardo?");
    assert_eq!(r.method, Method::Tfidf);
    assert_eq!(r.entry, Some(4));
    assert_eq!(r.label(), "tfidf (score: 1.00)");
}

#[test]
fn test_fallback_without_overlap_or_semantic() {
    let bot = bot_with(KnowledgeBase::builtin(), Err(EmbeddingError::Disabled));
    let r = bot.resolve("xylophone quantique");
    assert_eq!(r.method, Method::Fallback);
    assert_eq!(r.answer, FALLBACK_REPLY);
    assert_eq!(r.score, None);
}

#[test]
fn test_query_failure_degrades_to_lexical_for_that_call() {
    let embedder = Arc::new(CountingEmbedder::new());
    let bot = bot_with(KnowledgeBase::builtin(), Ok(embedder.clone()));

    embedder.fail.store(true, Ordering::SeqCst);
    let r = bot.resolve("Où manger des bons bricks?");
    assert_eq!(r.method, Method::Tfidf);
    assert_eq!(bot.resolve("xylophone quantique").method, Method::Fallback);

    embedder.fail.store(false, Ordering::SeqCst);
    assert!(bot.semantic_available());
    assert_eq!(bot.resolve("Où manger des bons bricks?").method, Method::Embedding);
}

#[test]
fn test_round_trip_for_every_unpatterned_entry() {
    let kb = KnowledgeBase::builtin();
    let matcher = PatternMatcher::new().unwrap();
    let with_semantic = bot_with(kb.clone(), Ok(Arc::new(TrigramEmbedder)));
    let lexical_only = bot_with(kb.clone(), Err(EmbeddingError::Disabled));

    let mut checked = 0;
    for (i, e) in kb.entries().iter().enumerate() {
        if matcher.matches(&e.question).is_some() {
            continue;
        }
        for bot in [&with_semantic, &lexical_only] {
            let r = bot.resolve(&e.question);
            assert_eq!(r.entry, Some(i), "entry {}: {}", i, e.question);
            assert_eq!(r.answer, e.answer);
        }
        checked += 1;
    }
    assert!(checked >= 10);
}

#[test]
fn test_clear_history_empties_log() {
    let bot = bot_with(KnowledgeBase::builtin(), Err(EmbeddingError::Disabled));
    bot.chat("bonjour");
    bot.chat("Où dormir à Tunis?");
    assert_eq!(bot.history().len(), 2);

    bot.clear_history();
    assert!(bot.history().is_empty());
    assert_eq!(bot.stats().total, 0);
}

#[test]
fn test_stats_count_every_chat() {
    let bot = bot_with(KnowledgeBase::builtin(), Ok(Arc::new(TrigramEmbedder)));
    let inputs = [
        "salut",
        "Où manger à Tunis?",
        "Quelle est l'histoire de Carthage?",
        "xylophone quantique",
        "merci",
        "Où aller à la plage près de Tunis?",
    ];
    for text in inputs {
        bot.chat(text);
    }

    let stats = bot.stats();
    assert_eq!(stats.total, inputs.len());
    assert_eq!(stats.by_label.values().sum::<usize>(), inputs.len());
    assert_eq!(stats.by_label["rule-based"], 2);

    let history = bot.history();
    assert_eq!(history.first().map(|t| t.sequence), Some(1));
    assert_eq!(
        history.last().map(|t| t.user_text.as_str()),
        Some("Où aller à la plage près de Tunis?")
    );
}
