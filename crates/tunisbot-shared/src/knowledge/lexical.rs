//! TF-IDF index over preprocessed knowledge base questions.
//!
//! Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`, raw term counts, L2-normalized rows.
//! Deterministic: the vocabulary is sorted, so column order never depends on hashing.

use super::vector::{best_match, ScoredMatch};
use super::KnowledgeBase;
use crate::preprocess::Preprocessor;
use std::collections::{BTreeSet, HashMap};
use tracing::{info, warn};

/// Lexical similarity index, immutable after build
#[derive(Debug, Clone)]
pub struct LexicalIndex {
    preprocessor: Preprocessor,
    /// Term -> column
    vocabulary: HashMap<String, usize>,
    /// IDF weight per column
    idf: Vec<f64>,
    /// One normalized row per knowledge entry
    rows: Vec<Vec<f64>>,
    /// Entries whose question keeps no token after preprocessing
    untokenized: Vec<usize>,
}

impl LexicalIndex {
    /// Fit vocabulary and IDF over the knowledge base questions
    pub fn build(kb: &KnowledgeBase, preprocessor: Preprocessor) -> Self {
        let docs: Vec<Vec<String>> = kb.questions().map(|q| preprocessor.tokens(q)).collect();

        // A zero row can never be selected lexically; only the semantic index can reach it
        let untokenized: Vec<usize> = docs
            .iter()
            .enumerate()
            .filter(|(_, doc)| doc.is_empty())
            .map(|(i, _)| i)
            .collect();
        for &i in &untokenized {
            warn!(
                "Knowledge entry {} has no lexical terms after preprocessing: {:?}",
                i,
                kb.get(i).map(|e| e.question.as_str()).unwrap_or_default()
            );
        }

        let terms: BTreeSet<&str> = docs.iter().flatten().map(String::as_str).collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(col, term)| (term.to_string(), col))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &docs {
            let unique: BTreeSet<usize> =
                doc.iter().filter_map(|t| vocabulary.get(t)).copied().collect();
            for col in unique {
                df[col] += 1;
            }
        }

        let n = docs.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            preprocessor,
            vocabulary,
            idf,
            rows: Vec::with_capacity(docs.len()),
            untokenized,
        };
        index.rows = docs.iter().map(|doc| index.weigh(doc)).collect();

        info!(
            "Lexical index built: {} entries, {} terms",
            index.rows.len(),
            index.vocabulary.len()
        );
        index
    }

    /// TF-IDF row for a token list; out-of-vocabulary tokens are dropped
    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&col) = self.vocabulary.get(token) {
                row[col] += 1.0;
            }
        }
        for (w, idf) in row.iter_mut().zip(&self.idf) {
            *w *= idf;
        }
        let norm = super::vector::norm(&row);
        if norm > 0.0 {
            row.iter_mut().for_each(|w| *w /= norm);
        }
        row
    }

    /// Project a raw utterance into the index space
    pub fn vectorize(&self, utterance: &str) -> Vec<f64> {
        self.weigh(&self.preprocessor.tokens(utterance))
    }

    /// Best entry and its cosine score; no threshold applied here
    pub fn score(&self, utterance: &str) -> ScoredMatch {
        let query = self.vectorize(utterance);
        // Rows are never empty: the knowledge base rejects empty input
        best_match(&query, &self.rows).unwrap_or(ScoredMatch {
            index: 0,
            score: 0.0,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Positions of entries with an all-zero row
    pub fn untokenized_entries(&self) -> &[usize] {
        &self.untokenized
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeEntry;

    fn small_kb() -> KnowledgeBase {
        let entry = |q: &str| KnowledgeEntry {
            question: q.to_string(),
            answer: format!("answer to {}", q),
            category: "test".to_string(),
        };
        KnowledgeBase::new(vec![
            entry("Comment visiter Carthage?"),
            entry("Quelle est l'histoire de Carthage?"),
            entry("Où dormir à Tunis?"),
        ])
        .unwrap()
    }

    #[test]
    fn test_vocabulary_from_preprocessed_questions() {
        let index = LexicalIndex::build(&small_kb(), Preprocessor::french());
        assert!(index.contains_term("carthage"));
        assert!(index.contains_term("histoire"));
        // stopwords and short tokens never enter the vocabulary
        assert!(!index.contains_term("est"));
        assert!(!index.contains_term("où"));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_self_similarity() {
        let kb = small_kb();
        let index = LexicalIndex::build(&kb, Preprocessor::french());
        for (i, entry) in kb.entries().iter().enumerate() {
            let m = index.score(&entry.question);
            assert_eq!(m.index, i);
            assert!((m.score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rare_term_outweighs_shared_term() {
        let index = LexicalIndex::build(&small_kb(), Preprocessor::french());
        let m = index.score("histoire carthage");
        assert_eq!(m.index, 1);
        assert!(m.score > 0.3);
    }

    #[test]
    fn test_out_of_vocabulary_scores_zero() {
        let index = LexicalIndex::build(&small_kb(), Preprocessor::french());
        let m = index.score("xylophone quantique");
        assert_eq!(m, ScoredMatch { index: 0, score: 0.0 });
    }

    #[test]
    fn test_question_without_terms_is_reported() {
        let entry = |q: &str| KnowledgeEntry {
            question: q.to_string(),
            answer: "réponse".to_string(),
            category: "test".to_string(),
        };
        let kb = KnowledgeBase::new(vec![entry("Où dormir à Tunis?"), entry("Où es-tu?")]).unwrap();
        let index = LexicalIndex::build(&kb, Preprocessor::french());

        assert_eq!(index.untokenized_entries(), &[1]);
        // the zero row never wins, even for its own question
        assert_eq!(index.score("Où es-tu?"), ScoredMatch { index: 0, score: 0.0 });
    }

    #[test]
    fn test_builtin_pack_fully_tokenized() {
        let index = LexicalIndex::build(&KnowledgeBase::builtin(), Preprocessor::french());
        assert!(index.untokenized_entries().is_empty());
    }

    #[test]
    fn test_rows_are_unit_length() {
        let index = LexicalIndex::build(&small_kb(), Preprocessor::french());
        for row in &index.rows {
            assert!((crate::knowledge::vector::norm(row) - 1.0).abs() < 1e-9);
        }
    }
}
