//! Word-keyed corpus store

use super::types::WordCorpus;
use indexmap::IndexMap;

/// Maps each vocabulary word to its corpus of recorded sequences.
///
/// Words keep their insertion order; everything downstream (selection,
/// the model bank, likelihood tables) iterates in that order, which is
/// what makes tie-breaks reproducible.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    corpora: IndexMap<String, WordCorpus>,
}

impl FeatureStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word's corpus, replacing any previous one
    pub fn insert(&mut self, word: impl Into<String>, corpus: WordCorpus) {
        self.corpora.insert(word.into(), corpus);
    }

    /// Look up a word's corpus
    pub fn corpus(&self, word: &str) -> Option<&WordCorpus> {
        self.corpora.get(word)
    }

    /// Whether the store knows this word
    pub fn contains(&self, word: &str) -> bool {
        self.corpora.contains_key(word)
    }

    /// Words in insertion order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.corpora.keys().map(String::as_str)
    }

    /// Word/corpus pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordCorpus)> {
        self.corpora.iter().map(|(word, corpus)| (word.as_str(), corpus))
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }
}
