//! Trained per-word model bank

use indexmap::IndexMap;

/// Maps each vocabulary word to its selected fitted model.
///
/// Words keep insertion order; recognition iterates the bank in that
/// order, so the first-inserted word wins likelihood ties. A word whose
/// selection failed entirely is simply absent.
#[derive(Debug, Clone)]
pub struct ModelBank<M> {
    models: IndexMap<String, M>,
}

impl<M> Default for ModelBank<M> {
    fn default() -> Self {
        Self {
            models: IndexMap::new(),
        }
    }
}

impl<M> ModelBank<M> {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word's model, replacing any previous one
    pub fn insert(&mut self, word: impl Into<String>, model: M) {
        self.models.insert(word.into(), model);
    }

    /// Look up a word's model
    pub fn get(&self, word: &str) -> Option<&M> {
        self.models.get(word)
    }

    /// Whether the bank has a model for this word
    pub fn contains(&self, word: &str) -> bool {
        self.models.contains_key(word)
    }

    /// Words in insertion order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Word/model pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &M)> {
        self.models.iter().map(|(word, model)| (word.as_str(), model))
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
