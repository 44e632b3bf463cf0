//! Data structures for word corpora and test sets
//!
//! Provides per-word sequence corpora with their concatenated feature
//! matrices, and ordered test sets for recognition.

mod store;
mod types;

pub use store::FeatureStore;
pub use types::{ObservationSequence, TestItem, TestSet, WordCorpus};
