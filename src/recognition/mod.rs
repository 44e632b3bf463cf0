//! Recognition of unlabeled sequences against a trained model bank
//!
//! Scores every test item against every per-word model, producing a
//! likelihood table and a maximum-likelihood guess per item, plus
//! accuracy metrics over a labeled reference.

mod bank;
mod metrics;
mod recognizer;

pub use bank::ModelBank;
pub use metrics::{word_error_rate, RecognitionSummary};
pub use recognizer::{recognize, LikelihoodTable, Recognition};
