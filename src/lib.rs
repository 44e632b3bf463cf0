//! # HMM state-count selection and word recognition
//!
//! This library picks, per vocabulary word, the best-fitting hidden
//! Markov model from a fixed topology family that varies only in hidden
//! state count, then classifies unlabeled sequences against the
//! resulting model bank by maximum likelihood.
//!
//! Model fitting and scoring themselves are delegated to an engine the
//! caller supplies through the [`oracle`] traits; this crate contains
//! the selection criteria and the recognition loop, not the EM
//! machinery.
//!
//! ## Modules
//!
//! - `data` - per-word sequence corpora and ordered test sets
//! - `oracle` - the black-box fit/score engine interface
//! - `selection` - constant, BIC, DIC, and cross-validation strategies
//! - `recognition` - model bank, likelihood tables, guesses, metrics
//!
//! ## Typical flow
//!
//! Load corpora into a [`data::FeatureStore`], pick a
//! [`selection::SelectionCriterion`], call [`selection::train_bank`] to
//! select one model per word, then [`recognition::recognize`] a
//! [`data::TestSet`] against the bank.

pub mod data;
pub mod oracle;
pub mod recognition;
pub mod selection;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::{FeatureStore, ObservationSequence, TestItem, TestSet, WordCorpus};
    pub use crate::oracle::{
        CovarianceKind, FitConfig, FitError, ModelOracle, ScoreError, SequenceModel,
    };
    pub use crate::recognition::{
        recognize, word_error_rate, LikelihoodTable, ModelBank, Recognition, RecognitionSummary,
    };
    pub use crate::selection::{
        train_bank, BicSelector, ConstantSelector, CvSelector, DicSelector, ModelSelector,
        SelectionCriterion, SelectorParams,
    };
}
