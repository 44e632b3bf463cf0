//! Black-box model engine interface
//!
//! Traits and configuration for the external fitting/scoring engine,
//! plus the error taxonomy selectors and the recognizer fold into
//! "skip this candidate" / "negative infinity" outcomes.

mod error;
mod model;

pub use error::{FitError, FitResult, ScoreError, ScoreResult};
pub use model::{
    CovarianceKind, FitConfig, ModelOracle, SequenceModel, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED,
};
