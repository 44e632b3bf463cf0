//! Model engine error types

use thiserror::Error;

/// Ways a model fit can fail.
///
/// Fitting is expected to fail for ill-conditioned state counts or
/// sparse corpora; callers treat these as "no model for this candidate",
/// never as fatal.
#[derive(Error, Debug)]
pub enum FitError {
    #[error("optimizer did not converge within {max_iterations} iterations")]
    NotConverged { max_iterations: usize },

    #[error("covariance became singular with {n_states} states")]
    Singular { n_states: usize },

    #[error("not enough data: {frames} frames for {n_states} states")]
    InsufficientData { frames: usize, n_states: usize },

    #[error("fit failed: {0}")]
    Other(String),
}

/// Ways scoring data against a fitted model can fail.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model is degenerate")]
    Degenerate,

    #[error("model has not been fitted")]
    NotFitted,

    #[error("scoring failed: {0}")]
    Other(String),
}

/// Result type for fit operations
pub type FitResult<T> = Result<T, FitError>;

/// Result type for score operations
pub type ScoreResult<T> = Result<T, ScoreError>;
