//! The model engine seam: traits for fitting and scoring sequence models
//!
//! The crate never runs EM or forward-backward itself; it drives an
//! engine supplied by the caller through these traits and treats every
//! fit/score call as a black-box numeric computation.

use super::error::{FitError, ScoreError};
use ndarray::Array2;
use std::fmt;

/// Bound on the fitting optimizer's iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 14;

/// Emission covariance structure of the fixed topology family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CovarianceKind {
    /// Per-state diagonal covariance (the default throughout)
    #[default]
    Diagonal,
    /// Single shared variance per state
    Spherical,
    /// Full covariance matrix per state
    Full,
}

impl CovarianceKind {
    /// Short name, matching common engine conventions
    pub fn as_str(&self) -> &'static str {
        match self {
            CovarianceKind::Diagonal => "diag",
            CovarianceKind::Spherical => "spherical",
            CovarianceKind::Full => "full",
        }
    }
}

impl fmt::Display for CovarianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a fit call needs besides the data.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Number of hidden states
    pub n_states: usize,
    /// Emission covariance structure
    pub covariance: CovarianceKind,
    /// Iteration budget for the fitting optimizer
    pub max_iterations: usize,
    /// Determinism seed for the engine's initialization
    pub seed: u64,
}

impl FitConfig {
    /// Config for `n_states` with diagonal covariance, the default
    /// iteration budget, and the default seed
    pub fn new(n_states: usize) -> Self {
        Self {
            n_states,
            covariance: CovarianceKind::Diagonal,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the determinism seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the covariance structure
    pub fn with_covariance(mut self, covariance: CovarianceKind) -> Self {
        self.covariance = covariance;
        self
    }
}

/// A fitted model that can score matching-shaped data.
pub trait SequenceModel {
    /// Number of hidden states the model was fitted with
    fn n_states(&self) -> usize;

    /// Log-likelihood of the given concatenated matrix and segment
    /// lengths under this model
    fn score(&self, observations: &Array2<f64>, lengths: &[usize]) -> Result<f64, ScoreError>;
}

/// Fits models of the fixed topology family.
///
/// `Send + Sync` so callers may run independent per-word selections
/// concurrently; the engine itself is free to stay single-threaded.
pub trait ModelOracle: Send + Sync {
    /// The fitted model type this engine produces
    type Model: SequenceModel;

    /// Fit a model against a concatenated feature matrix and its
    /// segment lengths
    fn fit(
        &self,
        observations: &Array2<f64>,
        lengths: &[usize],
        config: &FitConfig,
    ) -> Result<Self::Model, FitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_config_defaults() {
        let config = FitConfig::new(5);
        assert_eq!(config.n_states, 5);
        assert_eq!(config.covariance, CovarianceKind::Diagonal);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_fit_config_builders() {
        let config = FitConfig::new(3)
            .with_seed(7)
            .with_max_iterations(50)
            .with_covariance(CovarianceKind::Full);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.covariance.as_str(), "full");
    }
}
