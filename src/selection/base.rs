//! Shared selector state and the selection trait

use crate::data::{FeatureStore, WordCorpus};
use crate::oracle::{FitConfig, ModelOracle, DEFAULT_SEED};
use ndarray::Array2;
use std::ops::RangeInclusive;

/// State count used when a search finds nothing (and by the constant
/// strategy outright)
pub const DEFAULT_STATE_COUNT: usize = 3;

/// Lower bound of the default search range
pub const MIN_STATE_COUNT: usize = 2;

/// Upper bound of the default search range
pub const MAX_STATE_COUNT: usize = 10;

/// Tunables shared by every selection strategy.
#[derive(Debug, Clone)]
pub struct SelectorParams {
    /// Fallback state count, also the constant strategy's choice
    pub n_constant: usize,
    /// Smallest state count to try (inclusive)
    pub min_states: usize,
    /// Largest state count to try (inclusive)
    pub max_states: usize,
    /// Determinism seed forwarded to the engine
    pub seed: u64,
    /// Log each candidate fit outcome
    pub verbose: bool,
}

impl Default for SelectorParams {
    fn default() -> Self {
        Self {
            n_constant: DEFAULT_STATE_COUNT,
            min_states: MIN_STATE_COUNT,
            max_states: MAX_STATE_COUNT,
            seed: DEFAULT_SEED,
            verbose: false,
        }
    }
}

impl SelectorParams {
    /// Set the fallback/constant state count
    pub fn with_n_constant(mut self, n_constant: usize) -> Self {
        self.n_constant = n_constant;
        self
    }

    /// Set the inclusive search range
    pub fn with_state_range(mut self, min_states: usize, max_states: usize) -> Self {
        self.min_states = min_states;
        self.max_states = max_states;
        self
    }

    /// Set the determinism seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable per-candidate fit logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A model-selection strategy over one word's corpus.
///
/// `select` never panics and never returns an error: a word for which
/// every candidate fails simply has no model.
pub trait ModelSelector<M> {
    /// Search the candidate state counts and return the best fitted
    /// model, or `None` if nothing could be fitted
    fn select(&self) -> Option<M>;
}

/// State every strategy shares: the engine handle, the target word and
/// its corpus, and the search tunables.
///
/// A context borrows only its own word's data, so selections for
/// different words are independent and may run concurrently.
pub struct SelectorContext<'a, O: ModelOracle> {
    oracle: &'a O,
    word: &'a str,
    corpus: &'a WordCorpus,
    params: SelectorParams,
}

impl<'a, O: ModelOracle> SelectorContext<'a, O> {
    /// Create a context for `word`, which must be present in the store.
    pub fn new(
        oracle: &'a O,
        store: &'a FeatureStore,
        word: &'a str,
        params: SelectorParams,
    ) -> anyhow::Result<Self> {
        let corpus = store
            .corpus(word)
            .ok_or_else(|| anyhow::anyhow!("unknown word: {}", word))?;
        Ok(Self {
            oracle,
            word,
            corpus,
            params,
        })
    }

    /// The target word
    pub fn word(&self) -> &str {
        self.word
    }

    /// The target word's corpus
    pub fn corpus(&self) -> &WordCorpus {
        self.corpus
    }

    /// The shared tunables
    pub fn params(&self) -> &SelectorParams {
        &self.params
    }

    /// Candidate state counts, inclusive on both ends
    pub fn state_range(&self) -> RangeInclusive<usize> {
        self.params.min_states..=self.params.max_states
    }

    /// Try to fit a model with exactly `n_states` hidden states against
    /// the word's full corpus.
    ///
    /// Every failure mode of the engine is converted to `None`; fit
    /// failure is an expected outcome for ill-conditioned state counts
    /// and must never abort a search.
    pub fn fit_candidate(&self, n_states: usize) -> Option<O::Model> {
        self.fit_on(self.corpus.observations(), self.corpus.lengths(), n_states)
    }

    /// Fit against an arbitrary matrix/length pair (used for
    /// cross-validation fold refits).
    pub(crate) fn fit_on(
        &self,
        observations: &Array2<f64>,
        lengths: &[usize],
        n_states: usize,
    ) -> Option<O::Model> {
        let config = FitConfig::new(n_states).with_seed(self.params.seed);
        match self.oracle.fit(observations, lengths, &config) {
            Ok(model) => {
                if self.params.verbose {
                    tracing::debug!("fitted {} with {} states", self.word, n_states);
                }
                Some(model)
            }
            Err(err) => {
                if self.params.verbose {
                    tracing::debug!("fit failed for {} with {} states: {}", self.word, n_states, err);
                }
                None
            }
        }
    }
}
