//! Bayesian Information Criterion strategy

use super::base::{ModelSelector, SelectorContext, SelectorParams};
use crate::data::FeatureStore;
use crate::oracle::{ModelOracle, SequenceModel};

/// Scores each candidate state count by `-2 logL + p ln(N)` and picks
/// the minimizer, trading fit quality against free-parameter count.
///
/// Candidates whose fit or self-score fails are skipped rather than
/// penalized; if every candidate fails the constant count is fitted
/// instead. The winning count is refitted, so a refit failure after a
/// successful search still yields `None`.
pub struct BicSelector<'a, O: ModelOracle> {
    ctx: SelectorContext<'a, O>,
}

impl<'a, O: ModelOracle> BicSelector<'a, O> {
    /// Create a selector for `word`
    pub fn new(
        oracle: &'a O,
        store: &'a FeatureStore,
        word: &'a str,
        params: SelectorParams,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            ctx: SelectorContext::new(oracle, store, word, params)?,
        })
    }
}

/// Free parameters of a diagonal-covariance model with `n_states`
/// hidden states over `n_features`-dimensional frames: transition
/// probabilities, initial probabilities, and per-state mean/variance.
fn free_parameters(n_states: usize, n_features: usize) -> usize {
    n_states * (n_states - 1) + (n_states - 1) + 2 * n_features * n_states
}

impl<'a, O: ModelOracle> ModelSelector<O::Model> for BicSelector<'a, O> {
    fn select(&self) -> Option<O::Model> {
        let corpus = self.ctx.corpus();
        let log_n = (corpus.n_frames() as f64).ln();
        let n_features = corpus.n_features();

        let mut best: Option<(usize, f64)> = None;
        for n_states in self.ctx.state_range() {
            let model = match self.ctx.fit_candidate(n_states) {
                Some(model) => model,
                None => continue,
            };
            let log_l = match model.score(corpus.observations(), corpus.lengths()) {
                Ok(log_l) => log_l,
                Err(_) => continue,
            };

            let p = free_parameters(n_states, n_features) as f64;
            let bic = -2.0 * log_l + p * log_n;

            if best.map_or(true, |(_, lowest)| bic < lowest) {
                best = Some((n_states, bic));
            }
        }

        let chosen = best.map_or(self.ctx.params().n_constant, |(n_states, _)| n_states);
        self.ctx.fit_candidate(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WordCorpus;
    use crate::oracle::{FitConfig, FitError, ScoreError};
    use ndarray::Array2;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StubModel {
        n_states: usize,
        log_l: f64,
    }

    impl SequenceModel for StubModel {
        fn n_states(&self) -> usize {
            self.n_states
        }

        fn score(&self, _observations: &Array2<f64>, _lengths: &[usize]) -> Result<f64, ScoreError> {
            Ok(self.log_l)
        }
    }

    /// Fit succeeds with a fixed log-likelihood per state count; counts
    /// without an entry fail. Specific call indices can be forced to
    /// fail to exercise the refit path.
    struct StubOracle {
        log_ls: HashMap<usize, f64>,
        fail_calls: Vec<usize>,
        calls: Mutex<usize>,
    }

    impl StubOracle {
        fn new(log_ls: &[(usize, f64)]) -> Self {
            Self {
                log_ls: log_ls.iter().copied().collect(),
                fail_calls: vec![],
                calls: Mutex::new(0),
            }
        }
    }

    impl ModelOracle for StubOracle {
        type Model = StubModel;

        fn fit(
            &self,
            observations: &Array2<f64>,
            _lengths: &[usize],
            config: &FitConfig,
        ) -> Result<StubModel, FitError> {
            let mut calls = self.calls.lock().unwrap();
            let call_idx = *calls;
            *calls += 1;

            if self.fail_calls.contains(&call_idx) {
                return Err(FitError::NotConverged {
                    max_iterations: config.max_iterations,
                });
            }
            match self.log_ls.get(&config.n_states) {
                Some(&log_l) => Ok(StubModel {
                    n_states: config.n_states,
                    log_l,
                }),
                None => Err(FitError::InsufficientData {
                    frames: observations.nrows(),
                    n_states: config.n_states,
                }),
            }
        }
    }

    /// Two 3-frame sequences of 1-dimensional frames: N = 6, d = 1.
    fn store() -> FeatureStore {
        let sequences = vec![
            Array2::from_elem((3, 1), 0.2),
            Array2::from_elem((3, 1), 0.4),
        ];
        let mut store = FeatureStore::new();
        store.insert("BOOK", WordCorpus::from_sequences(sequences).unwrap());
        store
    }

    #[test]
    fn test_picks_the_bic_minimizer() {
        // d = 1: p(2) = 7, p(3) = 14, p(4) = 23, ln(N) = ln(6).
        // BIC(2) = 100 + 7 ln6  ~ 112.5
        // BIC(3) =  80 + 14 ln6 ~ 105.1   <- minimum
        // BIC(4) =  78 + 23 ln6 ~ 119.2
        let oracle = StubOracle::new(&[(2, -50.0), (3, -40.0), (4, -39.0)]);
        let store = store();
        let params = SelectorParams::default().with_state_range(2, 4);
        let selector = BicSelector::new(&oracle, &store, "BOOK", params).unwrap();

        assert_eq!(selector.select().unwrap().n_states(), 3);
    }

    #[test]
    fn test_all_failures_fall_back_to_constant() {
        // nothing in the search range fits, but the constant does
        let oracle = StubOracle::new(&[(7, -10.0)]);
        let store = store();
        let params = SelectorParams::default()
            .with_state_range(2, 4)
            .with_n_constant(7);
        let selector = BicSelector::new(&oracle, &store, "BOOK", params).unwrap();

        assert_eq!(selector.select().unwrap().n_states(), 7);
    }

    #[test]
    fn test_refit_failure_yields_none() {
        // single candidate: call 0 is the search fit, call 1 the refit
        let mut oracle = StubOracle::new(&[(2, -10.0)]);
        oracle.fail_calls = vec![1];
        let store = store();
        let params = SelectorParams::default().with_state_range(2, 2);
        let selector = BicSelector::new(&oracle, &store, "BOOK", params).unwrap();

        assert!(selector.select().is_none());
    }

    #[test]
    fn test_total_failure_yields_none() {
        let oracle = StubOracle::new(&[]);
        let store = store();
        let selector =
            BicSelector::new(&oracle, &store, "BOOK", SelectorParams::default()).unwrap();

        assert!(selector.select().is_none());
    }
}
