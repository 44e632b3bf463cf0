//! Cross-validated likelihood strategy

use super::base::{ModelSelector, SelectorContext, SelectorParams};
use super::folds::kfold;
use crate::data::FeatureStore;
use crate::oracle::{ModelOracle, SequenceModel};

/// Folds used when a word has enough sequences
pub const DEFAULT_FOLD_COUNT: usize = 5;

/// Scores each candidate state count by its mean held-out
/// log-likelihood under k-fold partitioning of the word's sequences and
/// picks the maximizer.
///
/// For each fold the model is refitted on the training sequences alone
/// and scored against the held-out ones; fold matrices are rebuilt from
/// the immutable corpus every time, so no state leaks between folds. A
/// word with a single sequence cannot be split and is scored by a plain
/// self-score instead. Any fit or score failure anywhere drops the
/// whole candidate. The winner is refitted on the full corpus; the
/// folds only ever choose the count.
pub struct CvSelector<'a, O: ModelOracle> {
    ctx: SelectorContext<'a, O>,
    folds: usize,
}

impl<'a, O: ModelOracle> CvSelector<'a, O> {
    /// Create a selector for `word` with the default fold count
    pub fn new(
        oracle: &'a O,
        store: &'a FeatureStore,
        word: &'a str,
        params: SelectorParams,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            ctx: SelectorContext::new(oracle, store, word, params)?,
            folds: DEFAULT_FOLD_COUNT,
        })
    }

    /// Set the fold count (clamped to at least 2; also clamped to the
    /// word's sequence count at selection time)
    pub fn with_folds(mut self, folds: usize) -> Self {
        self.folds = folds.max(2);
        self
    }

    /// Mean held-out log-likelihood for one candidate, or `None` if any
    /// fit or score along the way failed.
    fn candidate_score(&self, n_states: usize) -> Option<f64> {
        let corpus = self.ctx.corpus();
        let model = self.ctx.fit_candidate(n_states)?;

        if corpus.n_sequences() < 2 {
            // nothing to hold out; score the lone sequence directly
            return model
                .score(corpus.observations(), corpus.lengths())
                .ok();
        }

        let n_splits = self.folds.min(corpus.n_sequences());
        let mut held_out = Vec::with_capacity(n_splits);
        for fold in kfold(corpus.n_sequences(), n_splits) {
            let (train_matrix, train_lengths) = corpus.subset(&fold.train).ok()?;
            let (test_matrix, test_lengths) = corpus.subset(&fold.test).ok()?;

            let refit = self.ctx.fit_on(&train_matrix, &train_lengths, n_states)?;
            held_out.push(refit.score(&test_matrix, &test_lengths).ok()?);
        }

        Some(held_out.iter().sum::<f64>() / held_out.len() as f64)
    }
}

impl<'a, O: ModelOracle> ModelSelector<O::Model> for CvSelector<'a, O> {
    fn select(&self) -> Option<O::Model> {
        let mut best: Option<(usize, f64)> = None;
        for n_states in self.ctx.state_range() {
            let score = match self.candidate_score(n_states) {
                Some(score) => score,
                None => continue,
            };
            if best.map_or(true, |(_, highest)| score > highest) {
                best = Some((n_states, score));
            }
        }

        let chosen = best.map_or(self.ctx.params().n_constant, |(n_states, _)| n_states);
        self.ctx.fit_candidate(chosen)
    }
}
