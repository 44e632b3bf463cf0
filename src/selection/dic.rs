//! Discriminative Information Criterion strategy

use super::base::{ModelSelector, SelectorContext, SelectorParams};
use crate::data::FeatureStore;
use crate::oracle::{ModelOracle, SequenceModel};

/// Scores each candidate by its log-likelihood margin over the mean
/// log-likelihood of the other candidates and picks the maximizer.
///
/// The competing population is deliberately the other candidate state
/// counts fitted on this same word, not models of other words; an
/// overfit count stands out less against its neighbors and loses.
///
/// With fewer than two successfully scored candidates the margin has no
/// denominator, so selection falls back to the constant count. A margin
/// of exactly zero is still a valid maximum; the winner is always taken
/// by explicit comparison, never by treating zero as "no score".
pub struct DicSelector<'a, O: ModelOracle> {
    ctx: SelectorContext<'a, O>,
}

impl<'a, O: ModelOracle> DicSelector<'a, O> {
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

impl<'a, O: ModelOracle> ModelSelector<O::Model> for DicSelector<'a, O> {
    fn select(&self) -> Option<O::Model> {
        let corpus = self.ctx.corpus();

        let mut scored: Vec<(usize, f64)> = Vec::new();
        for n_states in self.ctx.state_range() {
            let model = match self.ctx.fit_candidate(n_states) {
                Some(model) => model,
                None => continue,
            };
            if let Ok(log_l) = model.score(corpus.observations(), corpus.lengths()) {
                scored.push((n_states, log_l));
            }
        }

        let chosen = if scored.len() <= 1 {
            // one survivor has no competitors to compare against
            self.ctx.params().n_constant
        } else {
            let m = scored.len() as f64;
            let total: f64 = scored.iter().map(|&(_, log_l)| log_l).sum();

            let mut best: Option<(usize, f64)> = None;
            for &(n_states, log_l) in &scored {
                let margin = log_l - (total - log_l) / (m - 1.0);
                if best.map_or(true, |(_, highest)| margin > highest) {
                    best = Some((n_states, margin));
                }
            }
            best.map_or(self.ctx.params().n_constant, |(n_states, _)| n_states)
        };

        self.ctx.fit_candidate(chosen)
    }
}
