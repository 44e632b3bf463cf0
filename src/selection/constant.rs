//! Fixed state-count baseline strategy

use super::base::{ModelSelector, SelectorContext, SelectorParams};
use crate::data::FeatureStore;
use crate::oracle::ModelOracle;

/// Always fits at the configured constant state count. No search, no
/// scoring; succeeds or fails exactly as that single fit does.
pub struct ConstantSelector<'a, O: ModelOracle> {
    ctx: SelectorContext<'a, O>,
}

impl<'a, O: ModelOracle> ConstantSelector<'a, O> {
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

impl<'a, O: ModelOracle> ModelSelector<O::Model> for ConstantSelector<'a, O> {
    fn select(&self) -> Option<O::Model> {
        self.ctx.fit_candidate(self.ctx.params().n_constant)
    }
}
