//! Criterion dispatch and whole-vocabulary training

use super::base::{ModelSelector, SelectorParams};
use super::bic::BicSelector;
use super::constant::ConstantSelector;
use super::cv::CvSelector;
use super::dic::DicSelector;
use crate::data::FeatureStore;
use crate::oracle::{ModelOracle, SequenceModel};
use crate::recognition::ModelBank;

/// The available model-selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCriterion {
    /// Fixed state count, no search
    Constant,
    /// Bayesian Information Criterion (minimized)
    Bic,
    /// Discriminative Information Criterion (maximized)
    Dic,
    /// Mean held-out log-likelihood under k-fold CV (maximized)
    CrossValidation,
}

impl SelectionCriterion {
    /// Run this criterion's selector for one word.
    ///
    /// `Err` only for an unknown word; a word whose every candidate
    /// failed comes back as `Ok(None)`.
    pub fn select_model<O: ModelOracle>(
        &self,
        oracle: &O,
        store: &FeatureStore,
        word: &str,
        params: &SelectorParams,
    ) -> anyhow::Result<Option<O::Model>> {
        let params = params.clone();
        let model = match self {
            SelectionCriterion::Constant => {
                ConstantSelector::new(oracle, store, word, params)?.select()
            }
            SelectionCriterion::Bic => BicSelector::new(oracle, store, word, params)?.select(),
            SelectionCriterion::Dic => DicSelector::new(oracle, store, word, params)?.select(),
            SelectionCriterion::CrossValidation => {
                CvSelector::new(oracle, store, word, params)?.select()
            }
        };
        Ok(model)
    }
}

/// Select one model per vocabulary word and collect the survivors.
///
/// Words for which selection fails entirely are left out of the bank
/// (and logged); downstream recognition tolerates their absence. Each
/// word's selection is independent of every other word's.
pub fn train_bank<O: ModelOracle>(
    oracle: &O,
    store: &FeatureStore,
    criterion: SelectionCriterion,
    params: &SelectorParams,
) -> ModelBank<O::Model> {
    let mut bank = ModelBank::new();
    for word in store.words() {
        match criterion.select_model(oracle, store, word, params) {
            Ok(Some(model)) => {
                tracing::debug!("selected {}-state model for {}", model.n_states(), word);
                bank.insert(word, model);
            }
            Ok(None) => tracing::warn!("no model could be fitted for {}", word),
            Err(err) => tracing::warn!("selection failed for {}: {}", word, err),
        }
    }
    tracing::info!("trained models for {}/{} words", bank.len(), store.len());
    bank
}
