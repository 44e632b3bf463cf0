//! Model-selection strategies
//!
//! Each strategy searches the candidate hidden-state counts for one
//! word and returns the best fitted model. No candidate's failure ever
//! halts a search; only total failure triggers the constant-count
//! fallback, and if that fails too the word simply has no model.

mod base;
mod bic;
mod constant;
mod criterion;
mod cv;
mod dic;
mod folds;

pub use base::{
    ModelSelector, SelectorContext, SelectorParams, DEFAULT_STATE_COUNT, MAX_STATE_COUNT,
    MIN_STATE_COUNT,
};
pub use bic::BicSelector;
pub use constant::ConstantSelector;
pub use criterion::{train_bank, SelectionCriterion};
pub use cv::{CvSelector, DEFAULT_FOLD_COUNT};
pub use dic::DicSelector;
pub use folds::{kfold, Fold};
