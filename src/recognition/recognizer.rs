//! Maximum-likelihood recognition of unlabeled test items

use super::bank::ModelBank;
use crate::data::TestSet;
use crate::oracle::SequenceModel;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-item map from word to log-likelihood, in bank order.
pub type LikelihoodTable = IndexMap<String, f64>;

/// Recognition output, parallel to the test set's item order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recognition {
    /// One likelihood table per test item, with one entry per bank word
    pub probabilities: Vec<LikelihoodTable>,
    /// Best-guess word per test item; `None` when no model scored it
    pub guesses: Vec<Option<String>>,
}

impl Recognition {
    /// Number of recognized items
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

/// Score every test item against every model in the bank.
///
/// A model that fails to score an item contributes negative infinity to
/// that item's table and can never become the guess (the best-guess
/// update is strictly greater-than, which also makes the first-seen
/// word win exact ties). An item every model fails on gets an
/// all-negative-infinity table and no guess.
pub fn recognize<M: SequenceModel>(bank: &ModelBank<M>, test_set: &TestSet) -> Recognition {
    let mut probabilities = Vec::with_capacity(test_set.len());
    let mut guesses = Vec::with_capacity(test_set.len());

    for item in test_set.items() {
        let mut table = LikelihoodTable::new();
        let mut best_guess: Option<&str> = None;
        let mut best_score = f64::NEG_INFINITY;

        for (word, model) in bank.iter() {
            let log_l = match model.score(item.observations(), item.lengths()) {
                Ok(log_l) => log_l,
                Err(err) => {
                    tracing::debug!("scoring item {} against {} failed: {}", item.id(), word, err);
                    f64::NEG_INFINITY
                }
            };
            table.insert(word.to_string(), log_l);
            if log_l > best_score {
                best_score = log_l;
                best_guess = Some(word);
            }
        }

        probabilities.push(table);
        guesses.push(best_guess.map(str::to_string));
    }

    Recognition {
        probabilities,
        guesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TestItem;
    use crate::oracle::ScoreError;
    use ndarray::Array2;

    /// Fixed score per item, keyed by the item's frame count; errors on
    /// frame counts listed in `fail_rows`.
    struct StubModel {
        scores: Vec<(usize, f64)>,
        fail_rows: Vec<usize>,
    }

    impl SequenceModel for StubModel {
        fn n_states(&self) -> usize {
            3
        }

        fn score(&self, observations: &Array2<f64>, _lengths: &[usize]) -> Result<f64, ScoreError> {
            let rows = observations.nrows();
            if self.fail_rows.contains(&rows) {
                return Err(ScoreError::Degenerate);
            }
            self.scores
                .iter()
                .find(|&&(r, _)| r == rows)
                .map(|&(_, s)| s)
                .ok_or(ScoreError::NotFitted)
        }
    }

    /// Two items, distinguishable by frame count: item 0 has 2 frames,
    /// item 1 has 3.
    fn test_set() -> TestSet {
        let mut set = TestSet::new();
        set.push(TestItem::new(0, Array2::from_elem((2, 1), 0.0), vec![2]).unwrap());
        set.push(TestItem::new(1, Array2::from_elem((3, 1), 0.0), vec![3]).unwrap());
        set
    }

    fn bank() -> ModelBank<StubModel> {
        let mut bank = ModelBank::new();
        // item 0: A wins; item 1: C wins
        bank.insert(
            "A",
            StubModel {
                scores: vec![(2, -10.0), (3, -50.0)],
                fail_rows: vec![],
            },
        );
        bank.insert(
            "B",
            StubModel {
                scores: vec![(2, -20.0), (3, -40.0)],
                fail_rows: vec![],
            },
        );
        bank.insert(
            "C",
            StubModel {
                scores: vec![(2, -30.0), (3, -30.0)],
                fail_rows: vec![],
            },
        );
        bank
    }

    #[test]
    fn test_tables_and_guesses_follow_item_order() {
        let output = recognize(&bank(), &test_set());

        assert_eq!(output.probabilities.len(), 2);
        assert_eq!(output.guesses.len(), 2);
        for table in &output.probabilities {
            assert_eq!(table.len(), 3);
        }
        assert_eq!(output.guesses[0].as_deref(), Some("A"));
        assert_eq!(output.guesses[1].as_deref(), Some("C"));
        assert_eq!(output.probabilities[0]["B"], -20.0);
    }

    #[test]
    fn test_score_failure_becomes_negative_infinity() {
        let mut bank = bank();
        // B now fails on item 1 (3 frames)
        bank.insert(
            "B",
            StubModel {
                scores: vec![(2, -20.0)],
                fail_rows: vec![3],
            },
        );

        let output = recognize(&bank, &test_set());
        assert_eq!(output.probabilities[1]["B"], f64::NEG_INFINITY);
        assert_ne!(output.guesses[1].as_deref(), Some("B"));
        // item 0 is untouched
        assert_eq!(output.probabilities[0]["B"], -20.0);
    }

    #[test]
    fn test_item_nobody_scores_gets_no_guess() {
        let mut bank = ModelBank::new();
        bank.insert(
            "A",
            StubModel {
                scores: vec![],
                fail_rows: vec![2, 3],
            },
        );

        let output = recognize(&bank, &test_set());
        assert_eq!(output.guesses[0], None);
        assert!(output.probabilities[0]
            .values()
            .all(|&v| v == f64::NEG_INFINITY));
    }

    #[test]
    fn test_first_seen_word_wins_ties() {
        let mut bank = ModelBank::new();
        for word in ["A", "B"] {
            bank.insert(
                word,
                StubModel {
                    scores: vec![(2, -5.0), (3, -5.0)],
                    fail_rows: vec![],
                },
            );
        }

        let output = recognize(&bank, &test_set());
        assert_eq!(output.guesses[0].as_deref(), Some("A"));
    }
}
