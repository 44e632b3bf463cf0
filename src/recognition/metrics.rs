//! Recognition quality metrics

use serde::{Deserialize, Serialize};

/// Fraction of items whose guess does not match the reference word.
///
/// A missing guess counts as wrong. `guesses` and `reference` are
/// parallel slices in test-set order.
pub fn word_error_rate(guesses: &[Option<String>], reference: &[String]) -> f64 {
    if guesses.is_empty() {
        return 0.0;
    }
    let wrong = guesses
        .iter()
        .zip(reference)
        .filter(|(guess, truth)| guess.as_deref() != Some(truth.as_str()))
        .count();
    wrong as f64 / guesses.len() as f64
}

/// Aggregate recognition counts for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionSummary {
    /// Items recognized
    pub n_items: usize,
    /// Correct guesses
    pub n_correct: usize,
    /// Items with no guess at all
    pub n_unrecognized: usize,
    /// Word error rate
    pub wer: f64,
}

impl RecognitionSummary {
    /// Summarize guesses against the reference transcription
    pub fn from_guesses(guesses: &[Option<String>], reference: &[String]) -> Self {
        let n_correct = guesses
            .iter()
            .zip(reference)
            .filter(|(guess, truth)| guess.as_deref() == Some(truth.as_str()))
            .count();
        let n_unrecognized = guesses.iter().filter(|guess| guess.is_none()).count();

        Self {
            n_items: guesses.len(),
            n_correct,
            n_unrecognized,
            wer: word_error_rate(guesses, reference),
        }
    }

    /// Fraction of items guessed correctly
    pub fn accuracy(&self) -> f64 {
        if self.n_items == 0 {
            return 0.0;
        }
        self.n_correct as f64 / self.n_items as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_word_error_rate() {
        let guesses = vec![
            Some("BOOK".to_string()),
            Some("FISH".to_string()),
            None,
            Some("BOOK".to_string()),
        ];
        let truth = owned(&["BOOK", "CHOCOLATE", "FISH", "BOOK"]);

        let wer = word_error_rate(&guesses, &truth);
        assert!((wer - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_run_has_zero_wer() {
        assert_eq!(word_error_rate(&[], &[]), 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let guesses = vec![Some("BOOK".to_string()), None, Some("FISH".to_string())];
        let truth = owned(&["BOOK", "FISH", "FISH"]);

        let summary = RecognitionSummary::from_guesses(&guesses, &truth);
        assert_eq!(summary.n_items, 3);
        assert_eq!(summary.n_correct, 2);
        assert_eq!(summary.n_unrecognized, 1);
        assert!((summary.accuracy() - 2.0 / 3.0).abs() < 1e-10);
        assert!((summary.wer - 1.0 / 3.0).abs() < 1e-10);
    }
}
