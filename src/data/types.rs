//! Corpus and test-set types for isolated-word recognition

use ndarray::{concatenate, Array2, Axis};

/// One recorded utterance: a matrix of feature frames (rows = frames,
/// cols = features). Immutable once loaded.
pub type ObservationSequence = Array2<f64>;

/// All recorded utterances of one vocabulary word, together with the
/// concatenated view the model engine consumes.
///
/// The concatenated matrix stacks every sequence's frames in sequence
/// order; `lengths` holds the per-sequence frame counts in the same
/// order, so `sum(lengths) == concatenated rows` always holds.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    /// Raw sequences, in load order
    sequences: Vec<ObservationSequence>,
    /// All frames of all sequences, stacked
    observations: Array2<f64>,
    /// Frame count of each sequence
    lengths: Vec<usize>,
}

impl WordCorpus {
    /// Build a corpus from raw sequences, deriving the concatenated
    /// matrix and length list.
    pub fn from_sequences(sequences: Vec<ObservationSequence>) -> anyhow::Result<Self> {
        if sequences.is_empty() {
            anyhow::bail!("a word corpus needs at least one sequence");
        }

        let n_features = sequences[0].ncols();
        for (idx, sequence) in sequences.iter().enumerate() {
            if sequence.nrows() == 0 {
                anyhow::bail!("sequence {} has no frames", idx);
            }
            if sequence.ncols() != n_features {
                anyhow::bail!(
                    "sequence {} has {} features, expected {}",
                    idx,
                    sequence.ncols(),
                    n_features
                );
            }
        }

        let lengths: Vec<usize> = sequences.iter().map(|s| s.nrows()).collect();
        let views: Vec<_> = sequences.iter().map(|s| s.view()).collect();
        let observations = concatenate(Axis(0), &views)?;

        Ok(Self {
            sequences,
            observations,
            lengths,
        })
    }

    /// Raw sequences in load order
    pub fn sequences(&self) -> &[ObservationSequence] {
        &self.sequences
    }

    /// Concatenated feature matrix (all frames of all sequences)
    pub fn observations(&self) -> &Array2<f64> {
        &self.observations
    }

    /// Per-sequence frame counts, parallel to the concatenation order
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of sequences
    pub fn n_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// Total number of frames across all sequences
    pub fn n_frames(&self) -> usize {
        self.observations.nrows()
    }

    /// Feature dimensionality
    pub fn n_features(&self) -> usize {
        self.observations.ncols()
    }

    /// Rebuild a concatenated matrix and length list from a subset of
    /// sequence indices. Used to assemble cross-validation folds.
    pub fn subset(&self, indices: &[usize]) -> anyhow::Result<(Array2<f64>, Vec<usize>)> {
        if indices.is_empty() {
            anyhow::bail!("cannot build a matrix from an empty index set");
        }

        let mut views = Vec::with_capacity(indices.len());
        let mut lengths = Vec::with_capacity(indices.len());
        for &idx in indices {
            let sequence = self.sequences.get(idx).ok_or_else(|| {
                anyhow::anyhow!(
                    "sequence index {} out of range ({} sequences)",
                    idx,
                    self.sequences.len()
                )
            })?;
            views.push(sequence.view());
            lengths.push(sequence.nrows());
        }

        Ok((concatenate(Axis(0), &views)?, lengths))
    }
}

/// One unlabeled item to recognize: an id plus its feature matrix and
/// segment lengths.
#[derive(Debug, Clone)]
pub struct TestItem {
    id: usize,
    observations: Array2<f64>,
    lengths: Vec<usize>,
}

impl TestItem {
    /// Create a test item, checking that the length list matches the
    /// matrix.
    pub fn new(id: usize, observations: Array2<f64>, lengths: Vec<usize>) -> anyhow::Result<Self> {
        if lengths.is_empty() {
            anyhow::bail!("test item {} has no segments", id);
        }
        let total: usize = lengths.iter().sum();
        if total != observations.nrows() {
            anyhow::bail!(
                "test item {}: segment lengths sum to {} but the matrix has {} rows",
                id,
                total,
                observations.nrows()
            );
        }
        Ok(Self {
            id,
            observations,
            lengths,
        })
    }

    /// Item id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Feature matrix
    pub fn observations(&self) -> &Array2<f64> {
        &self.observations
    }

    /// Segment lengths
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }
}

/// An ordered collection of test items. Iteration order is item order
/// and determines the order of recognition output.
#[derive(Debug, Clone, Default)]
pub struct TestSet {
    items: Vec<TestItem>,
}

impl TestSet {
    /// Create an empty test set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item; items keep their insertion order
    pub fn push(&mut self, item: TestItem) {
        self.items.push(item);
    }

    /// Items in order
    pub fn items(&self) -> &[TestItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
