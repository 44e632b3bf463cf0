//! Deterministic k-fold index splitting

/// Train/test index split for one fold.
#[derive(Debug, Clone)]
pub struct Fold {
    /// Indices to train on
    pub train: Vec<usize>,
    /// Held-out indices
    pub test: Vec<usize>,
}

/// Split `0..n_samples` into `n_splits` contiguous folds.
///
/// The first `n_samples % n_splits` folds get one extra sample. No
/// shuffling, so the partition is reproducible by construction. Callers
/// are expected to keep `2 <= n_splits <= n_samples`.
pub fn kfold(n_samples: usize, n_splits: usize) -> Vec<Fold> {
    let base = n_samples / n_splits;
    let extra = n_samples % n_splits;

    let mut folds = Vec::with_capacity(n_splits);
    let mut start = 0;
    for fold_idx in 0..n_splits {
        let size = base + usize::from(fold_idx < extra);
        let end = start + size;
        folds.push(Fold {
            train: (0..start).chain(end..n_samples).collect(),
            test: (start..end).collect(),
        });
        start = end;
    }
    folds
}
