//! src/dataset.rs
//!
//! Dataset adapters.
//!
//! The scheduler only ever produces index batches; a [`DatasetAdapter`]
//! turns those indices into actual data. The trait is the single seam
//! between the scheduling core and data storage, chosen explicitly at
//! construction time rather than looked up through a registry.

use anyhow::{ensure, Result};
use std::sync::Arc;

/// Capability the scheduling core needs from a dataset: a length and a
/// multi-index gather.
///
/// Implementations must be `Send + Sync` so a loader can be moved to or
/// shared with worker threads by the caller.
pub trait DatasetAdapter: Send + Sync {
    /// The value-batch type produced by [`gather`](Self::gather).
    type Batch;

    /// Total number of rows.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gathers the rows at `indices`, in order.
    ///
    /// Callers pass indices produced by the scheduler, which are always in
    /// bounds; implementations may panic on out-of-range indices.
    fn gather(&self, indices: &[usize]) -> Self::Batch;
}

/// A fixed-length multi-array dataset held fully in memory.
///
/// Each constituent array contributes one value per row, so a row is the
/// tuple of values at the same position across all arrays (features and
/// labels, say). Arrays are stored as `Arc<[T]>`, making clones zero-copy
/// and the dataset cheap to share across threads.
#[derive(Debug, Clone)]
pub struct InMemoryDataset<T> {
    arrays: Vec<Arc<[T]>>,
    rows: usize,
}

impl<T: Clone> InMemoryDataset<T> {
    /// Creates a dataset from one or more same-length arrays.
    ///
    /// # Errors
    /// Returns an error if no arrays are given or if the arrays disagree on
    /// their leading dimension.
    pub fn new(arrays: Vec<Vec<T>>) -> Result<Self> {
        ensure!(!arrays.is_empty(), "Dataset needs at least one array");
        let rows = arrays[0].len();
        for (position, array) in arrays.iter().enumerate().skip(1) {
            ensure!(
                array.len() == rows,
                "All arrays must have the same leading dimension: array 0 has {} rows but array {} has {}",
                rows,
                position,
                array.len()
            );
        }
        Ok(Self {
            arrays: arrays.into_iter().map(Into::into).collect(),
            rows,
        })
    }

    /// Number of constituent arrays.
    pub fn num_arrays(&self) -> usize {
        self.arrays.len()
    }
}

impl<T: Clone + Send + Sync> DatasetAdapter for InMemoryDataset<T> {
    /// One `Vec<T>` per constituent array, each holding the gathered rows
    /// in index order.
    type Batch = Vec<Vec<T>>;

    fn len(&self) -> usize {
        self.rows
    }

    fn gather(&self, indices: &[usize]) -> Vec<Vec<T>> {
        self.arrays
            .iter()
            .map(|array| indices.iter().map(|&i| array[i].clone()).collect())
            .collect()
    }
}
