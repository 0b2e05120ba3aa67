//! src/loader.rs
//!
//! The `DataLoader` ties a [`DatasetAdapter`] to a [`BatchScheduler`]: the
//! scheduler decides *which* rows make up the next batch, the adapter
//! gathers them.
//!
//! Iteration is grouped into epochs. [`DataLoader::next_batch`] returns
//! `None` exactly once per epoch boundary; the scheduler has already reset
//! and reshuffled by then, so the following call yields the first batch of
//! the next epoch. [`DataLoader::epoch`] wraps that contract in a borrowing
//! iterator:
//!
//! ```ignore
//! let mut loader = DataLoader::new(dataset, config)?;
//! for epoch in 0..num_epochs {
//!     for batch in loader.epoch() {
//!         // batch: one Vec<T> per dataset array
//!     }
//! }
//! ```

use crate::config::{LoaderConfig, DEFAULT_SEED};
use crate::dataset::DatasetAdapter;
use crate::keys::KeySequence;
use crate::scheduler::{BatchScheduler, Step};
use anyhow::Result;
use tracing::{debug, warn};

/// Deterministic batched iterator over a dataset.
///
/// Holds the one [`KeySequence`] (inside its scheduler) that drives all
/// shuffling, so two loaders never interfere with each other's randomness.
/// Calls that advance iteration take `&mut self`; share across threads only
/// behind external synchronisation.
pub struct DataLoader<D: DatasetAdapter> {
    dataset: D,
    scheduler: BatchScheduler,
}

impl<D: DatasetAdapter> DataLoader<D> {
    /// Creates a loader over `dataset`.
    ///
    /// Unset config fields fall back to their defaults: `batch_size` 1,
    /// `shuffle` false, `drop_last` false, `seed` [`DEFAULT_SEED`].
    ///
    /// An empty dataset is legal (every epoch is immediately empty) but
    /// usually a caller mistake, so it is logged rather than rejected.
    ///
    /// # Errors
    /// Returns an error if `batch_size` is 0.
    pub fn new(dataset: D, config: LoaderConfig) -> Result<Self> {
        let batch_size = config.batch_size.unwrap_or(1);
        let shuffle = config.shuffle.unwrap_or(false);
        let drop_last = config.drop_last.unwrap_or(false);
        let seed = config.seed.unwrap_or(DEFAULT_SEED);

        if dataset.is_empty() {
            warn!("dataset is empty; every epoch will end immediately");
        }

        let keys = KeySequence::with_reserve_size(seed, config.reserve_size);
        let scheduler = BatchScheduler::new(dataset.len(), batch_size, shuffle, drop_last, keys)?;
        debug!(
            data_len = dataset.len(),
            batch_size, shuffle, drop_last, seed, "data loader ready"
        );
        Ok(Self { dataset, scheduler })
    }

    /// Number of batches per epoch.
    pub fn num_batches(&self) -> usize {
        self.scheduler.num_batches()
    }

    /// The dataset being iterated.
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// Gathers the next batch of values, or `None` at an epoch boundary.
    ///
    /// After `None` the loader is already positioned at the start of the
    /// next epoch (reshuffled if configured).
    pub fn next_batch(&mut self) -> Option<D::Batch> {
        match self.scheduler.next_batch() {
            Step::Batch(indices) => Some(self.dataset.gather(&indices)),
            Step::EndOfEpoch => None,
        }
    }

    /// Returns an iterator over the remaining batches of the current epoch.
    pub fn epoch(&mut self) -> Epoch<'_, D> {
        Epoch { loader: self }
    }
}

/// Borrowing iterator over one epoch of gathered batches.
///
/// Ends when the underlying scheduler signals end-of-epoch; creating a new
/// `Epoch` afterwards iterates the next epoch.
pub struct Epoch<'a, D: DatasetAdapter> {
    loader: &'a mut DataLoader<D>,
}

impl<D: DatasetAdapter> Iterator for Epoch<'_, D> {
    type Item = D::Batch;

    fn next(&mut self) -> Option<D::Batch> {
        self.loader.next_batch()
    }
}
