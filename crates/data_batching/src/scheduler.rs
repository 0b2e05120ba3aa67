//! src/scheduler.rs
//!
//! Epoch/batch index scheduling.
//!
//! [`BatchScheduler`] walks one permutation of `0..data_len` per epoch,
//! emitting successive index slices of `batch_size` (the final slice may be
//! shorter when `drop_last` is false). When an epoch is exhausted it resets
//! its position, recomputes the ordering for the next epoch (drawing a fresh
//! key from its [`KeySequence`] when shuffling), and signals
//! [`Step::EndOfEpoch`]; the following call yields the first batch of the
//! new epoch.

use crate::keys::KeySequence;
use crate::permutation::permute;
use anyhow::{ensure, Result};
use tracing::trace;

/// The result of one scheduler step: either a batch of dataset indices, or
/// the end-of-epoch marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `batch_size` indices into the dataset, or fewer for the final batch
    /// of an epoch when `drop_last` is false.
    Batch(Vec<usize>),
    /// The current epoch is exhausted. The scheduler has already reset and
    /// reshuffled; calling again starts the next epoch.
    EndOfEpoch,
}

/// State machine turning an epoch permutation into a sequence of batches.
///
/// Calls to [`next_batch`](Self::next_batch) must be strictly sequential;
/// the scheduler mutates its position and key state on every call and is not
/// safe for concurrent use without external synchronisation.
#[derive(Debug)]
pub struct BatchScheduler {
    data_len: usize,
    batch_size: usize,
    shuffle: bool,
    drop_last: bool,
    keys: KeySequence,
    order: Vec<usize>,
    position: usize,
}

impl BatchScheduler {
    /// Creates a scheduler over a dataset of `data_len` rows.
    ///
    /// The first epoch's ordering is computed eagerly: a fresh key is drawn
    /// from `keys` iff `shuffle` is true.
    ///
    /// # Errors
    /// Returns an error if `batch_size` is 0.
    pub fn new(
        data_len: usize,
        batch_size: usize,
        shuffle: bool,
        drop_last: bool,
        mut keys: KeySequence,
    ) -> Result<Self> {
        ensure!(
            batch_size > 0,
            "batch_size must be > 0, but got batch_size={}",
            batch_size
        );
        let order = permute(data_len, shuffle.then(|| keys.next_key()));
        Ok(Self {
            data_len,
            batch_size,
            shuffle,
            drop_last,
            keys,
            order,
            position: 0,
        })
    }

    /// Number of batches per epoch.
    ///
    /// `floor(data_len / batch_size)` when `drop_last`, else
    /// `ceil(data_len / batch_size)`.
    pub fn num_batches(&self) -> usize {
        if self.drop_last {
            self.data_len / self.batch_size
        } else {
            self.data_len.div_ceil(self.batch_size)
        }
    }

    /// Dataset length this scheduler iterates over.
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Emits the next batch of indices, or [`Step::EndOfEpoch`] once the
    /// current epoch is exhausted.
    pub fn next_batch(&mut self) -> Step {
        // position <= data_len always holds, so the subtraction cannot
        // underflow; phrased this way the guard also cannot overflow for
        // batch sizes near usize::MAX.
        if self.batch_size <= self.data_len - self.position {
            let batch = self.order[self.position..self.position + self.batch_size].to_vec();
            self.position += self.batch_size;
            Step::Batch(batch)
        } else if self.position < self.data_len && !self.drop_last {
            // Final partial batch of data_len % batch_size indices.
            let batch = self.order[self.position..].to_vec();
            self.position = self.data_len;
            Step::Batch(batch)
        } else {
            self.reset();
            Step::EndOfEpoch
        }
    }

    /// Rewinds to the start of a fresh epoch, reshuffling if enabled.
    fn reset(&mut self) {
        self.position = 0;
        self.order = permute(self.data_len, self.shuffle.then(|| self.keys.next_key()));
        trace!(
            data_len = self.data_len,
            shuffle = self.shuffle,
            "epoch exhausted, scheduler reset"
        );
    }
}
