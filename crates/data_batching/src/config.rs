//! src/config.rs
//!
//! Configuration for DataLoader behaviour.
//!
//! The `LoaderConfig` struct stores the parameters that control how batches
//! are scheduled. Two loaders built from the same config (seed included)
//! emit identical batch sequences; there is no hidden global state.
//!
//! Example:
//! ```ignore
//! let config = LoaderConfig::builder()
//!     .batch_size(32)
//!     .shuffle(true)
//!     .drop_last(true)
//!     .seed(42)
//!     .build();
//! ```

use crate::keys::DEFAULT_RESERVE_SIZE;

/// Root seed used when none is configured. A fixed default keeps runs
/// reproducible out of the box.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for [`DataLoader`](crate::DataLoader).
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Number of samples per batch (defaults to 1 if not specified).
    pub batch_size: Option<usize>,
    /// Whether to reshuffle the index order each epoch (defaults to false).
    pub shuffle: Option<bool>,
    /// Whether to drop the last incomplete batch (defaults to false).
    pub drop_last: Option<bool>,
    /// Root seed for the key sequence (defaults to [`DEFAULT_SEED`]).
    pub seed: Option<u64>,
    /// How many keys the key sequence splits per refill. Larger values
    /// amortise split cost over more epochs; 1 is fine for typical use.
    pub reserve_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: None,
            shuffle: None,
            drop_last: None,
            seed: None,
            reserve_size: DEFAULT_RESERVE_SIZE,
        }
    }
}

impl LoaderConfig {
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }
}

/// Builder for [`LoaderConfig`] with method chaining.
#[derive(Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Set the batch size (must be > 0).
    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = Some(size);
        self
    }

    /// Set whether to shuffle the dataset every epoch.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = Some(shuffle);
        self
    }

    /// Set whether to drop the last incomplete batch.
    pub fn drop_last(mut self, drop: bool) -> Self {
        self.config.drop_last = Some(drop);
        self
    }

    /// Set the root seed for reproducible shuffling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the key-sequence reserve size.
    pub fn reserve_size(mut self, reserve_size: usize) -> Self {
        self.config.reserve_size = reserve_size;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> LoaderConfig {
        self.config
    }
}
