//! Deterministic, reproducible batched iteration over in-memory datasets.
//!
//! The crate is organised around three small pieces:
//! - [`KeySequence`]: a splittable pseudo-random key stream derived from a
//!   single root seed, used to reshuffle each epoch reproducibly.
//! - [`permutation::permute`]: turns a key (or its absence) into an index
//!   ordering over `0..n`.
//! - [`BatchScheduler`]: slices an epoch's ordering into fixed-size index
//!   batches, handles the final partial batch, and reshuffles on epoch end.
//!
//! [`DataLoader`] ties a scheduler to a [`DatasetAdapter`], turning index
//! batches into batches of values.

pub mod config;
pub mod dataset;
pub mod keys;
pub mod loader;
pub mod permutation;
pub mod scheduler;

pub use config::{LoaderConfig, LoaderConfigBuilder};
pub use dataset::{DatasetAdapter, InMemoryDataset};
pub use keys::{Key, KeySequence};
pub use loader::DataLoader;
pub use scheduler::{BatchScheduler, Step};
