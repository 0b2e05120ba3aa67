use anyhow::Result;
use data_batching::{DataLoader, InMemoryDataset};

/// Builds a two-array dataset where row i holds feature `i` and label `i % 2`.
pub fn numbered_dataset(n: usize) -> Result<InMemoryDataset<i64>> {
    let features: Vec<i64> = (0..n as i64).collect();
    let labels: Vec<i64> = (0..n as i64).map(|i| i % 2).collect();
    InMemoryDataset::new(vec![features, labels])
}

/// Drains one epoch and returns the feature column of every batch.
pub fn collect_epoch_features(loader: &mut DataLoader<InMemoryDataset<i64>>) -> Vec<Vec<i64>> {
    loader.epoch().map(|batch| batch[0].clone()).collect()
}
