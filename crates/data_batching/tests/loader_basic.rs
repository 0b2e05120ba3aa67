//! End-to-end batch and epoch behaviour of the DataLoader.
//!
//! Tests cover:
//! - Batch shapes with and without drop_last
//! - Partial final batch handling
//! - Per-epoch index coverage under shuffling
//! - Epoch restart semantics

mod common;
use common::{collect_epoch_features, numbered_dataset};

use anyhow::Result;
use data_batching::{DataLoader, LoaderConfig};
use std::collections::HashSet;

const TEST_SEED: u64 = 42;

#[test]
fn sequential_batches_with_partial_tail() -> Result<()> {
    let config = LoaderConfig::builder().batch_size(3).build();
    let mut loader = DataLoader::new(numbered_dataset(10)?, config)?;

    assert_eq!(loader.num_batches(), 4);
    assert_eq!(
        collect_epoch_features(&mut loader),
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
    );

    // Shuffle disabled: the next epoch repeats identically.
    assert_eq!(
        collect_epoch_features(&mut loader),
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
    );
    Ok(())
}

#[test]
fn drop_last_discards_partial_tail() -> Result<()> {
    let config = LoaderConfig::builder().batch_size(3).drop_last(true).build();
    let mut loader = DataLoader::new(numbered_dataset(10)?, config)?;

    assert_eq!(loader.num_batches(), 3);
    let batches = collect_epoch_features(&mut loader);
    assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
    assert!(batches.iter().flatten().all(|&v| v != 9));
    Ok(())
}

#[test]
fn shuffled_epoch_covers_every_row_exactly_once() -> Result<()> {
    let config = LoaderConfig::builder()
        .batch_size(7)
        .shuffle(true)
        .seed(TEST_SEED)
        .build();
    let mut loader = DataLoader::new(numbered_dataset(100)?, config)?;

    for _ in 0..3 {
        let flat: Vec<i64> = collect_epoch_features(&mut loader)
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(flat.len(), 100);
        assert_eq!(flat.iter().collect::<HashSet<_>>().len(), 100);
    }
    Ok(())
}

#[test]
fn shuffled_labels_stay_aligned_with_features() -> Result<()> {
    // Both arrays are gathered through the same index batch, so the label
    // column must track the feature column row for row.
    let config = LoaderConfig::builder()
        .batch_size(8)
        .shuffle(true)
        .seed(TEST_SEED)
        .build();
    let mut loader = DataLoader::new(numbered_dataset(50)?, config)?;

    for batch in loader.epoch() {
        let (features, labels) = (&batch[0], &batch[1]);
        assert_eq!(features.len(), labels.len());
        for (feature, label) in features.iter().zip(labels) {
            assert_eq!(feature % 2, *label);
        }
    }
    Ok(())
}

#[test]
fn reshuffles_between_epochs() -> Result<()> {
    let config = LoaderConfig::builder()
        .batch_size(10)
        .shuffle(true)
        .seed(TEST_SEED)
        .build();
    let mut loader = DataLoader::new(numbered_dataset(100)?, config)?;

    let epoch0 = collect_epoch_features(&mut loader);
    let epoch1 = collect_epoch_features(&mut loader);
    assert_ne!(epoch0, epoch1);
    Ok(())
}

#[test]
fn batch_size_larger_than_dataset() -> Result<()> {
    let keep = LoaderConfig::builder().batch_size(16).build();
    let mut loader = DataLoader::new(numbered_dataset(5)?, keep)?;
    assert_eq!(loader.num_batches(), 1);
    assert_eq!(
        collect_epoch_features(&mut loader),
        vec![vec![0, 1, 2, 3, 4]]
    );

    let drop = LoaderConfig::builder()
        .batch_size(16)
        .drop_last(true)
        .build();
    let mut loader = DataLoader::new(numbered_dataset(5)?, drop)?;
    assert_eq!(loader.num_batches(), 0);
    assert!(collect_epoch_features(&mut loader).is_empty());
    Ok(())
}

#[test]
fn huge_batch_size_completes_the_epoch() -> Result<()> {
    // batch_size near usize::MAX: one partial batch, then a clean epoch
    // boundary on the following call.
    let config = LoaderConfig::builder().batch_size(usize::MAX).build();
    let mut loader = DataLoader::new(numbered_dataset(10)?, config)?;

    assert_eq!(loader.num_batches(), 1);
    assert_eq!(loader.next_batch().unwrap()[0], (0..10).collect::<Vec<i64>>());
    assert!(loader.next_batch().is_none());

    // Next epoch repeats.
    assert_eq!(collect_epoch_features(&mut loader), vec![(0..10).collect::<Vec<i64>>()]);
    Ok(())
}

#[test]
fn empty_dataset_ends_every_epoch_immediately() -> Result<()> {
    let config = LoaderConfig::builder().batch_size(1).build();
    let mut loader = DataLoader::new(numbered_dataset(0)?, config)?;
    assert_eq!(loader.num_batches(), 0);
    assert!(loader.next_batch().is_none());
    assert!(loader.next_batch().is_none());
    Ok(())
}
