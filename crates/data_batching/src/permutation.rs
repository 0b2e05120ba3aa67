//! src/permutation.rs
//!
//! Index orderings over `0..n`.
//!
//! A permutation here is just a `Vec<usize>` that is a bijection on
//! `[0, n)`. With no key the ordering is the identity; with a key it is a
//! uniformly random permutation derived deterministically from that key.

use crate::keys::Key;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Produces an index ordering over `0..n`.
///
/// - `key = None`: the identity ordering `0, 1, ..., n-1`.
/// - `key = Some(k)`: a Fisher–Yates shuffle of `0..n` driven by an RNG
///   seeded from `k`. The same key always yields the same permutation.
///
/// `n == 0` yields an empty ordering.
pub fn permute(n: usize, key: Option<Key>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    if let Some(key) = key {
        let mut rng = StdRng::from_seed(key.to_rng_seed());
        indices.shuffle(&mut rng);
    }
    indices
}
