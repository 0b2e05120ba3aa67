//! src/keys.rs
//!
//! Splittable pseudo-random keys.
//!
//! A [`Key`] is an opaque 128-bit unit of randomness state. Keys are never
//! advanced in place; new randomness is obtained by *splitting* a parent key
//! into statistically independent children. This makes every consumer of
//! randomness reproducible from a single root seed regardless of how many
//! other consumers exist, with no shared mutable RNG.
//!
//! [`KeySequence`] is the stateful pull interface on top of splitting: it
//! keeps one `current` key and a FIFO of pre-split `pending` keys, refilling
//! in batches of `reserve_size` to amortise split cost.

use std::collections::VecDeque;

/// Default number of keys split per refill of a [`KeySequence`].
pub const DEFAULT_RESERVE_SIZE: usize = 1;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// splitmix64 finalizer. Statistically strong bit diffusion, not
/// cryptographic.
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// An opaque 128-bit key usable both as a splitting input and as entropy
/// for permutation generation.
///
/// Keys are plain values: `Copy`, comparable, hashable. Two keys derived by
/// different split paths from the same root are statistically independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key([u64; 2]);

impl Key {
    /// Expands a root seed into a full 128-bit key.
    pub fn from_seed(seed: u64) -> Self {
        let hi = mix64(seed.wrapping_add(GOLDEN_GAMMA));
        let lo = mix64(seed.wrapping_add(GOLDEN_GAMMA.wrapping_mul(2)));
        Key([hi, lo])
    }

    /// Deterministically derives `count` fresh child keys from `self`.
    ///
    /// Each child mixes *both* parent lanes with its position in the split,
    /// so children depend on the full parent state and on split order, not
    /// on a bare counter. The parent remains valid but reusing it alongside
    /// its children weakens independence; callers should treat a split as
    /// consuming the parent.
    pub fn split(&self, count: usize) -> Vec<Key> {
        let [hi, lo] = self.0;
        (0..count as u64)
            .map(|i| {
                let salt = GOLDEN_GAMMA.wrapping_mul(2 * i + 1);
                let child_hi = mix64(hi ^ mix64(lo.wrapping_add(salt)));
                let child_lo = mix64(lo ^ mix64(hi.wrapping_add(salt.rotate_left(32))));
                Key([child_hi, child_lo])
            })
            .collect()
    }

    /// Expands the key into a 32-byte RNG seed.
    pub(crate) fn to_rng_seed(self) -> [u8; 32] {
        let [hi, lo] = self.0;
        let words = [hi, lo, mix64(hi ^ lo), mix64(lo.wrapping_add(hi.rotate_left(32)))];
        let mut seed = [0u8; 32];
        for (chunk, word) in seed.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        seed
    }
}

/// A stateful, infinite generator of independent [`Key`]s.
///
/// Owns a `current` key and an ordered buffer of `pending` keys. Drawing a
/// key pops the front of `pending`; when the buffer is empty it is refilled
/// by splitting `current` into `reserve_size + 1` keys (the first replaces
/// `current`, the rest queue up). The buffer therefore never grows beyond
/// `reserve_size` and splitting cost is amortised across draws.
///
/// For a fixed seed and a fixed sequence of [`next_key`](Self::next_key) /
/// [`reserve`](Self::reserve) calls, the returned key stream is bit-for-bit
/// reproducible. There is no way to rewind; reconstruct from the seed.
#[derive(Debug, Clone)]
pub struct KeySequence {
    current: Key,
    pending: VecDeque<Key>,
    reserve_size: usize,
}

impl KeySequence {
    /// Creates a key sequence rooted at `seed` with the default reserve size.
    pub fn new(seed: u64) -> Self {
        Self::with_reserve_size(seed, DEFAULT_RESERVE_SIZE)
    }

    /// Creates a key sequence that refills its buffer `reserve_size` keys at
    /// a time.
    ///
    /// A `reserve_size` of 0 is legal: every draw then performs a singleton
    /// split.
    pub fn with_reserve_size(seed: u64, reserve_size: usize) -> Self {
        Self {
            current: Key::from_seed(seed),
            pending: VecDeque::new(),
            reserve_size,
        }
    }

    /// Splits `num` additional keys for later draws.
    ///
    /// `current` is replaced by the first of `num + 1` children; the
    /// remaining `num` are appended to the back of the pending buffer.
    /// No-op when `num == 0`.
    pub fn reserve(&mut self, num: usize) {
        if num > 0 {
            let mut fresh = self.current.split(num + 1);
            self.current = fresh[0];
            self.pending.extend(fresh.drain(1..));
        }
    }

    /// Returns the next key, refilling the pending buffer if needed.
    pub fn next_key(&mut self) -> Key {
        if self.pending.is_empty() {
            self.reserve(self.reserve_size.max(1));
        }
        self.pending
            .pop_front()
            .unwrap_or_else(|| unreachable!("reserve always yields at least one pending key"))
    }

    /// Number of keys currently buffered.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
