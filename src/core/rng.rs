//! Deterministic random number generation for board setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Context streams**: Independent sequences for different purposes
//!   (picking default icons vs shuffling the deck)
//! - **Recorded seed**: Unseeded games still expose the seed they used
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(42).for_context("deck");
//! let mut b = GameRng::new(42).for_context("deck");
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Deterministic RNG used when a board is generated.
///
/// Uses ChaCha8 for speed while keeping a uniform, reproducible shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is still recorded so the board can be reproduced.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// Context seeds are `FxHasher` digests, stable across toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Shuffle a slice in place (Fisher-Yates, every permutation equally likely).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct elements in random order.
    ///
    /// Returns fewer than `amount` when the slice is shorter.
    pub fn choose_multiple<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.inner, amount).cloned().collect()
    }
}
