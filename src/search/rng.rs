use rand::rngs::SmallRng;
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use std::fmt::{self, Debug, Formatter};

/// Random number generator used for preferred-operator sampling. Seedable so
/// that runs are reproducible.
pub struct RandomNumberGenerator {
    rng: SmallRng,
}

impl RandomNumberGenerator {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draw `amount` distinct elements uniformly at random without
    /// replacement. The result preserves the slice order: sampled elements
    /// are returned in ascending original-index order.
    pub fn sample<T: Copy>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        debug_assert!(amount <= items.len());
        let mut indices = index::sample(&mut self.rng, items.len(), amount).into_vec();
        indices.sort_unstable();
        indices.into_iter().map(|i| items[i]).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for RandomNumberGenerator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RandomNumberGenerator").finish_non_exhaustive()
    }
}
