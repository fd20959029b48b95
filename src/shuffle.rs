//! Fair permutation shuffling.
//!
//! Every variant that randomizes layout (memory cards, puzzle positions, the
//! grouping word pool, the ordering sequence) draws from one [`SessionRng`]
//! owned by its session, so a seeded session deals reproducible layouts. The
//! shuffle is a standard Fisher–Yates pass and therefore always a permutation:
//! no element is added, dropped, or duplicated.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random source for one session's shuffles.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: Xoshiro256PlusPlus,
}

impl SessionRng {
    /// A reproducible source for the given seed (tests, replays, demos).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// An entropy-seeded source for normal play.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::thread_rng().gen())
    }

    /// Shuffles the slice in place with Fisher–Yates: for each index from the
    /// last down to the first, swap with a uniformly chosen index in `[0, i]`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }

    /// A uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Splits off an independent source, advancing this one. Engines that
    /// reshuffle mid-game (the grouping pool) keep a fork so later deals do
    /// not depend on how many draws other engines made first.
    pub fn fork(&mut self) -> SessionRng {
        Self::seeded(self.rng.gen())
    }
}
