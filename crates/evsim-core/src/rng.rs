//! Deterministic, engine-owned RNG.
//!
//! The engine holds exactly one `SimRng`, seeded once at construction. No
//! algorithm or harness component consults global random state, so two runs
//! built from identical `TestSettings` (including seed) are bit-for-bit
//! reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG wrapper around `rand::rngs::SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a per-job seed the way the harness does: `(base_seed + iteration) mod 2^32`.
    pub fn derive_job_seed(base_seed: u64, iteration: u64) -> u64 {
        (base_seed.wrapping_add(iteration)) % (1u64 << 32)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range_u32(&mut self, lo: u32, hi_inclusive: u32) -> u32 {
        self.0.gen_range(lo..=hi_inclusive)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Sample two distinct floors in `[1, floors]`, returned as `(a, b)`.
    pub fn sample_distinct_floors(&mut self, floors: u32) -> (u32, u32) {
        loop {
            let a = self.gen_range_u32(1, floors);
            let b = self.gen_range_u32(1, floors);
            if a != b {
                return (a, b);
            }
        }
    }

    /// Choose a random element from a non-empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
