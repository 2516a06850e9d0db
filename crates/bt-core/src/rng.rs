//! The simulation run's deterministic random source.
//!
//! # Determinism strategy
//!
//! One `SimRng` is created per run from the configured seed and owned by the
//! world state; every process draws from it by `&mut` reference.  Because the
//! event loop is single-threaded and resumes processes in a fully determined
//! order, the draw sequence — and therefore every emitted event — is
//! identical across runs with the same seed and configuration.  Nothing in
//! the simulator touches `rand::thread_rng()`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

/// Seeded random source producing the uniform, exponential, and Bernoulli
/// draws the simulation needs.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically from the run's configured seed.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A value uniformly distributed in `[lo, hi)`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    /// An exponential sample with the given rate (mean `1/rate`).
    ///
    /// The rate is clamped to a tiny positive value so the distribution is
    /// always valid; callers only pass positive rates.
    #[inline]
    pub fn exp(&mut self, rate: f64) -> f64 {
        debug_assert!(rate > 0.0, "exponential rate must be positive, got {rate}");
        // The clamp keeps `Exp::new` infallible.
        Exp::new(rate.max(f64::MIN_POSITIVE)).map_or(0.0, |dist| dist.sample(&mut self.0))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
