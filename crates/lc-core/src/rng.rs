//! The single randomness seam.
//!
//! Every random draw in the simulator goes through [`RandomSource::unit`].
//! Production code uses [`SimRng`]; tests substitute scripted sources so the
//! deterministic parts of the update can be checked exactly.
//!
//! Nothing requires reproducibility across runs, so the default `SimRng` is
//! entropy-seeded.  `SimRng::new(seed)` is there for benchmarks and demos that
//! want repeatable output.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform `f64` samples in `[0, 1)`.
pub trait RandomSource {
    /// One uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    #[inline]
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    /// Uniform sample in `[-magnitude, magnitude)`.
    #[inline]
    fn symmetric(&mut self, magnitude: f64) -> f64 {
        (self.unit() - 0.5) * 2.0 * magnitude
    }

    /// `true` with probability `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniform angle in `[0, 2π)`.
    #[inline]
    fn angle(&mut self) -> f64 {
        self.unit() * TAU
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulator-level RNG backed by `SmallRng`.
///
/// One per simulator instance; instances never share state.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
