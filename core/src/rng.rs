//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All step multipliers flow through a [`StepSampler`], and the only
//! production sampler is [`RaceRng`], seeded from a single u64 — the
//! whole race is reproducible from that seed.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Strategy seam for the one random draw a race step makes.
///
/// `Horse::step` asks its sampler for a multiplier in `[lo, hi]`.
/// Tests substitute fixed or recording implementations; production
/// code uses [`RaceRng`].
pub trait StepSampler {
    /// Draw the next multiplier from the range `[lo, hi]`.
    fn sample(&mut self, lo: f64, hi: f64) -> f64;
}

/// The production sampler: a PCG stream seeded deterministically.
pub struct RaceRng {
    inner: Pcg64Mcg,
}

impl RaceRng {
    pub fn seed_from(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }
}

impl StepSampler for RaceRng {
    fn sample(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}
