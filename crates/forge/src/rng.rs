//! Seeded deterministic random source.
//!
//! Every stochastic function in the crate takes a `&mut SeededRng`; there is
//! no ambient randomness. The same seed and the same sequence of calls give
//! bit-identical draws on every platform.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Golden-ratio increment used to decorrelate child streams.
const STREAM_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: ChaChaRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent generator for sub-stream `stream`.
    ///
    /// Depends only on this generator's seed, not on how many values have
    /// been drawn, so siblings can be created in any order.
    pub fn child(&self, stream: u64) -> SeededRng {
        SeededRng::new(self.seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_MIX))
    }

    /// Uniform in [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform in [lo, hi). A degenerate range returns `lo`, still
    /// consuming one draw.
    pub fn uniform_range(&mut self, lo: f64, hi: f64) -> f64 {
        let u = self.uniform();
        if hi > lo { lo + (hi - lo) * u } else { lo }
    }

    /// Uniform integer in [lo, hi], inclusive. Returns `lo` when `hi <= lo`.
    pub fn int_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            self.uniform();
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Uniform index into a collection of `len` items (`len` > 0).
    pub fn index(&mut self, len: usize) -> usize {
        let last = len.saturating_sub(1) as i64;
        self.int_range(0, last) as usize
    }

    /// Normal sample via the Box–Muller transform.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        mean + std_dev * z
    }

    /// True with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p.clamp(0.0, 1.0)
    }

    /// Sixteen random bytes, used for body identifiers.
    pub fn bytes(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        bytes
    }
}
