//! Distribution helpers layered on [`SeededRng`].

use tables::ValueRange;
use tables::constants::SOLAR_METALLICITY_Z;

use crate::rng::SeededRng;

/// Below this distance from 1 a power-law exponent is treated as exactly 1.
const UNIT_EXPONENT_EPSILON: f64 = 1e-6;

/// Sample from p(x) ∝ x^(-exponent) on [min, max] by inverse transform.
///
/// An exponent of 1 makes the inverse CDF singular, so that case is sampled
/// log-uniformly. Degenerate bounds return `min` after consuming a draw.
pub fn sample_power_law(rng: &mut SeededRng, min: f64, max: f64, exponent: f64) -> f64 {
    let u = rng.uniform();
    if !(min > 0.0 && max > min) {
        return min;
    }
    if (exponent - 1.0).abs() < UNIT_EXPONENT_EPSILON {
        return min * (max / min).powf(u);
    }
    let k = 1.0 - exponent;
    let lo = min.powf(k);
    let hi = max.powf(k);
    (lo + u * (hi - lo)).powf(1.0 / k).clamp(min, max)
}

/// Log-uniform sample across a range (linear if it touches zero).
pub fn sample_log_uniform(rng: &mut SeededRng, range: &ValueRange) -> f64 {
    range.log_lerp(rng.uniform())
}

/// Uniform in `[0, max]`, biased toward zero by squaring the draw.
pub fn sample_biased_low(rng: &mut SeededRng, max: f64) -> f64 {
    let u = rng.uniform();
    u * u * max
}

/// Index chosen with probability proportional to `weights`.
///
/// Non-positive weights are never chosen; if nothing is positive the first
/// index is returned.
pub fn sample_weighted(rng: &mut SeededRng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    let roll = rng.uniform() * total;
    let mut cumulative = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        if roll < cumulative {
            return i;
        }
    }
    weights.iter().rposition(|w| *w > 0.0).unwrap_or(0)
}

/// Multiplicative jitter factor uniform in [1 - spread, 1 + spread].
pub fn jitter(rng: &mut SeededRng, spread: f64) -> f64 {
    rng.uniform_range(1.0 - spread, 1.0 + spread)
}

/// Stellar heavy-element fraction Z.
///
/// [Fe/H] is drawn from the solar-neighbourhood distribution N(0, 0.2 dex),
/// clamped to [-0.5, 0.4], and converted with Z = Z☉ · 10^[Fe/H].
pub fn sample_metallicity(rng: &mut SeededRng) -> f64 {
    let fe_h = rng.normal(0.0, 0.2).clamp(-0.5, 0.4);
    SOLAR_METALLICITY_Z * 10f64.powf(fe_h)
}
