//! Kepler's equation M = E − e·sin E and anomaly conversions.

use std::f64::consts::TAU;

use tracing::warn;

/// Below this eccentricity the orbit is treated as circular and E = M.
const CIRCULAR_ECCENTRICITY: f64 = 1e-10;

/// Highest eccentricity the elliptic solver accepts; larger values are clamped.
const MAX_ECCENTRICITY: f64 = 1.0 - 1e-9;

/// Newton–Raphson settings for [`solve_kepler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerOptions {
    /// Stop once the Newton step is smaller than this (radians)
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for KeplerOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 50,
        }
    }
}

/// Result of solving Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (radians)
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// Wrap an angle into [0, 2π). Non-finite angles map to 0.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Solve Kepler's equation for the eccentric anomaly using Newton–Raphson.
///
/// The mean anomaly is reduced to [-π, π) before iterating and the
/// eccentric anomaly is shifted back by the same number of turns, so the
/// returned E satisfies the equation for the caller's original M.
///
/// Degenerate input never produces NaN: a non-finite mean anomaly is
/// returned unchanged, near-circular orbits short-circuit to E = M, and a
/// vanishing derivative stops the iteration at the current estimate.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, options: &KeplerOptions) -> KeplerSolution {
    if !mean_anomaly.is_finite() || !eccentricity.is_finite() || eccentricity < CIRCULAR_ECCENTRICITY {
        return KeplerSolution {
            eccentric_anomaly: mean_anomaly,
            iterations: 0,
            converged: true,
        };
    }

    let e = eccentricity.min(MAX_ECCENTRICITY);
    let turns = ((mean_anomaly + std::f64::consts::PI) / TAU).floor();
    let m = mean_anomaly - turns * TAU;

    // Danby's starting guess, robust up to e → 1
    let mut ecc_anomaly = m + 0.85 * e * m.sin().signum();
    let mut iterations = 0;
    let mut converged = false;

    while iterations < options.max_iterations {
        iterations += 1;
        let f = ecc_anomaly - e * ecc_anomaly.sin() - m;
        let f_prime = 1.0 - e * ecc_anomaly.cos();
        if f_prime.abs() < f64::EPSILON {
            break;
        }

        let delta = f / f_prime;
        ecc_anomaly -= delta;

        if delta.abs() < options.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            mean_anomaly,
            eccentricity = e,
            iterations,
            "Kepler solver did not converge"
        );
    }

    KeplerSolution {
        eccentric_anomaly: ecc_anomaly + turns * TAU,
        iterations,
        converged,
    }
}

/// Eccentric anomaly E for mean anomaly M, see [`solve_kepler`].
pub fn solve_kepler_equation(mean_anomaly: f64, eccentricity: f64, options: &KeplerOptions) -> f64 {
    solve_kepler(mean_anomaly, eccentricity, options).eccentric_anomaly
}

/// True anomaly ν from eccentric anomaly E, wrapped to [0, 2π).
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity.clamp(0.0, MAX_ECCENTRICITY);
    let half = 0.5 * eccentric_anomaly;
    let nu = 2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos());
    wrap_angle(nu)
}

/// Eccentric anomaly E from true anomaly ν, wrapped to [0, 2π).
pub fn true_to_eccentric_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity.clamp(0.0, MAX_ECCENTRICITY);
    let half = 0.5 * true_anomaly;
    let ecc = 2.0 * ((1.0 - e).sqrt() * half.sin()).atan2((1.0 + e).sqrt() * half.cos());
    wrap_angle(ecc)
}

pub fn mean_to_true_anomaly(mean_anomaly: f64, eccentricity: f64, options: &KeplerOptions) -> f64 {
    let ecc_anomaly = solve_kepler_equation(mean_anomaly, eccentricity, options);
    eccentric_to_true_anomaly(ecc_anomaly, eccentricity)
}

/// Mean anomaly M from true anomaly ν, wrapped to [0, 2π).
pub fn true_to_mean_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity.clamp(0.0, MAX_ECCENTRICITY);
    let ecc_anomaly = true_to_eccentric_anomaly(true_anomaly, e);
    wrap_angle(ecc_anomaly - e * ecc_anomaly.sin())
}
