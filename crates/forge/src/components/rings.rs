//! Planetary ring systems.
//!
//! Rings live between just above the cloud tops or surface and the fluid
//! Roche limit for the ring material; inside that limit debris cannot
//! accrete into moons.

use std::f64::consts::PI;

use celestial::composition::{self, Composition};
use celestial::{RingBand, RingSystemProps};
use tables::{SizeCategory, ValueRange, relations};

use crate::rng::SeededRng;
use crate::sampling::sample_log_uniform;

/// Innermost ring edge as a multiple of the body radius
pub const RING_INNER_LIMIT: f64 = 1.1;

pub const MAX_RING_BANDS: i64 = 5;

const ICE_PARTICLE_DENSITY: f64 = 900.0;
const ROCK_PARTICLE_DENSITY: f64 = 2_500.0;

/// Water ice survives in rings below this temperature (K)
const ICY_RING_TEMPERATURE_K: f64 = 150.0;

const OPTICAL_DEPTH: ValueRange = ValueRange::new(0.01, 2.0);
const PARTICLE_SIZE_M: ValueRange = ValueRange::new(0.01, 10.0);

fn ring_composition(icy: bool, rng: &mut SeededRng) -> Composition {
    if icy {
        let ice = rng.uniform_range(0.85, 0.99);
        composition::from_weights([("water_ice", ice), ("silicate", 1.0 - ice)])
    } else {
        let rock = rng.uniform_range(0.7, 0.9);
        composition::from_weights([("silicate", rock), ("carbon_compounds", 1.0 - rock)])
    }
}

/// Surface mass density of a band, Σ = (4/3)·ρ·s·τ.
fn surface_density(particle_density: f64, band: &RingBand) -> f64 {
    4.0 / 3.0 * particle_density * band.particle_size_m * band.optical_depth
}

/// Rings around a body of `radius_m` and bulk `density`, or `None`.
///
/// Presence is rolled against the size category unless overridden. Bands
/// are drawn as sorted boundary pairs between 1.1 R and the Roche limit, so
/// they come out ordered and disjoint.
pub fn generate_rings(
    category: SizeCategory,
    radius_m: f64,
    density: f64,
    temperature_k: f64,
    overridden: Option<bool>,
    rng: &mut SeededRng,
) -> Option<RingSystemProps> {
    let present = match overridden {
        Some(present) => present,
        None => rng.chance(category.data().ring_probability),
    };
    if !present || !(radius_m > 0.0) {
        return None;
    }

    let icy = temperature_k < ICY_RING_TEMPERATURE_K;
    let particle_density = if icy {
        ICE_PARTICLE_DENSITY
    } else {
        ROCK_PARTICLE_DENSITY
    };
    let inner = RING_INNER_LIMIT * radius_m;
    let outer = relations::roche_limit(radius_m, density, particle_density);
    if outer <= inner {
        return None;
    }

    let count = rng.int_range(1, MAX_RING_BANDS) as usize;
    let mut edges: Vec<f64> = (0..2 * count).map(|_| rng.uniform_range(inner, outer)).collect();
    edges.sort_by(f64::total_cmp);
    let mut spans: Vec<(f64, f64)> = edges
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .filter(|(lo, hi)| hi > lo)
        .collect();
    if spans.is_empty() {
        spans.push((inner, outer));
    }

    let bands: Vec<RingBand> = spans
        .into_iter()
        .map(|(inner_radius_m, outer_radius_m)| RingBand {
            inner_radius_m,
            outer_radius_m,
            optical_depth: sample_log_uniform(rng, &OPTICAL_DEPTH),
            particle_size_m: sample_log_uniform(rng, &PARTICLE_SIZE_M),
            composition: ring_composition(icy, rng),
        })
        .collect();

    let total_mass_kg = bands
        .iter()
        .map(|band| {
            let area = PI * (band.outer_radius_m.powi(2) - band.inner_radius_m.powi(2));
            area * surface_density(particle_density, band)
        })
        .sum();

    Some(RingSystemProps { total_mass_kg, bands })
}
