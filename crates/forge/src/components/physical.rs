//! Mass, radius, spin and internal heat.

use std::f64::consts::PI;

use celestial::PhysicalProps;
use tables::constants::G;
use tables::relations;
use tables::{SizeCategory, ValueRange};

use crate::rng::SeededRng;
use crate::sampling::sample_log_uniform;
use crate::spec::BodyOverrides;

const HOUR_S: f64 = 3600.0;

/// Radiogenic heat per kilogram of rock today (W/kg), Earth calibrated
const ROCKY_SPECIFIC_HEAT: f64 = 7.9e-12;

/// Contraction heat per kilogram of a 4.6 Gyr gas giant (W/kg), Jupiter calibrated
const GIANT_SPECIFIC_HEAT: f64 = 1.77e-10;

/// Age the specific heats above are calibrated at
const REFERENCE_AGE_YEARS: f64 = 4.6e9;

/// e-folding time of the mixed radiogenic inventory (years)
const RADIOGENIC_DECAY_YEARS: f64 = 3.5e9;

/// Oblateness of a homogeneous rotating fluid body, f = (5/4)·ω²R³/GM,
/// is capped here (beyond this the body would be a Jacobi ellipsoid)
const MAX_OBLATENESS: f64 = 0.5;

/// Mass and radius before spin and heat are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bulk {
    pub mass_kg: f64,
    pub radius_m: f64,
}

impl Bulk {
    pub fn density(&self) -> f64 {
        relations::density_from_mass_radius(self.mass_kg, self.radius_m)
    }
}

/// Draw mass and radius for a size category.
///
/// Mass is log-uniform across the category, density uniform across
/// `density` (the category's own range unless the caller narrows it), and
/// radius follows from both, clamped to the category's radius band. Any
/// overridden quantity is used as-is and the others are derived from it.
pub fn sample_bulk(
    category: SizeCategory,
    density: Option<ValueRange>,
    overrides: &BodyOverrides,
    rng: &mut SeededRng,
) -> Bulk {
    let data = category.data();
    let density_range = density.unwrap_or(data.density_kg_m3);
    let density = match overrides.density_kg_m3 {
        Some(value) => value,
        None => rng.uniform_range(density_range.min, density_range.max),
    };

    let mass_kg = match (overrides.mass_kg, overrides.radius_m) {
        (Some(mass), _) => mass,
        (None, Some(radius)) => density * 4.0 / 3.0 * PI * radius.powi(3),
        (None, None) => sample_log_uniform(rng, &data.mass_kg),
    };

    let radius_m = match overrides.radius_m {
        Some(radius) => radius,
        None => {
            let radius = relations::radius_from_mass_density(mass_kg, density);
            if overrides.mass_kg.is_some() && overrides.density_kg_m3.is_some() {
                radius
            } else {
                data.radius_m.clamp(radius)
            }
        }
    };

    Bulk { mass_kg, radius_m }
}

/// Obliquity in degrees. Locked bodies sit near a Cassini state.
pub fn sample_axial_tilt(rng: &mut SeededRng, tidally_locked: bool, overridden: Option<f64>) -> f64 {
    if let Some(tilt) = overridden {
        return tilt;
    }
    if tidally_locked {
        return rng.uniform_range(0.0, 3.0);
    }
    rng.normal(0.0, 20.0).abs().min(180.0)
}

/// Sidereal rotation period in seconds.
///
/// Tidally locked bodies rotate once per orbit.
pub fn sample_rotation_period(
    rng: &mut SeededRng,
    category: SizeCategory,
    tidally_locked: bool,
    orbital_period_s: f64,
    overridden: Option<f64>,
) -> f64 {
    if let Some(period) = overridden {
        return period;
    }
    if tidally_locked && orbital_period_s > 0.0 {
        return orbital_period_s;
    }
    let hours = match category {
        SizeCategory::GasGiant | SizeCategory::IceGiant => rng.uniform_range(8.0, 18.0),
        SizeCategory::Tiny => sample_log_uniform(rng, &ValueRange::new(2.0, 30.0)),
        _ => sample_log_uniform(rng, &ValueRange::new(8.0, 100.0)),
    };
    hours * HOUR_S
}

/// Rotational flattening f = (5/4)·ω²R³/(GM) for a fluid body.
pub fn oblateness(mass_kg: f64, radius_m: f64, rotation_period_s: f64) -> f64 {
    if !(mass_kg > 0.0 && radius_m > 0.0 && rotation_period_s > 0.0) {
        return 0.0;
    }
    let omega = 2.0 * PI / rotation_period_s;
    let flattening = 1.25 * omega * omega * radius_m.powi(3) / (G * mass_kg);
    if flattening.is_finite() {
        flattening.clamp(0.0, MAX_OBLATENESS)
    } else {
        0.0
    }
}

/// Heat from radioactive decay (rocky bodies) or slow contraction (giants), in watts.
pub fn primordial_heat(mass_kg: f64, age_years: f64, giant: bool) -> f64 {
    if !(mass_kg > 0.0) {
        return 0.0;
    }
    let age = if age_years.is_finite() { age_years.max(1.0e7) } else { REFERENCE_AGE_YEARS };
    if giant {
        mass_kg * GIANT_SPECIFIC_HEAT * (age / REFERENCE_AGE_YEARS).powf(-1.3).min(20.0)
    } else {
        let decay = ((REFERENCE_AGE_YEARS - age) / RADIOGENIC_DECAY_YEARS).exp();
        mass_kg * ROCKY_SPECIFIC_HEAT * decay.clamp(0.2, 5.0)
    }
}

/// Assemble the final component once spin and heat are decided.
pub fn assemble(
    bulk: Bulk,
    axial_tilt_deg: f64,
    rotation_period_s: f64,
    tidally_locked: bool,
    internal_heat_watts: f64,
) -> PhysicalProps {
    PhysicalProps {
        mass_kg: bulk.mass_kg,
        radius_m: bulk.radius_m,
        axial_tilt_deg,
        oblateness: oblateness(bulk.mass_kg, bulk.radius_m, rotation_period_s),
        internal_heat_watts: internal_heat_watts.max(0.0),
        rotation_period_s,
        tidally_locked,
    }
}
