//! Main-sequence stellar properties drawn from the spectral class table.
//!
//! A class and sub-type pick a row and a tenth of it; a uniform jitter then
//! places the star anywhere inside that tenth, so sub-type 0 covers the
//! hottest 10% of the class and sub-type 9 the coolest. Radius follows from
//! L and T through Stefan–Boltzmann so the three stay consistent.

use celestial::StellarProps;
use tables::constants::{SOLAR_LUMINOSITY_W, SOLAR_MASS_KG, SOLAR_RADIUS_M, UNIVERSE_AGE_YEARS};
use tables::{StellarClass, SUBRANKS, interpolate_fraction, relations};

use crate::rng::SeededRng;
use crate::sampling::{sample_metallicity, sample_weighted};
use crate::spec::StarSpec;

/// Stars are drawn between these fractions of their main-sequence lifetime
const MIN_AGE_FRACTION: f64 = 0.05;
const MAX_AGE_FRACTION: f64 = 0.95;

/// Stellar draw plus the bulk quantities the physical component needs.
#[derive(Debug, Clone, PartialEq)]
pub struct StarDraw {
    pub stellar: StellarProps,
    pub mass_kg: f64,
    pub radius_m: f64,
}

/// Spectral class: spec, else the temperature override's class, else by abundance.
pub fn select_class(spec: &StarSpec, rng: &mut SeededRng) -> StellarClass {
    if let Some(class) = spec.stellar_class {
        return class;
    }
    if let Some(temperature) = spec.overrides.temperature_k {
        return StellarClass::from_temperature(temperature);
    }
    let weights: Vec<f64> = StellarClass::ALL.iter().map(|c| c.data().abundance).collect();
    StellarClass::ALL[sample_weighted(rng, &weights)]
}

/// Sub-type 0–9 within `class`.
pub fn select_subtype(spec: &StarSpec, class: StellarClass, rng: &mut SeededRng) -> u8 {
    if let Some(subtype) = spec.subtype {
        return subtype.min(SUBRANKS - 1);
    }
    if let Some(temperature) = spec.overrides.temperature_k {
        return class.subrank_for_temperature(temperature);
    }
    rng.int_range(0, i64::from(SUBRANKS) - 1) as u8
}

/// Age in years, a random fraction of the star's lifetime capped at the
/// age of the universe.
pub fn sample_age(mass_solar: f64, rng: &mut SeededRng) -> f64 {
    let lifetime = relations::main_sequence_lifetime_years(mass_solar);
    let ceiling = if lifetime > 0.0 {
        lifetime.min(UNIVERSE_AGE_YEARS)
    } else {
        UNIVERSE_AGE_YEARS
    };
    ceiling * rng.uniform_range(MIN_AGE_FRACTION, MAX_AGE_FRACTION)
}

pub fn generate_stellar(spec: &StarSpec, rng: &mut SeededRng) -> StarDraw {
    let overrides = &spec.overrides;
    let stellar_class = select_class(spec, rng);
    let subtype = select_subtype(spec, stellar_class, rng);
    let data = stellar_class.data();

    let position = (f64::from(subtype) + rng.uniform()) / f64::from(SUBRANKS);

    let mass_solar = overrides
        .mass_solar
        .unwrap_or_else(|| interpolate_fraction(&data.mass_solar, position));
    let temperature_k = overrides
        .temperature_k
        .unwrap_or_else(|| interpolate_fraction(&data.temperature_k, position));
    let luminosity_solar = overrides
        .luminosity_solar
        .unwrap_or_else(|| interpolate_fraction(&data.luminosity_solar, position));
    let radius_solar = overrides.radius_solar.unwrap_or_else(|| {
        relations::radius_from_luminosity_temperature(luminosity_solar, temperature_k)
    });

    let metallicity = match overrides.metallicity {
        Some(z) => z,
        None => sample_metallicity(rng),
    };
    let age_years = match overrides.age_years {
        Some(age) => age,
        None => sample_age(mass_solar, rng),
    };

    StarDraw {
        stellar: StellarProps {
            luminosity_watts: luminosity_solar * SOLAR_LUMINOSITY_W,
            effective_temperature_k: temperature_k,
            metallicity,
            age_years,
            stellar_class,
            subtype,
        },
        mass_kg: mass_solar * SOLAR_MASS_KG,
        radius_m: radius_solar * SOLAR_RADIUS_M,
    }
}

/// Rotation period of the Sun today (s)
const SOLAR_ROTATION_S: f64 = 25.4 * 86_400.0;

/// Sidereal rotation period in seconds.
///
/// Cool stars with convective envelopes spin down by magnetic braking,
/// P ∝ √age (Skumanich 1972); hot stars keep their birth spin.
pub fn sample_rotation_period(
    stellar_class: StellarClass,
    age_years: f64,
    overridden: Option<f64>,
    rng: &mut SeededRng,
) -> f64 {
    if let Some(period) = overridden {
        return period;
    }
    let day = 86_400.0;
    match stellar_class {
        StellarClass::O | StellarClass::B | StellarClass::A => rng.uniform_range(0.5, 3.0) * day,
        StellarClass::F | StellarClass::G | StellarClass::K | StellarClass::M => {
            let braking = (age_years.max(0.0) / 4.6e9).sqrt();
            (SOLAR_ROTATION_S * braking * rng.uniform_range(0.8, 1.2)).clamp(day, 100.0 * day)
        }
    }
}
