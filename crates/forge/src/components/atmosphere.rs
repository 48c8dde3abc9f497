//! Atmosphere retention, composition, pressure and greenhouse strength.

use celestial::AtmosphereProps;
use celestial::atmosphere::mean_molecular_mass;
use celestial::composition::{self, Composition};
use tables::{SizeCategory, ValueRange, relations};

use crate::rng::SeededRng;
use crate::sampling::sample_log_uniform;
use crate::spec::AtmosphereOverrides;

/// Molecular mass of the gas tested for retention (N₂, amu)
pub const REFERENCE_GAS_AMU: f64 = 28.0;

/// Jeans parameter v_esc / v_th above which N₂ survives for billions of years
pub const JEANS_RETENTION_THRESHOLD: f64 = 6.0;

/// Below this equilibrium temperature a small body's air is N₂/CH₄ (Titan, Triton)
pub const COLD_REGIME_K: f64 = 200.0;

/// Above this, carbonate weathering fails and CO₂ dominates (Venus)
pub const HOT_REGIME_K: f64 = 450.0;

/// Band where water vapour is abundant enough to add to the greenhouse
const WATER_VAPOUR_BAND_K: ValueRange = ValueRange::new(260.0, 400.0);

const PASCALS_PER_BAR: f64 = 1.0e5;

/// Whether the body holds onto an atmosphere.
///
/// The physical gate compares escape velocity with the thermal velocity of
/// N₂ at the equilibrium temperature; bodies that pass are then kept with
/// the size category's probability. `present` skips both.
pub fn retains_atmosphere(
    category: SizeCategory,
    escape_velocity: f64,
    equilibrium_temperature_k: f64,
    overrides: &AtmosphereOverrides,
    rng: &mut SeededRng,
) -> bool {
    if let Some(present) = overrides.present {
        return present;
    }
    let thermal = relations::thermal_velocity(equilibrium_temperature_k, REFERENCE_GAS_AMU);
    if relations::jeans_parameter(escape_velocity, thermal) <= JEANS_RETENTION_THRESHOLD {
        return false;
    }
    rng.chance(category.data().atmosphere_probability)
}

/// Gas mix for the body's temperature regime, normalized to 1.
pub fn generate_composition(
    category: SizeCategory,
    equilibrium_temperature_k: f64,
    rng: &mut SeededRng,
) -> Composition {
    if category.is_giant() {
        let hydrogen = rng.uniform_range(0.82, 0.90);
        let methane = match category {
            SizeCategory::IceGiant => rng.uniform_range(0.01, 0.03),
            _ => rng.uniform_range(0.001, 0.004),
        };
        let helium = (1.0 - hydrogen - methane).max(0.0);
        return composition::from_weights([("H2", hydrogen), ("He", helium), ("CH4", methane)]);
    }

    if equilibrium_temperature_k < COLD_REGIME_K {
        let nitrogen = rng.uniform_range(0.90, 0.98);
        let argon = rng.uniform_range(0.0, 0.005);
        let methane = (1.0 - nitrogen - argon).max(0.0);
        return composition::from_weights([("N2", nitrogen), ("Ar", argon), ("CH4", methane)]);
    }

    if equilibrium_temperature_k > HOT_REGIME_K {
        let carbon_dioxide = rng.uniform_range(0.90, 0.97);
        let rest = 1.0 - carbon_dioxide;
        return composition::from_weights([
            ("CO2", carbon_dioxide),
            ("N2", 0.9 * rest),
            ("SO2", 0.1 * rest),
        ]);
    }

    let nitrogen = rng.uniform_range(0.65, 0.80);
    let oxygen = rng.uniform_range(0.15, 0.25);
    let argon = rng.uniform_range(0.005, 0.012);
    let carbon_dioxide = rng.uniform_range(0.0003, 0.01);
    composition::from_weights([
        ("N2", nitrogen),
        ("O2", oxygen),
        ("Ar", argon),
        ("CO2", carbon_dioxide),
    ])
}

/// Surface pressure range (Pa) by size category.
///
/// Giants have no surface; their reference level is the 1 bar isobar.
pub fn pressure_range(category: SizeCategory) -> ValueRange {
    match category {
        SizeCategory::Tiny => ValueRange::new(1.0e-3, 1.0),
        SizeCategory::Dwarf => ValueRange::new(1.0e-1, 1.0e3),
        SizeCategory::Lunar => ValueRange::new(1.0e2, 2.0e5),
        SizeCategory::Terrestrial => ValueRange::new(1.0e3, 1.0e7),
        SizeCategory::SuperEarth => ValueRange::new(1.0e4, 5.0e7),
        SizeCategory::IceGiant | SizeCategory::GasGiant => {
            ValueRange::new(PASCALS_PER_BAR, PASCALS_PER_BAR)
        }
    }
}

/// Grey infrared optical depth from greenhouse gas partial pressures.
///
/// CO₂ adds linearly, CH₄ with the square root of its partial pressure, and
/// water vapour only in the liquid-water temperature band.
pub fn greenhouse_optical_depth(
    composition: &Composition,
    surface_pressure_pa: f64,
    equilibrium_temperature_k: f64,
    giant: bool,
) -> f64 {
    let bars = surface_pressure_pa.max(0.0) / PASCALS_PER_BAR;
    let partial = |gas: &str| composition.get(gas).copied().unwrap_or(0.0).max(0.0) * bars;

    let carbon_dioxide = 1.5 * partial("CO2");
    let methane = 3.5 * partial("CH4").sqrt();
    let water = if !giant && WATER_VAPOUR_BAND_K.contains(equilibrium_temperature_k) {
        0.8 * bars.sqrt()
    } else {
        0.0
    };
    carbon_dioxide + methane + water
}

pub fn generate_atmosphere(
    category: SizeCategory,
    equilibrium_temperature_k: f64,
    surface_gravity: f64,
    overrides: &AtmosphereOverrides,
    rng: &mut SeededRng,
) -> AtmosphereProps {
    let composition = match &overrides.composition {
        Some(fixed) => {
            let mut fixed = fixed.clone();
            composition::normalize(&mut fixed);
            fixed
        }
        None => generate_composition(category, equilibrium_temperature_k, rng),
    };
    let surface_pressure_pa = match overrides.surface_pressure_pa {
        Some(pressure) => pressure,
        None => sample_log_uniform(rng, &pressure_range(category)),
    };
    let scale_height_m = relations::scale_height(
        equilibrium_temperature_k,
        mean_molecular_mass(&composition),
        surface_gravity,
    );
    let greenhouse_factor = match overrides.greenhouse_factor {
        Some(tau) => tau,
        None => greenhouse_optical_depth(
            &composition,
            surface_pressure_pa,
            equilibrium_temperature_k,
            category.is_giant(),
        ),
    };

    AtmosphereProps {
        surface_pressure_pa,
        scale_height_m,
        composition,
        greenhouse_factor,
    }
}
