//! Gaseous envelopes.

use serde::{Deserialize, Serialize};

use crate::composition::{self, Composition};

/// Molar masses (g/mol ≡ amu) of the gases the generators emit.
pub const GAS_MOLAR_MASS: [(&str, f64); 11] = [
    ("H2", 2.016),
    ("He", 4.003),
    ("CH4", 16.04),
    ("NH3", 17.031),
    ("H2O", 18.015),
    ("Ne", 20.18),
    ("N2", 28.014),
    ("O2", 31.998),
    ("Ar", 39.948),
    ("CO2", 44.01),
    ("SO2", 64.066),
];

/// Mean molecular mass assumed when a composition has no known gases.
const FALLBACK_MOLECULAR_MASS: f64 = 28.97;

pub fn molar_mass(gas: &str) -> Option<f64> {
    GAS_MOLAR_MASS
        .iter()
        .find(|(name, _)| *name == gas)
        .map(|(_, mass)| *mass)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereProps {
    pub surface_pressure_pa: f64,
    pub scale_height_m: f64,
    /// Gas volume fractions
    pub composition: Composition,
    /// Infrared optical depth τ
    pub greenhouse_factor: f64,
}

impl AtmosphereProps {
    pub fn composition_total(&self) -> f64 {
        composition::total(&self.composition)
    }

    /// Fraction-weighted molecular mass (amu). Unknown gases are skipped.
    pub fn mean_molecular_mass(&self) -> f64 {
        mean_molecular_mass(&self.composition)
    }

    /// Surface temperature under this atmosphere's greenhouse effect.
    pub fn surface_temperature(&self, equilibrium_temperature_k: f64) -> f64 {
        greenhouse_temperature(equilibrium_temperature_k, self.greenhouse_factor)
    }
}

pub fn mean_molecular_mass(composition: &Composition) -> f64 {
    let (weighted, known) = composition
        .iter()
        .filter_map(|(gas, fraction)| molar_mass(gas).map(|mass| (mass * fraction, fraction)))
        .fold((0.0, 0.0), |(sum, total), (weighted, fraction)| {
            (sum + weighted, total + fraction)
        });
    if known <= 0.0 {
        return FALLBACK_MOLECULAR_MASS;
    }
    weighted / known
}

/// Grey-atmosphere surface temperature T = T_eq · (1 + 0.75 τ)^¼.
pub fn greenhouse_temperature(equilibrium_temperature_k: f64, optical_depth: f64) -> f64 {
    equilibrium_temperature_k.max(0.0) * (1.0 + 0.75 * optical_depth.max(0.0)).powf(0.25)
}
