use serde::{Deserialize, Serialize};
use tables::StellarClass;
use tables::constants::SOLAR_LUMINOSITY_W;

/// Properties only meaningful on stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarProps {
    pub luminosity_watts: f64,
    pub effective_temperature_k: f64,
    /// Heavy-element mass fraction Z (solar ≈ 0.0134)
    pub metallicity: f64,
    pub age_years: f64,
    pub stellar_class: StellarClass,
    /// Sub-type 0–9 within the class, 0 hottest
    pub subtype: u8,
}

impl StellarProps {
    pub fn luminosity_solar(&self) -> f64 {
        self.luminosity_watts / SOLAR_LUMINOSITY_W
    }

    /// Harvard spectral type, e.g. "G2V".
    pub fn spectral_type(&self) -> String {
        format!("{}{}V", self.stellar_class, self.subtype.min(9))
    }
}
