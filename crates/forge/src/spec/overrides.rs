use celestial::Composition;
use serde::{Deserialize, Serialize};

use crate::error::{self, Result, SpecError};

/// Fixed values for a star, each replacing one sampled quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_solar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_solar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luminosity_solar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_k: Option<f64>,
    /// Heavy-element mass fraction Z
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metallicity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axial_tilt_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period_s: Option<f64>,
}

impl StarOverrides {
    pub fn validate(&self) -> Result<()> {
        error::optional(self.mass_solar, |v| error::positive("mass_solar", v))?;
        error::optional(self.radius_solar, |v| error::positive("radius_solar", v))?;
        error::optional(self.luminosity_solar, |v| error::positive("luminosity_solar", v))?;
        error::optional(self.temperature_k, |v| error::positive("temperature_k", v))?;
        error::optional(self.metallicity, |v| error::within("metallicity", v, 0.0, 1.0))?;
        error::optional(self.age_years, |v| error::within("age_years", v, 0.0, f64::MAX))?;
        error::optional(self.axial_tilt_deg, |v| error::within("axial_tilt_deg", v, 0.0, 180.0))?;
        error::optional(self.rotation_period_s, |v| error::positive("rotation_period_s", v))?;
        Ok(())
    }
}

/// Atmosphere controls. `present` bypasses both the Jeans-escape gate and
/// the occurrence roll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_pressure_pa: Option<f64>,
    /// Normalized before use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Composition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greenhouse_factor: Option<f64>,
}

impl AtmosphereOverrides {
    pub fn validate(&self) -> Result<()> {
        error::optional(self.surface_pressure_pa, |v| {
            error::within("atmosphere.surface_pressure_pa", v, 0.0, f64::MAX)
        })?;
        error::optional(self.greenhouse_factor, |v| {
            error::within("atmosphere.greenhouse_factor", v, 0.0, f64::MAX)
        })?;
        if let Some(composition) = &self.composition {
            for fraction in composition.values() {
                error::within("atmosphere.composition", *fraction, 0.0, 1.0)?;
            }
            if !composition.values().any(|fraction| *fraction > 0.0) {
                return Err(SpecError::EmptyComposition {
                    field: "atmosphere.composition",
                });
            }
        }
        Ok(())
    }
}

/// Fixed values for a planet, moon or asteroid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axial_tilt_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period_s: Option<f64>,
    /// Replaces the computed radiogenic plus tidal heat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_heat_watts: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi_major_axis_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclination_deg: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub albedo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volcanism_level: Option<f64>,
    /// Force a surface liquid-water ocean on or off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oceans: Option<bool>,
    /// Force a subsurface ocean on or off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsurface_ocean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rings: Option<bool>,

    pub atmosphere: AtmosphereOverrides,
}

impl BodyOverrides {
    pub fn validate(&self) -> Result<()> {
        error::optional(self.mass_kg, |v| error::positive("mass_kg", v))?;
        error::optional(self.radius_m, |v| error::positive("radius_m", v))?;
        error::optional(self.density_kg_m3, |v| error::positive("density_kg_m3", v))?;
        error::optional(self.axial_tilt_deg, |v| error::within("axial_tilt_deg", v, 0.0, 180.0))?;
        error::optional(self.rotation_period_s, |v| error::positive("rotation_period_s", v))?;
        error::optional(self.internal_heat_watts, |v| {
            error::within("internal_heat_watts", v, 0.0, f64::MAX)
        })?;
        error::optional(self.semi_major_axis_m, |v| error::positive("semi_major_axis_m", v))?;
        if let Some(e) = self.eccentricity {
            error::within("eccentricity", e, 0.0, 1.0)?;
            if e >= 1.0 {
                return Err(SpecError::OutOfRange {
                    field: "eccentricity",
                    value: e,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        error::optional(self.inclination_deg, |v| error::within("inclination_deg", v, 0.0, 180.0))?;
        error::optional(self.albedo, |v| error::within("albedo", v, 0.0, 1.0))?;
        error::optional(self.volcanism_level, |v| error::within("volcanism_level", v, 0.0, 1.0))?;
        self.atmosphere.validate()
    }
}
