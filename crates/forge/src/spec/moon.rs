use serde::{Deserialize, Serialize};
use tables::SizeCategory;

use crate::error::Result;
use crate::rng::SeededRng;
use crate::spec::{AtmosphereOverrides, BodyOverrides};

/// Request for a satellite of the planet in the parent context.
///
/// Regular moons form in the planet's disk on near-circular, equatorial
/// orbits; captured moons get eccentric, steeply inclined (often
/// retrograde) orbits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonSpec {
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_category: Option<SizeCategory>,
    #[serde(default)]
    pub captured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub overrides: BodyOverrides,
}

impl MoonSpec {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            size_category: None,
            captured: false,
            name: None,
            overrides: BodyOverrides::default(),
        }
    }

    /// Titan analogue: a large icy moon that keeps a thick atmosphere.
    pub fn titan_like(seed: u64) -> Self {
        Self {
            size_category: Some(SizeCategory::Lunar),
            overrides: BodyOverrides {
                mass_kg: Some(1.345e23),
                radius_m: Some(2.575e6),
                semi_major_axis_m: Some(1.2219e9),
                eccentricity: Some(0.0288),
                atmosphere: AtmosphereOverrides {
                    present: Some(true),
                    ..AtmosphereOverrides::default()
                },
                ..BodyOverrides::default()
            },
            ..Self::new(seed)
        }
    }

    /// Europa analogue: tidally heated ice shell over a global ocean.
    pub fn europa_like(seed: u64) -> Self {
        Self {
            size_category: Some(SizeCategory::Lunar),
            overrides: BodyOverrides {
                mass_kg: Some(4.80e22),
                radius_m: Some(1.5608e6),
                semi_major_axis_m: Some(6.709e8),
                eccentricity: Some(0.009),
                albedo: Some(0.67),
                atmosphere: AtmosphereOverrides {
                    present: Some(false),
                    ..AtmosphereOverrides::default()
                },
                ..BodyOverrides::default()
            },
            ..Self::new(seed)
        }
    }

    /// Io analogue: close, eccentric and intensely volcanic.
    pub fn io_like(seed: u64) -> Self {
        Self {
            size_category: Some(SizeCategory::Lunar),
            overrides: BodyOverrides {
                mass_kg: Some(8.93e22),
                radius_m: Some(1.8216e6),
                semi_major_axis_m: Some(4.217e8),
                eccentricity: Some(0.0041),
                ..BodyOverrides::default()
            },
            ..Self::new(seed)
        }
    }

    /// Earth's Moon: airless, cratered, tidally locked.
    pub fn luna_like(seed: u64) -> Self {
        Self {
            size_category: Some(SizeCategory::Lunar),
            overrides: BodyOverrides {
                mass_kg: Some(7.342e22),
                radius_m: Some(1.7374e6),
                semi_major_axis_m: Some(3.844e8),
                eccentricity: Some(0.0549),
                inclination_deg: Some(5.145),
                atmosphere: AtmosphereOverrides {
                    present: Some(false),
                    ..AtmosphereOverrides::default()
                },
                ..BodyOverrides::default()
            },
            ..Self::new(seed)
        }
    }

    /// Small irregular moon captured from a heliocentric orbit.
    pub fn captured(seed: u64) -> Self {
        Self {
            size_category: Some(SizeCategory::Dwarf),
            captured: true,
            ..Self::new(seed)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_overrides(mut self, overrides: BodyOverrides) -> Result<Self> {
        overrides.validate()?;
        self.overrides = overrides;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.overrides.validate()
    }

    pub fn rng(&self) -> SeededRng {
        SeededRng::new(self.seed)
    }
}
