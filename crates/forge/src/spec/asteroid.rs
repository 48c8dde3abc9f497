use std::fmt;

use serde::{Deserialize, Serialize};
use tables::constants::AU_M;
use tables::{SizeCategory, ValueRange};

use crate::error::Result;
use crate::rng::SeededRng;
use crate::spec::BodyOverrides;

/// Broad Tholen/SMASS spectral groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidClass {
    /// C-type: primitive, dark, hydrated
    Carbonaceous,
    /// S-type: stony silicates
    Silicaceous,
    /// M-type: metallic iron-nickel
    Metallic,
}

impl AsteroidClass {
    pub const ALL: [AsteroidClass; 3] = [
        AsteroidClass::Carbonaceous,
        AsteroidClass::Silicaceous,
        AsteroidClass::Metallic,
    ];

    /// Bulk density range (kg/m³).
    pub fn density_kg_m3(&self) -> ValueRange {
        match self {
            AsteroidClass::Carbonaceous => ValueRange::new(1300.0, 2500.0),
            AsteroidClass::Silicaceous => ValueRange::new(2000.0, 3500.0),
            AsteroidClass::Metallic => ValueRange::new(4500.0, 7500.0),
        }
    }

    /// Geometric albedo range.
    pub fn albedo(&self) -> ValueRange {
        match self {
            AsteroidClass::Carbonaceous => ValueRange::new(0.03, 0.10),
            AsteroidClass::Silicaceous => ValueRange::new(0.10, 0.30),
            AsteroidClass::Metallic => ValueRange::new(0.10, 0.25),
        }
    }

    /// Relative abundance in the main belt.
    pub fn abundance(&self) -> f64 {
        match self {
            AsteroidClass::Carbonaceous => 0.75,
            AsteroidClass::Silicaceous => 0.17,
            AsteroidClass::Metallic => 0.08,
        }
    }
}

impl fmt::Display for AsteroidClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            AsteroidClass::Carbonaceous => "C-type",
            AsteroidClass::Silicaceous => "S-type",
            AsteroidClass::Metallic => "M-type",
        };
        write!(f, "{}", str)
    }
}

/// Request for a minor body on a heliocentric orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSpec {
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<AsteroidClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_category: Option<SizeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub overrides: BodyOverrides,
}

impl AsteroidSpec {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            class: None,
            size_category: None,
            name: None,
            overrides: BodyOverrides::default(),
        }
    }

    pub fn of_class(seed: u64, class: AsteroidClass) -> Self {
        Self {
            class: Some(class),
            ..Self::new(seed)
        }
    }

    pub fn carbonaceous(seed: u64) -> Self {
        Self::of_class(seed, AsteroidClass::Carbonaceous)
    }

    pub fn silicaceous(seed: u64) -> Self {
        Self::of_class(seed, AsteroidClass::Silicaceous)
    }

    pub fn metallic(seed: u64) -> Self {
        Self::of_class(seed, AsteroidClass::Metallic)
    }

    /// Ceres analogue: the belt's one dwarf planet.
    pub fn ceres_like(seed: u64) -> Self {
        Self {
            class: Some(AsteroidClass::Carbonaceous),
            size_category: Some(SizeCategory::Dwarf),
            overrides: BodyOverrides {
                mass_kg: Some(9.39e20),
                radius_m: Some(4.73e5),
                semi_major_axis_m: Some(2.767 * AU_M),
                eccentricity: Some(0.0758),
                inclination_deg: Some(10.59),
                ..BodyOverrides::default()
            },
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
