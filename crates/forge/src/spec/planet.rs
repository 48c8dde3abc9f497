use serde::{Deserialize, Serialize};
use tables::{OrbitZone, SizeCategory};

use crate::error::Result;
use crate::rng::SeededRng;
use crate::spec::BodyOverrides;

/// Request for a planet orbiting the star in the parent context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSpec {
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_category: Option<SizeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_zone: Option<OrbitZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub overrides: BodyOverrides,
}

impl PlanetSpec {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            size_category: None,
            orbit_zone: None,
            name: None,
            overrides: BodyOverrides::default(),
        }
    }

    /// Planet of a given size in a given zone.
    pub fn of(seed: u64, size_category: SizeCategory, orbit_zone: OrbitZone) -> Self {
        Self {
            size_category: Some(size_category),
            orbit_zone: Some(orbit_zone),
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
