use serde::{Deserialize, Serialize};
use tables::StellarClass;

use crate::error::{Result, SpecError};
use crate::rng::SeededRng;
use crate::spec::StarOverrides;

/// Request for a main-sequence star.
///
/// Without a class the star's class is drawn by local abundance (so most
/// stars are M dwarfs); without a sub-type one is drawn uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSpec {
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_class: Option<StellarClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub overrides: StarOverrides,
}

impl StarSpec {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            stellar_class: None,
            subtype: None,
            name: None,
            overrides: StarOverrides::default(),
        }
    }

    /// A star of the given class.
    pub fn of_class(seed: u64, stellar_class: StellarClass) -> Self {
        Self::new(seed).with_class(stellar_class)
    }

    /// Solar analogue: G2 with the Sun's mass, luminosity and temperature.
    pub fn sun_like(seed: u64) -> Self {
        Self {
            stellar_class: Some(StellarClass::G),
            subtype: Some(2),
            overrides: StarOverrides {
                mass_solar: Some(1.0),
                luminosity_solar: Some(1.0),
                temperature_k: Some(5772.0),
                age_years: Some(4.6e9),
                ..StarOverrides::default()
            },
            ..Self::new(seed)
        }
    }

    pub fn with_class(mut self, stellar_class: StellarClass) -> Self {
        self.stellar_class = Some(stellar_class);
        self
    }

    pub fn with_subtype(mut self, subtype: u8) -> Result<Self> {
        if subtype > 9 {
            return Err(SpecError::InvalidSubtype(subtype));
        }
        self.subtype = Some(subtype);
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_overrides(mut self, overrides: StarOverrides) -> Result<Self> {
        overrides.validate()?;
        self.overrides = overrides;
        Ok(self)
    }

    /// Re-check a spec built by hand or deserialized.
    pub fn validate(&self) -> Result<()> {
        if let Some(subtype) = self.subtype
            && subtype > 9
        {
            return Err(SpecError::InvalidSubtype(subtype));
        }
        self.overrides.validate()
    }

    /// Fresh generator seeded from this spec.
    pub fn rng(&self) -> SeededRng {
        SeededRng::new(self.seed)
    }
}
