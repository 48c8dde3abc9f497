//! The aggregate celestial body.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::atmosphere::AtmosphereProps;
use crate::orbit::OrbitalProps;
use crate::physical::PhysicalProps;
use crate::provenance::Provenance;
use crate::rings::RingSystemProps;
use crate::stellar::StellarProps;
use crate::surface::SurfaceProps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyType {
    Star,
    Planet,
    Moon,
    Asteroid,
}

/// A generated body: identity plus zero-or-one of each property component.
///
/// Components are plain optional fields; use the `has_*` predicates or
/// match on the `Option` directly. Nothing here enforces physical
/// consistency, see [`crate::validation::validate_body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<PhysicalProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar: Option<StellarProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital: Option<OrbitalProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<AtmosphereProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_system: Option<RingSystemProps>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl CelestialBody {
    /// A body with identity only and no components.
    pub fn new(id: impl Into<String>, name: impl Into<String>, body_type: BodyType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body_type,
            physical: None,
            stellar: None,
            orbital: None,
            surface: None,
            atmosphere: None,
            ring_system: None,
            provenance: None,
        }
    }

    pub fn with_physical(mut self, physical: PhysicalProps) -> Self {
        self.physical = Some(physical);
        self
    }

    pub fn with_stellar(mut self, stellar: StellarProps) -> Self {
        self.stellar = Some(stellar);
        self
    }

    pub fn with_orbital(mut self, orbital: OrbitalProps) -> Self {
        self.orbital = Some(orbital);
        self
    }

    pub fn with_surface(mut self, surface: SurfaceProps) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: AtmosphereProps) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    pub fn with_ring_system(mut self, ring_system: RingSystemProps) -> Self {
        self.ring_system = Some(ring_system);
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    pub fn has_physical(&self) -> bool {
        self.physical.is_some()
    }

    pub fn has_stellar(&self) -> bool {
        self.stellar.is_some()
    }

    pub fn has_orbital(&self) -> bool {
        self.orbital.is_some()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn has_atmosphere(&self) -> bool {
        self.atmosphere.is_some()
    }

    pub fn has_ring_system(&self) -> bool {
        self.ring_system.is_some()
    }

    pub fn has_provenance(&self) -> bool {
        self.provenance.is_some()
    }

    pub fn is_star(&self) -> bool {
        self.body_type == BodyType::Star
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BodyType::Star => "Star",
            BodyType::Planet => "Planet",
            BodyType::Moon => "Moon",
            BodyType::Asteroid => "Asteroid",
        };
        write!(f, "{}", str)
    }
}
