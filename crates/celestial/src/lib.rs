//! Data model for generated celestial bodies.
//!
//! A [`CelestialBody`] is a fixed struct of optional property components.
//! Absence of a component is meaningful (an airless moon has no
//! [`AtmosphereProps`], a planet has no [`StellarProps`]). Bodies carry a
//! [`Provenance`] stamp so persisted documents can be checked against the
//! running schema, and [`validation`] offers an advisory consistency check
//! that never mutates the body.

pub mod atmosphere;
pub mod body;
pub mod composition;
pub mod error;
pub mod orbit;
pub mod physical;
pub mod provenance;
pub mod rings;
pub mod serialization;
pub mod stellar;
pub mod surface;
pub mod validation;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod provenance_test;
#[cfg(test)]
mod test_support;

pub use atmosphere::AtmosphereProps;
pub use body::{BodyType, CelestialBody};
pub use composition::Composition;
pub use error::{Result, SerializationError};
pub use orbit::OrbitalProps;
pub use physical::PhysicalProps;
pub use provenance::{Compatibility, Provenance, SCHEMA_VERSION};
pub use rings::{RingBand, RingSystemProps};
pub use stellar::StellarProps;
pub use surface::{CryosphereProps, HydrosphereProps, IceType, SurfaceProps, SurfaceType, TerrainProps};
pub use validation::{Severity, ValidationIssue, ValidationResult, validate_body};
