//! Deterministic procedural generation of celestial bodies.
//!
//! Every generator takes an explicit [`SeededRng`]; the same spec, context,
//! seed and timestamp always produce the same [`celestial::CelestialBody`].
//!
//! ```
//! use forge::{ParentContext, PlanetSpec, StarSpec, generate_planet, generate_star};
//! use tables::{OrbitZone, SizeCategory};
//!
//! let spec = StarSpec::sun_like(7);
//! let star = generate_star(&spec, &mut spec.rng());
//!
//! let ctx = ParentContext::from_star(&star).unwrap();
//! let spec = PlanetSpec::of(8, SizeCategory::Terrestrial, OrbitZone::Temperate);
//! let planet = generate_planet(&spec, &ctx, &mut spec.rng());
//! assert!(planet.has_orbital());
//! ```

pub mod belt;
pub mod bodies;
pub mod components;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod rng;
pub mod sampling;
pub mod spec;

#[cfg(test)]
mod context_test;
#[cfg(test)]
mod sampling_test;

/// Version stamped into every body's provenance.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use belt::{
    AngularClustering, BeltAsteroidData, BeltFieldData, BeltFieldSpec, BeltGap, MAX_BELT_GAPS,
    MajorBodyInput, generate_field,
};
pub use bodies::{
    generate_asteroid, generate_asteroid_at, generate_moon, generate_moon_at, generate_planet,
    generate_planet_at, generate_star, generate_star_at,
};
pub use context::{ParentContext, PlanetContext};
pub use error::{Result, SpecError};
pub use fixtures::{CorpusDigest, Fixture, FixtureCase, FixtureSpec, build_fixture_corpus, fixture_cases, fixture_epoch};
pub use rng::SeededRng;
pub use spec::{
    AsteroidClass, AsteroidSpec, AtmosphereOverrides, BodyOverrides, MoonSpec, PlanetSpec,
    StarOverrides, StarSpec,
};
