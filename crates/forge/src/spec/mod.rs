//! Generation requests.
//!
//! A spec is plain data: a seed, optional category selectors and a typed
//! set of overrides. Anything left `None` is sampled; anything set is used
//! verbatim and bypasses the corresponding random draw. Builders validate
//! their input so malformed requests fail here rather than deep inside
//! generation.

mod asteroid;
mod moon;
mod overrides;
mod planet;
mod star;

pub use asteroid::{AsteroidClass, AsteroidSpec};
pub use moon::MoonSpec;
pub use overrides::{AtmosphereOverrides, BodyOverrides, StarOverrides};
pub use planet::PlanetSpec;
pub use star::StarSpec;
