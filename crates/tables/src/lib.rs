//! Physical lookup tables for celestial body generation.
//!
//! Static, immutable range tables keyed by category enums plus the analytic
//! relations that tie mass, radius, luminosity and temperature together.
//! Nothing here allocates or holds state, so tables can be read from any
//! number of concurrent generation calls.

pub mod constants;
pub mod orbit_zone;
pub mod range;
pub mod relations;
pub mod size_category;
pub mod stellar_class;

#[cfg(test)]
mod size_category_test;

pub use orbit_zone::{OrbitZone, OrbitZoneData, distance_range};
pub use range::{SUBRANKS, ValueRange, interpolate, interpolate_fraction};
pub use size_category::{SizeCategory, SizeCategoryData};
pub use stellar_class::{StellarClass, StellarClassData};
