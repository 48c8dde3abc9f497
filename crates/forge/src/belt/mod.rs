//! Asteroid belt populations.
//!
//! A belt is generated as a flat list of orbital elements and positions
//! rather than full bodies: majors are placed from explicit elements, the
//! background is sampled statistically.

mod field;
mod spec;

pub use field::{BeltAsteroidData, BeltFieldData, generate_field, in_gap, radial_density};
pub use spec::{AngularClustering, BeltFieldSpec, BeltGap, MAX_BELT_GAPS, MajorBodyInput};

#[cfg(test)]
mod field_test;
