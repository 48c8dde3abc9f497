//! Component generators.
//!
//! Each function draws one property component (or one gate decision) from
//! upstream values and the caller's RNG. An override from the spec always
//! wins and skips the draw it replaces.

pub mod atmosphere;
pub mod orbit;
pub mod physical;
pub mod rings;
pub mod stellar;
pub mod surface;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod orbit_test;
#[cfg(test)]
mod physical_test;
#[cfg(test)]
mod surface_test;
