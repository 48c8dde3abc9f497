//! Two-body orbital mechanics for placing bodies on Keplerian orbits.
//!
//! Solves Kepler's equation, converts between mean, eccentric and true
//! anomaly, and turns a set of orbital elements into a 3D Cartesian
//! position. Angles are radians throughout; lengths come back in whatever
//! unit the semi-major axis was given in.

pub mod elements;
pub mod kepler;


pub use elements::{OrbitalElements, mean_motion, orbital_period};
pub use kepler::{
    KeplerOptions, KeplerSolution, eccentric_to_true_anomaly, mean_to_true_anomaly, solve_kepler,
    solve_kepler_equation, true_to_eccentric_anomaly, true_to_mean_anomaly, wrap_angle,
};
