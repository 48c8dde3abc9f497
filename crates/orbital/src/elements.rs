//! Keplerian orbital elements and their Cartesian position.
//!
//! Positions use the standard perifocal-to-inertial rotation
//! R_z(Ω) · R_x(i) · R_z(ω) applied to the in-plane position
//! (r cos ν, r sin ν, 0), where r = a(1 − e²) / (1 + e cos ν).

use std::f64::consts::TAU;

use nalgebra::{Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use tables::constants::G;

use crate::kepler::{KeplerOptions, mean_to_true_anomaly, true_to_mean_anomaly};

/// Six classical elements describing a body's position on its orbit.
///
/// The semi-major axis may be in any length unit; [`OrbitalElements::position`]
/// returns coordinates in the same unit. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub longitude_ascending_node: f64,
    pub argument_of_periapsis: f64,
    pub true_anomaly: f64,
}

impl OrbitalElements {
    /// Elements for a circular, equatorial orbit at the reference direction.
    pub fn circular(semi_major_axis: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity: 0.0,
            inclination: 0.0,
            longitude_ascending_node: 0.0,
            argument_of_periapsis: 0.0,
            true_anomaly: 0.0,
        }
    }

    /// Build elements from a mean anomaly, solving Kepler's equation for the
    /// true anomaly.
    pub fn from_mean_anomaly(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_ascending_node: f64,
        argument_of_periapsis: f64,
        mean_anomaly: f64,
        options: &KeplerOptions,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_ascending_node,
            argument_of_periapsis,
            true_anomaly: mean_to_true_anomaly(mean_anomaly, eccentricity, options),
        }
    }

    pub fn mean_anomaly(&self) -> f64 {
        true_to_mean_anomaly(self.true_anomaly, self.eccentricity)
    }

    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital radius at the current true anomaly.
    ///
    /// Falls back to the semi-major axis when the conic equation has no
    /// finite positive solution (unbound orbits past their asymptote).
    pub fn radius(&self) -> f64 {
        let e = self.eccentricity;
        let denominator = 1.0 + e * self.true_anomaly.cos();
        let r = self.semi_major_axis * (1.0 - e * e) / denominator;
        if denominator <= 0.0 || !r.is_finite() || r <= 0.0 {
            return self.semi_major_axis;
        }
        r
    }

    /// Rotation taking perifocal coordinates into the reference frame.
    pub fn perifocal_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.longitude_ascending_node)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.argument_of_periapsis)
    }

    /// Cartesian position relative to the central body.
    pub fn position(&self) -> Point3<f64> {
        let r = self.radius();
        let perifocal = Vector3::new(r * self.true_anomaly.cos(), r * self.true_anomaly.sin(), 0.0);
        Point3::from(self.perifocal_rotation() * perifocal)
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Orbital period from Kepler's third law, T = 2π√(a³ / G(M + m)), in seconds.
///
/// Returns 0 for non-positive axis or total mass.
pub fn orbital_period(semi_major_axis_m: f64, central_mass_kg: f64, body_mass_kg: f64) -> f64 {
    let mu = G * (central_mass_kg + body_mass_kg.max(0.0));
    if !positive(semi_major_axis_m) || !positive(mu) {
        return 0.0;
    }
    TAU * (semi_major_axis_m.powi(3) / mu).sqrt()
}

/// Mean motion n = √(GM / a³) in rad/s.
pub fn mean_motion(semi_major_axis_m: f64, central_mass_kg: f64) -> f64 {
    if !positive(semi_major_axis_m) || !positive(central_mass_kg) {
        return 0.0;
    }
    (G * central_mass_kg / semi_major_axis_m.powi(3)).sqrt()
}
