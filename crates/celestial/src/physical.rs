use serde::{Deserialize, Serialize};
use tables::relations;

/// Bulk physical properties shared by every body type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProps {
    pub mass_kg: f64,
    pub radius_m: f64,
    pub axial_tilt_deg: f64,
    /// Polar flattening (R_eq − R_pol) / R_eq, in [0, 1)
    pub oblateness: f64,
    /// Total internal heat flow, radiogenic plus tidal (W)
    pub internal_heat_watts: f64,
    /// Sidereal rotation period (s)
    pub rotation_period_s: f64,
    /// Rotation synchronised with the orbit
    pub tidally_locked: bool,
}

impl PhysicalProps {
    /// Surface gravity (m/s²), 0 for degenerate mass or radius.
    pub fn surface_gravity(&self) -> f64 {
        relations::surface_gravity(self.mass_kg, self.radius_m)
    }

    /// Escape velocity (m/s), 0 for degenerate mass or radius.
    pub fn escape_velocity(&self) -> f64 {
        relations::escape_velocity(self.mass_kg, self.radius_m)
    }

    /// Mean density (kg/m³)
    pub fn density(&self) -> f64 {
        relations::density_from_mass_radius(self.mass_kg, self.radius_m)
    }

    pub fn volume(&self) -> f64 {
        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            return 0.0;
        }
        4.0 / 3.0 * std::f64::consts::PI * self.radius_m.powi(3)
    }
}
