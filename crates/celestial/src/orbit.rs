use orbital::OrbitalElements;
use serde::{Deserialize, Serialize};

/// Orbit around a parent body. Angles are stored in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalProps {
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_ascending_node_deg: f64,
    pub argument_periapsis_deg: f64,
    pub mean_anomaly_deg: f64,
    pub orbital_period_s: f64,
    /// Id of the body being orbited, when it is part of the same document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl OrbitalProps {
    /// Bound (elliptic) orbits have e < 1.
    pub fn is_bound(&self) -> bool {
        self.eccentricity >= 0.0 && self.eccentricity < 1.0
    }

    pub fn periapsis_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 + self.eccentricity)
    }

    /// Radian elements for position calculations, solving for the true anomaly.
    pub fn elements(&self, options: &orbital::KeplerOptions) -> OrbitalElements {
        OrbitalElements::from_mean_anomaly(
            self.semi_major_axis_m,
            self.eccentricity,
            self.inclination_deg.to_radians(),
            self.longitude_ascending_node_deg.to_radians(),
            self.argument_periapsis_deg.to_radians(),
            self.mean_anomaly_deg.to_radians(),
            options,
        )
    }
}
