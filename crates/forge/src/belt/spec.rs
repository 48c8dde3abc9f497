use celestial::{BodyType, CelestialBody};
use serde::{Deserialize, Serialize};
use tables::constants::AU_M;

use crate::error::{self, Result, SpecError};

/// Most resonance gaps a belt spec may carry
pub const MAX_BELT_GAPS: usize = 8;

/// A cleared annulus, e.g. a Kirkwood gap at a mean-motion resonance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeltGap {
    pub center_au: f64,
    pub half_width_au: f64,
}

impl BeltGap {
    pub fn new(center_au: f64, half_width_au: f64) -> Result<Self> {
        error::positive("gap.center_au", center_au)?;
        error::positive("gap.half_width_au", half_width_au)?;
        Ok(Self {
            center_au,
            half_width_au,
        })
    }

    pub fn contains(&self, radius_au: f64) -> bool {
        (radius_au - self.center_au).abs() < self.half_width_au
    }
}

/// Longitude clumping, e.g. Trojan swarms or collisional families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularClustering {
    pub cluster_count: usize,
    /// Chance that an asteroid belongs to a cluster rather than the uniform background
    pub cluster_fraction: f64,
    /// von Mises concentration κ
    pub concentration: f64,
}

impl AngularClustering {
    pub fn new(cluster_count: usize, cluster_fraction: f64, concentration: f64) -> Result<Self> {
        let clustering = Self {
            cluster_count,
            cluster_fraction,
            concentration,
        };
        clustering.validate()?;
        Ok(clustering)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cluster_count == 0 {
            return Err(SpecError::ZeroCount {
                field: "clustering.cluster_count",
            });
        }
        error::within("clustering.cluster_fraction", self.cluster_fraction, 0.0, 1.0)?;
        error::positive("clustering.concentration", self.concentration)?;
        Ok(())
    }
}

/// A named body placed at exact elements inside the belt. Angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorBodyInput {
    pub body_id: String,
    pub body_type: BodyType,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_ascending_node_deg: f64,
    pub argument_periapsis_deg: f64,
    pub mean_anomaly_deg: f64,
    pub radius_m: f64,
}

impl MajorBodyInput {
    /// Take elements and radius from a generated body.
    ///
    /// `None` if the body has no orbit or no physical component.
    pub fn from_body(body: &CelestialBody) -> Option<Self> {
        let orbit = body.orbital.as_ref()?;
        let physical = body.physical.as_ref()?;
        Some(Self {
            body_id: body.id.clone(),
            body_type: body.body_type,
            semi_major_axis_au: orbit.semi_major_axis_m / AU_M,
            eccentricity: orbit.eccentricity,
            inclination_deg: orbit.inclination_deg,
            longitude_ascending_node_deg: orbit.longitude_ascending_node_deg,
            argument_periapsis_deg: orbit.argument_periapsis_deg,
            mean_anomaly_deg: orbit.mean_anomaly_deg,
            radius_m: physical.radius_m,
        })
    }

    pub fn validate(&self) -> Result<()> {
        error::positive("major.semi_major_axis_au", self.semi_major_axis_au)?;
        error::finite("major.eccentricity", self.eccentricity)?;
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(SpecError::OutOfRange {
                field: "major.eccentricity",
                value: self.eccentricity,
                min: 0.0,
                max: 1.0,
            });
        }
        error::within("major.inclination_deg", self.inclination_deg, 0.0, 180.0)?;
        error::finite("major.longitude_ascending_node_deg", self.longitude_ascending_node_deg)?;
        error::finite("major.argument_periapsis_deg", self.argument_periapsis_deg)?;
        error::finite("major.mean_anomaly_deg", self.mean_anomaly_deg)?;
        error::positive("major.radius_m", self.radius_m)?;
        Ok(())
    }
}

/// Request for a belt population.
///
/// Built with [`BeltFieldSpec::new`] and the checked `with_*` methods so a
/// malformed belt is rejected before any sampling happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltFieldSpec {
    pub inner_radius_au: f64,
    pub outer_radius_au: f64,
    /// Background asteroids, not counting majors
    pub asteroid_count: usize,
    pub max_inclination_deg: f64,
    pub max_eccentricity: f64,
    /// α in p(r) ∝ r^(−α)
    pub size_power_law_exponent: f64,
    pub min_radius_m: f64,
    pub max_radius_m: f64,
    /// c in the radial density t^c (1 − t)^c; 0 is uniform
    pub radial_concentration: f64,
    #[serde(default)]
    pub gaps: Vec<BeltGap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clustering: Option<AngularClustering>,
    #[serde(default)]
    pub major_bodies: Vec<MajorBodyInput>,
}

impl BeltFieldSpec {
    /// A belt with main-belt defaults: i ≤ 20°, e ≤ 0.3, collisional size
    /// exponent 3.5 between 500 m and 50 km, concentration 2.
    pub fn new(inner_radius_au: f64, outer_radius_au: f64, asteroid_count: usize) -> Result<Self> {
        let spec = Self {
            inner_radius_au,
            outer_radius_au,
            asteroid_count,
            max_inclination_deg: 20.0,
            max_eccentricity: 0.3,
            size_power_law_exponent: 3.5,
            min_radius_m: 500.0,
            max_radius_m: 5.0e4,
            radial_concentration: 2.0,
            gaps: Vec::new(),
            clustering: None,
            major_bodies: Vec::new(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// The solar system's main belt, 2.1–3.3 AU, with the 3:1, 5:2 and
    /// 7:3 Kirkwood gaps.
    pub fn main_belt(asteroid_count: usize) -> Result<Self> {
        Self::new(2.1, 3.3, asteroid_count)?.with_gaps(vec![
            BeltGap::new(2.502, 0.02)?,
            BeltGap::new(2.825, 0.015)?,
            BeltGap::new(2.958, 0.01)?,
        ])
    }

    pub fn with_orbit_limits(mut self, max_eccentricity: f64, max_inclination_deg: f64) -> Result<Self> {
        self.max_eccentricity = max_eccentricity;
        self.max_inclination_deg = max_inclination_deg;
        self.validate()?;
        Ok(self)
    }

    pub fn with_size_distribution(mut self, min_radius_m: f64, max_radius_m: f64, exponent: f64) -> Result<Self> {
        self.min_radius_m = min_radius_m;
        self.max_radius_m = max_radius_m;
        self.size_power_law_exponent = exponent;
        self.validate()?;
        Ok(self)
    }

    pub fn with_radial_concentration(mut self, concentration: f64) -> Result<Self> {
        self.radial_concentration = concentration;
        self.validate()?;
        Ok(self)
    }

    pub fn with_gaps(mut self, gaps: Vec<BeltGap>) -> Result<Self> {
        self.gaps = gaps;
        self.validate()?;
        Ok(self)
    }

    pub fn with_clustering(mut self, clustering: AngularClustering) -> Result<Self> {
        self.clustering = Some(clustering);
        self.validate()?;
        Ok(self)
    }

    pub fn with_major_bodies(mut self, major_bodies: Vec<MajorBodyInput>) -> Result<Self> {
        self.major_bodies = major_bodies;
        self.validate()?;
        Ok(self)
    }

    pub fn width_au(&self) -> f64 {
        self.outer_radius_au - self.inner_radius_au
    }

    pub fn midpoint_au(&self) -> f64 {
        0.5 * (self.inner_radius_au + self.outer_radius_au)
    }

    pub fn validate(&self) -> Result<()> {
        error::positive("inner_radius_au", self.inner_radius_au)?;
        error::ordered("radius_au", self.inner_radius_au, self.outer_radius_au)?;
        error::within("max_inclination_deg", self.max_inclination_deg, 0.0, 180.0)?;
        error::finite("max_eccentricity", self.max_eccentricity)?;
        if !(0.0..1.0).contains(&self.max_eccentricity) {
            return Err(SpecError::OutOfRange {
                field: "max_eccentricity",
                value: self.max_eccentricity,
                min: 0.0,
                max: 1.0,
            });
        }
        error::finite("size_power_law_exponent", self.size_power_law_exponent)?;
        error::positive("min_radius_m", self.min_radius_m)?;
        error::positive("max_radius_m", self.max_radius_m)?;
        if self.max_radius_m < self.min_radius_m {
            return Err(SpecError::InvertedRange {
                field: "radius_m",
                min: self.min_radius_m,
                max: self.max_radius_m,
            });
        }
        error::within("radial_concentration", self.radial_concentration, 0.0, f64::MAX)?;

        if self.gaps.len() > MAX_BELT_GAPS {
            return Err(SpecError::TooManyGaps {
                count: self.gaps.len(),
                max: MAX_BELT_GAPS,
            });
        }
        for gap in &self.gaps {
            error::positive("gap.center_au", gap.center_au)?;
            error::positive("gap.half_width_au", gap.half_width_au)?;
        }
        if let Some(clustering) = &self.clustering {
            clustering.validate()?;
        }
        for major in &self.major_bodies {
            major.validate()?;
        }
        Ok(())
    }
}
