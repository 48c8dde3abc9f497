use serde::{Deserialize, Serialize};

use crate::composition::Composition;

/// One annulus of a ring system, radii measured from the body's centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingBand {
    pub inner_radius_m: f64,
    pub outer_radius_m: f64,
    pub optical_depth: f64,
    /// Characteristic particle radius (m)
    pub particle_size_m: f64,
    pub composition: Composition,
}

impl RingBand {
    pub fn width(&self) -> f64 {
        self.outer_radius_m - self.inner_radius_m
    }

    pub fn overlaps(&self, other: &RingBand) -> bool {
        self.inner_radius_m < other.outer_radius_m && other.inner_radius_m < self.outer_radius_m
    }
}

/// Bands are ordered innermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSystemProps {
    pub total_mass_kg: f64,
    pub bands: Vec<RingBand>,
}

impl RingSystemProps {
    pub fn inner_edge_m(&self) -> Option<f64> {
        self.bands.first().map(|band| band.inner_radius_m)
    }

    pub fn outer_edge_m(&self) -> Option<f64> {
        self.bands.last().map(|band| band.outer_radius_m)
    }
}
