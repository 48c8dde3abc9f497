//! Orbital zones around a host star.
//!
//! Zone edges are defined in AU for a 1 L☉ star and scale with √L, since
//! the incident flux falls off as L/d². The temperate zone matches the
//! conservative habitable zone of Kopparapu et al. (2013).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::AU_M;
use crate::range::ValueRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrbitZone {
    Hot,
    Warm,
    Temperate,
    Cold,
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitZoneData {
    /// Distance range in AU around a 1 L☉ star
    pub base_distance_au: ValueRange,
    /// Upper bound for sampled eccentricities
    pub max_eccentricity: f64,
}

static HOT: OrbitZoneData = OrbitZoneData {
    base_distance_au: ValueRange::new(0.02, 0.5),
    max_eccentricity: 0.05,
};

static WARM: OrbitZoneData = OrbitZoneData {
    base_distance_au: ValueRange::new(0.5, 0.95),
    max_eccentricity: 0.15,
};

static TEMPERATE: OrbitZoneData = OrbitZoneData {
    base_distance_au: ValueRange::new(0.95, 1.67),
    max_eccentricity: 0.2,
};

static COLD: OrbitZoneData = OrbitZoneData {
    base_distance_au: ValueRange::new(1.67, 5.0),
    max_eccentricity: 0.25,
};

static FROZEN: OrbitZoneData = OrbitZoneData {
    base_distance_au: ValueRange::new(5.0, 50.0),
    max_eccentricity: 0.35,
};

/// Luminosity scale factor √L, or 1.0 when the luminosity is unusable.
fn luminosity_scale(luminosity_solar: f64) -> f64 {
    if luminosity_solar.is_finite() && luminosity_solar > 0.0 {
        luminosity_solar.sqrt()
    } else {
        1.0
    }
}

impl OrbitZone {
    pub const ALL: [OrbitZone; 5] = [
        OrbitZone::Hot,
        OrbitZone::Warm,
        OrbitZone::Temperate,
        OrbitZone::Cold,
        OrbitZone::Frozen,
    ];

    pub fn data(&self) -> &'static OrbitZoneData {
        match self {
            OrbitZone::Hot => &HOT,
            OrbitZone::Warm => &WARM,
            OrbitZone::Temperate => &TEMPERATE,
            OrbitZone::Cold => &COLD,
            OrbitZone::Frozen => &FROZEN,
        }
    }

    /// Zone at `distance_m` from a star of the given luminosity.
    ///
    /// Distances inside the hot zone's inner edge are Hot; anything beyond
    /// the frozen zone's outer edge is Frozen.
    pub fn from_distance(distance_m: f64, luminosity_solar: f64) -> Self {
        let distance_au = distance_m / AU_M / luminosity_scale(luminosity_solar);
        Self::ALL
            .iter()
            .find(|zone| distance_au < zone.data().base_distance_au.max)
            .copied()
            .unwrap_or(OrbitZone::Frozen)
    }
}

/// Distance range in metres for `zone` around a star of `luminosity_solar`.
///
/// A non-positive or non-finite luminosity falls back to the solar range.
pub fn distance_range(zone: OrbitZone, luminosity_solar: f64) -> ValueRange {
    let base = zone.data().base_distance_au;
    let scale = luminosity_scale(luminosity_solar) * AU_M;
    ValueRange::new(base.min * scale, base.max * scale)
}

impl fmt::Display for OrbitZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrbitZone::Hot => "Hot",
            OrbitZone::Warm => "Warm",
            OrbitZone::Temperate => "Temperate",
            OrbitZone::Cold => "Cold",
            OrbitZone::Frozen => "Frozen",
        };
        write!(f, "{}", name)
    }
}
