//! Solid-surface properties and their optional terrain, liquid and ice layers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::composition::Composition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    Rocky,
    Regolith,
    Volcanic,
    Desert,
    Oceanic,
    Icy,
    Metallic,
    Carbonaceous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IceType {
    Water,
    CarbonDioxide,
    Nitrogen,
    Methane,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProps {
    pub temperature_k: f64,
    pub albedo: f64,
    /// 0 = geologically dead, 1 = Io-like
    pub volcanism_level: f64,
    pub surface_type: SurfaceType,
    /// Surface material mass fractions
    pub materials: Composition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<TerrainProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrosphere: Option<HydrosphereProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cryosphere: Option<CryosphereProps>,
}

impl SurfaceProps {
    pub fn has_terrain(&self) -> bool {
        self.terrain.is_some()
    }

    pub fn has_hydrosphere(&self) -> bool {
        self.hydrosphere.is_some()
    }

    pub fn has_cryosphere(&self) -> bool {
        self.cryosphere.is_some()
    }
}

/// Relief and surface-shaping processes. Everything except the elevation
/// range is a 0–1 index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainProps {
    /// Lowest basin to highest peak (m)
    pub elevation_range_m: f64,
    pub roughness: f64,
    pub crater_density: f64,
    pub tectonic_activity: f64,
    pub erosion_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrosphereProps {
    pub ocean_coverage: f64,
    pub ice_coverage: f64,
    pub mean_depth_m: f64,
    /// Parts per thousand (Earth ≈ 35)
    pub salinity_ppt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryosphereProps {
    pub polar_cap_coverage: f64,
    pub permafrost_depth_m: f64,
    pub subsurface_ocean: bool,
    /// Depth of the ocean's top below the surface, 0 without an ocean
    pub subsurface_ocean_depth_m: f64,
    pub cryovolcanism_level: f64,
    pub ice_type: IceType,
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SurfaceType::Rocky => "Rocky",
            SurfaceType::Regolith => "Regolith",
            SurfaceType::Volcanic => "Volcanic",
            SurfaceType::Desert => "Desert",
            SurfaceType::Oceanic => "Oceanic",
            SurfaceType::Icy => "Icy",
            SurfaceType::Metallic => "Metallic",
            SurfaceType::Carbonaceous => "Carbonaceous",
        };
        write!(f, "{}", str)
    }
}
