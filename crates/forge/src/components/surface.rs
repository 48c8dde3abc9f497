//! Solid surfaces: heat-driven activity, terrain, liquid water and ice.

use std::f64::consts::PI;

use celestial::composition::{self, Composition};
use celestial::{CryosphereProps, HydrosphereProps, IceType, SurfaceType, TerrainProps};
use tables::constants::STEFAN_BOLTZMANN;
use tables::{SizeCategory, ValueRange};

use crate::rng::SeededRng;
use crate::spec::AsteroidClass;

// =============================================================================
// Internal activity
// =============================================================================

/// Total internal heat of a maximally volcanic body (Io ≈ 1e14 W)
pub const VOLCANISM_REFERENCE_WATTS: f64 = 1.0e14;

/// Below this total heat no subsurface ocean can stay liquid
pub const SUBSURFACE_OCEAN_MIN_HEAT_WATTS: f64 = 1.0e10;

/// Europa/Enceladus-class heating
pub const SUBSURFACE_OCEAN_HIGH_HEAT_WATTS: f64 = 1.0e12;

const HIGH_HEAT_OCEAN_PROBABILITY: f64 = 0.85;
const MODERATE_HEAT_OCEAN_PROBABILITY: f64 = 0.45;

/// Ocean layer depth (m)
const HIGH_HEAT_OCEAN_DEPTH_M: ValueRange = ValueRange::new(5.0e4, 1.5e5);
const MODERATE_HEAT_OCEAN_DEPTH_M: ValueRange = ValueRange::new(5.0e3, 5.0e4);

/// Volcanism above this makes lava plains the dominant surface
const VOLCANIC_SURFACE_THRESHOLD: f64 = 0.6;

// =============================================================================
// Terrain
// =============================================================================

/// Relief scales as 1/g: Earth (9.8 m/s²) ≈ 20 km, Mars (3.7) ≈ 30 km
const ELEVATION_GRAVITY_SCALE: f64 = 2.0e5;
pub const MIN_ELEVATION_RANGE_M: f64 = 500.0;
pub const MAX_ELEVATION_RANGE_M: f64 = 30_000.0;

/// Pressure below which a body counts as airless for cratering (Pa)
const AIRLESS_PRESSURE_PA: f64 = 100.0;

// =============================================================================
// Water
// =============================================================================

const WATER_FREEZING_K: f64 = 273.0;
const WATER_BOILING_K: f64 = 373.0;
/// Triple-point pressure of water (Pa); liquid needs more than this
const WATER_TRIPLE_POINT_PA: f64 = 611.0;
const OCEAN_PROBABILITY: f64 = 0.6;

/// Heat that drives volcanism, scaled to [0, 1] and jittered.
pub fn volcanism_level(total_heat_watts: f64, overridden: Option<f64>, rng: &mut SeededRng) -> f64 {
    if let Some(level) = overridden {
        return level;
    }
    let base = (total_heat_watts.max(0.0) / VOLCANISM_REFERENCE_WATTS).clamp(0.0, 1.0);
    (base * rng.uniform_range(0.75, 1.25)).clamp(0.0, 1.0)
}

/// Depth of a subsurface ocean, if the body has one.
///
/// Two heat bands: strongly heated bodies usually keep a deep ocean,
/// moderately heated ones sometimes keep a shallower one.
pub fn subsurface_ocean_depth(
    total_heat_watts: f64,
    overridden: Option<bool>,
    rng: &mut SeededRng,
) -> Option<f64> {
    let high = total_heat_watts >= SUBSURFACE_OCEAN_HIGH_HEAT_WATTS;
    let present = match overridden {
        Some(present) => present,
        None if total_heat_watts < SUBSURFACE_OCEAN_MIN_HEAT_WATTS => false,
        None if high => rng.chance(HIGH_HEAT_OCEAN_PROBABILITY),
        None => rng.chance(MODERATE_HEAT_OCEAN_PROBABILITY),
    };
    if !present {
        return None;
    }
    let depths = if high {
        HIGH_HEAT_OCEAN_DEPTH_M
    } else {
        MODERATE_HEAT_OCEAN_DEPTH_M
    };
    Some(rng.uniform_range(depths.min, depths.max))
}

/// Dominant surface type from class, activity and temperature.
pub fn classify_surface(
    category: SizeCategory,
    temperature_k: f64,
    density: f64,
    volcanism: f64,
    asteroid_class: Option<AsteroidClass>,
) -> SurfaceType {
    if let Some(class) = asteroid_class {
        return match class {
            AsteroidClass::Carbonaceous => SurfaceType::Carbonaceous,
            AsteroidClass::Silicaceous => SurfaceType::Regolith,
            AsteroidClass::Metallic => SurfaceType::Metallic,
        };
    }
    if volcanism > VOLCANIC_SURFACE_THRESHOLD {
        return SurfaceType::Volcanic;
    }
    if temperature_k < 150.0 || (temperature_k < WATER_FREEZING_K && density < 2_500.0) {
        return SurfaceType::Icy;
    }
    if category <= SizeCategory::Lunar {
        return SurfaceType::Regolith;
    }
    if temperature_k > WATER_BOILING_K {
        return SurfaceType::Desert;
    }
    SurfaceType::Rocky
}

/// Bond albedo range for a surface type.
pub fn albedo_range(surface_type: SurfaceType) -> ValueRange {
    match surface_type {
        SurfaceType::Rocky => ValueRange::new(0.10, 0.30),
        SurfaceType::Regolith => ValueRange::new(0.07, 0.15),
        SurfaceType::Volcanic => ValueRange::new(0.30, 0.65),
        SurfaceType::Desert => ValueRange::new(0.20, 0.40),
        SurfaceType::Oceanic => ValueRange::new(0.25, 0.35),
        SurfaceType::Icy => ValueRange::new(0.40, 0.90),
        SurfaceType::Metallic => ValueRange::new(0.10, 0.25),
        SurfaceType::Carbonaceous => ValueRange::new(0.03, 0.10),
    }
}

pub fn sample_albedo(surface_type: SurfaceType, overridden: Option<f64>, rng: &mut SeededRng) -> f64 {
    if let Some(albedo) = overridden {
        return albedo;
    }
    let range = albedo_range(surface_type);
    rng.uniform_range(range.min, range.max)
}

/// Surface temperature from greenhouse-warmed irradiation plus internal heat
/// flux: T⁴ = T_gh⁴ + q/σ with q = heat / (4πR²).
pub fn surface_temperature(greenhouse_temperature_k: f64, internal_heat_watts: f64, radius_m: f64) -> f64 {
    let irradiated = greenhouse_temperature_k.max(0.0).powi(4);
    let flux = if radius_m > 0.0 {
        internal_heat_watts.max(0.0) / (4.0 * PI * radius_m * radius_m)
    } else {
        0.0
    };
    (irradiated + flux / STEFAN_BOLTZMANN).powf(0.25)
}

pub fn generate_terrain(
    surface_gravity: f64,
    volcanism: f64,
    surface_pressure_pa: f64,
    ocean_coverage: f64,
    rng: &mut SeededRng,
) -> TerrainProps {
    let relief = if surface_gravity > 0.0 {
        ELEVATION_GRAVITY_SCALE / surface_gravity * rng.uniform_range(0.5, 1.5)
    } else {
        rng.uniform();
        MAX_ELEVATION_RANGE_M
    };
    let elevation_range_m = relief.clamp(MIN_ELEVATION_RANGE_M, MAX_ELEVATION_RANGE_M);

    let cratering = if surface_pressure_pa < AIRLESS_PRESSURE_PA {
        rng.uniform_range(0.6, 1.0)
    } else {
        rng.uniform_range(0.05, 0.4)
    };
    let crater_density = (cratering * (1.0 - 0.7 * volcanism) * (1.0 - 0.5 * ocean_coverage)).clamp(0.0, 1.0);

    let tectonic_activity = (volcanism * rng.uniform_range(0.7, 1.3)).clamp(0.0, 1.0);

    let air = (surface_pressure_pa.max(0.0) / 1.0e5).min(1.0);
    let erosion_level = ((0.6 * air + 0.4 * ocean_coverage) * rng.uniform_range(0.8, 1.2)).clamp(0.0, 1.0);

    let roughness = (0.3 + 0.4 * crater_density + 0.3 * tectonic_activity - 0.4 * erosion_level)
        .clamp(0.0, 1.0);

    TerrainProps {
        elevation_range_m,
        roughness,
        crater_density,
        tectonic_activity,
        erosion_level,
    }
}

/// Surface liquid water.
///
/// Needs a temperature between freezing and boiling and an atmosphere above
/// the triple-point pressure; even then oceans are not guaranteed.
pub fn generate_hydrosphere(
    temperature_k: f64,
    surface_pressure_pa: Option<f64>,
    overridden: Option<bool>,
    rng: &mut SeededRng,
) -> Option<HydrosphereProps> {
    let present = match overridden {
        Some(present) => present,
        None => {
            let liquid = (WATER_FREEZING_K..=WATER_BOILING_K).contains(&temperature_k)
                && surface_pressure_pa.is_some_and(|p| p > WATER_TRIPLE_POINT_PA);
            liquid && rng.chance(OCEAN_PROBABILITY)
        }
    };
    if !present {
        return None;
    }

    let ocean_coverage = rng.uniform_range(0.1, 0.9);
    let coldness = ((300.0 - temperature_k) / 60.0).clamp(0.0, 1.0);
    let ice_coverage = (coldness * rng.uniform_range(0.2, 0.6)).min(1.0 - ocean_coverage);
    Some(HydrosphereProps {
        ocean_coverage,
        ice_coverage,
        mean_depth_m: rng.uniform_range(1_000.0, 5_000.0),
        salinity_ppt: rng.uniform_range(5.0, 45.0),
    })
}

/// Dominant ice at a given surface temperature.
pub fn classify_ice(temperature_k: f64, atmosphere: Option<&Composition>) -> IceType {
    let fraction = |gas: &str| atmosphere.and_then(|c| c.get(gas).copied()).unwrap_or(0.0);
    if temperature_k < 50.0 {
        IceType::Nitrogen
    } else if temperature_k < 90.0 {
        if fraction("CH4") >= 0.05 {
            IceType::Methane
        } else {
            IceType::Mixed
        }
    } else if temperature_k < 220.0
        && atmosphere.and_then(composition::dominant).is_some_and(|(gas, _)| gas == "CO2")
    {
        IceType::CarbonDioxide
    } else {
        IceType::Water
    }
}

/// Frozen volatiles, present on cold bodies, bodies with sea ice, and
/// bodies hiding a subsurface ocean.
pub fn generate_cryosphere(
    temperature_k: f64,
    hydrosphere: Option<&HydrosphereProps>,
    subsurface_ocean_depth_m: Option<f64>,
    volcanism: f64,
    atmosphere: Option<&Composition>,
    rng: &mut SeededRng,
) -> Option<CryosphereProps> {
    let sea_ice = hydrosphere.map_or(0.0, |h| h.ice_coverage);
    let frozen = temperature_k < WATER_FREEZING_K;
    if !frozen && sea_ice <= 0.0 && subsurface_ocean_depth_m.is_none() {
        return None;
    }

    let polar_cap_coverage = if temperature_k < 150.0 {
        rng.uniform_range(0.6, 1.0)
    } else if frozen {
        rng.uniform_range(0.02, 0.3)
    } else {
        sea_ice
    };
    let permafrost_depth_m = if frozen {
        (WATER_FREEZING_K - temperature_k) * rng.uniform_range(5.0, 20.0)
    } else {
        0.0
    };
    let ocean_bonus = if subsurface_ocean_depth_m.is_some() { 0.2 } else { 0.0 };
    let cryovolcanism_level = if frozen {
        (volcanism * rng.uniform_range(0.5, 1.5) + ocean_bonus).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Some(CryosphereProps {
        polar_cap_coverage,
        permafrost_depth_m,
        subsurface_ocean: subsurface_ocean_depth_m.is_some(),
        subsurface_ocean_depth_m: subsurface_ocean_depth_m.unwrap_or(0.0),
        cryovolcanism_level,
        ice_type: classify_ice(temperature_k, atmosphere),
    })
}

/// Material fraction ranges per surface type.
fn material_ranges(surface_type: SurfaceType) -> &'static [(&'static str, f64, f64)] {
    match surface_type {
        SurfaceType::Rocky => &[
            ("silicate", 0.45, 0.60),
            ("feldspar", 0.15, 0.25),
            ("iron_oxide", 0.10, 0.20),
            ("basalt", 0.05, 0.15),
        ],
        SurfaceType::Regolith => &[
            ("silicate", 0.40, 0.50),
            ("plagioclase", 0.20, 0.30),
            ("pyroxene", 0.10, 0.20),
            ("ilmenite", 0.02, 0.08),
        ],
        SurfaceType::Volcanic => &[
            ("basalt", 0.40, 0.60),
            ("sulfur", 0.10, 0.30),
            ("silicate", 0.10, 0.20),
            ("iron_sulfide", 0.02, 0.06),
        ],
        SurfaceType::Desert => &[
            ("silicate", 0.50, 0.70),
            ("iron_oxide", 0.15, 0.30),
            ("carbonate", 0.02, 0.10),
        ],
        SurfaceType::Oceanic => &[
            ("water", 0.30, 0.50),
            ("silicate", 0.30, 0.50),
            ("basalt", 0.10, 0.20),
        ],
        SurfaceType::Icy => &[
            ("water_ice", 0.50, 0.80),
            ("silicate", 0.10, 0.30),
            ("tholin", 0.01, 0.05),
            ("ammonia_ice", 0.0, 0.05),
        ],
        SurfaceType::Metallic => &[
            ("iron_nickel", 0.60, 0.85),
            ("silicate", 0.10, 0.30),
            ("troilite", 0.02, 0.08),
        ],
        SurfaceType::Carbonaceous => &[
            ("phyllosilicate", 0.40, 0.60),
            ("carbon_compounds", 0.05, 0.15),
            ("magnetite", 0.05, 0.10),
            ("water_ice", 0.0, 0.15),
        ],
    }
}

/// Normalized material mix for a surface type.
pub fn sample_materials(surface_type: SurfaceType, rng: &mut SeededRng) -> Composition {
    let weights: Vec<(&str, f64)> = material_ranges(surface_type)
        .iter()
        .map(|(name, lo, hi)| (*name, rng.uniform_range(*lo, *hi)))
        .collect();
    composition::from_weights(weights)
}
