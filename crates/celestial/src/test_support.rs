use chrono::{TimeZone, Utc};

use crate::atmosphere::AtmosphereProps;
use crate::body::{BodyType, CelestialBody};
use crate::composition::from_weights;
use crate::orbit::OrbitalProps;
use crate::physical::PhysicalProps;
use crate::provenance::Provenance;
use crate::rings::{RingBand, RingSystemProps};
use crate::surface::{HydrosphereProps, SurfaceProps, SurfaceType, TerrainProps};

pub(crate) fn earth_physical() -> PhysicalProps {
    PhysicalProps {
        mass_kg: 5.972e24,
        radius_m: 6.371e6,
        axial_tilt_deg: 23.44,
        oblateness: 0.00335,
        internal_heat_watts: 4.7e13,
        rotation_period_s: 86_164.1,
        tidally_locked: false,
    }
}

/// An Earth analogue carrying every component a planet can have.
pub(crate) fn earth_like() -> CelestialBody {
    let created_at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    CelestialBody::new("planet-0001", "Terra", BodyType::Planet)
        .with_physical(earth_physical())
        .with_orbital(OrbitalProps {
            semi_major_axis_m: 1.496e11,
            eccentricity: 0.0167,
            inclination_deg: 0.0,
            longitude_ascending_node_deg: 348.7,
            argument_periapsis_deg: 114.2,
            mean_anomaly_deg: 358.6,
            orbital_period_s: 3.1558e7,
            parent_id: Some("star-0001".to_string()),
        })
        .with_surface(SurfaceProps {
            temperature_k: 288.0,
            albedo: 0.306,
            volcanism_level: 0.3,
            surface_type: SurfaceType::Oceanic,
            materials: from_weights([("silicate", 0.7), ("iron_oxide", 0.2), ("water", 0.1)]),
            terrain: Some(TerrainProps {
                elevation_range_m: 19_800.0,
                roughness: 0.5,
                crater_density: 0.05,
                tectonic_activity: 0.7,
                erosion_level: 0.8,
            }),
            hydrosphere: Some(HydrosphereProps {
                ocean_coverage: 0.71,
                ice_coverage: 0.1,
                mean_depth_m: 3_682.0,
                salinity_ppt: 35.0,
            }),
            cryosphere: None,
        })
        .with_atmosphere(AtmosphereProps {
            surface_pressure_pa: 101_325.0,
            scale_height_m: 8_500.0,
            composition: from_weights([("N2", 0.7808), ("O2", 0.2095), ("Ar", 0.0093), ("CO2", 0.0004)]),
            greenhouse_factor: 0.83,
        })
        .with_ring_system(RingSystemProps {
            total_mass_kg: 1.0e15,
            bands: vec![
                RingBand {
                    inner_radius_m: 7.0e6,
                    outer_radius_m: 8.0e6,
                    optical_depth: 0.1,
                    particle_size_m: 0.5,
                    composition: from_weights([("water_ice", 1.0)]),
                },
                RingBand {
                    inner_radius_m: 8.5e6,
                    outer_radius_m: 9.0e6,
                    optical_depth: 0.05,
                    particle_size_m: 0.1,
                    composition: from_weights([("water_ice", 0.9), ("silicate", 0.1)]),
                },
            ],
        })
        .with_provenance(Provenance::new(42, "0.3.0", created_at))
}
