use approx::assert_relative_eq;
use celestial::composition::{self, Composition};
use celestial::{IceType, SurfaceType};
use tables::SizeCategory;

use crate::components::surface::*;
use crate::rng::SeededRng;
use crate::spec::AsteroidClass;

#[test]
fn test_volcanism_tracks_heat() {
    let mut rng = SeededRng::new(1);
    assert_eq!(volcanism_level(0.0, None, &mut rng), 0.0);
    for _ in 0..20 {
        let io = volcanism_level(VOLCANISM_REFERENCE_WATTS, None, &mut rng);
        assert!((0.75..=1.0).contains(&io), "io {}", io);
    }
    let earth = volcanism_level(4.7e13, None, &mut rng);
    assert!(earth > 0.3 && earth < 0.6, "earth {}", earth);

    assert_eq!(volcanism_level(1.0e16, Some(0.1), &mut rng), 0.1);
}

#[test]
fn test_cold_interior_has_no_subsurface_ocean() {
    let mut rng = SeededRng::new(2);
    for _ in 0..50 {
        assert_eq!(subsurface_ocean_depth(1.0e9, None, &mut rng), None);
    }
}

#[test]
fn test_subsurface_ocean_depth_bands() {
    let mut rng = SeededRng::new(3);
    for _ in 0..50 {
        let deep = subsurface_ocean_depth(1.0e13, Some(true), &mut rng).unwrap();
        assert!((5.0e4..=1.5e5).contains(&deep));
        let shallow = subsurface_ocean_depth(1.0e11, Some(true), &mut rng).unwrap();
        assert!((5.0e3..=5.0e4).contains(&shallow));
    }
    assert_eq!(subsurface_ocean_depth(1.0e13, Some(false), &mut rng), None);
}

#[test]
fn test_heavily_heated_bodies_usually_have_oceans() {
    let mut rng = SeededRng::new(4);
    let count = (0..1000)
        .filter(|_| subsurface_ocean_depth(1.0e13, None, &mut rng).is_some())
        .count();
    assert!((780..=920).contains(&count), "count {}", count);
}

#[test]
fn test_classify_surface() {
    assert_eq!(
        classify_surface(SizeCategory::Tiny, 200.0, 2000.0, 0.0, Some(AsteroidClass::Metallic)),
        SurfaceType::Metallic
    );
    assert_eq!(
        classify_surface(SizeCategory::Lunar, 110.0, 3500.0, 0.9, None),
        SurfaceType::Volcanic
    );
    assert_eq!(classify_surface(SizeCategory::Lunar, 100.0, 1900.0, 0.0, None), SurfaceType::Icy);
    assert_eq!(
        classify_surface(SizeCategory::Lunar, 250.0, 3340.0, 0.0, None),
        SurfaceType::Regolith
    );
    assert_eq!(
        classify_surface(SizeCategory::Terrestrial, 700.0, 5200.0, 0.1, None),
        SurfaceType::Desert
    );
    assert_eq!(
        classify_surface(SizeCategory::Terrestrial, 288.0, 5500.0, 0.1, None),
        SurfaceType::Rocky
    );
}

#[test]
fn test_albedo_within_surface_range() {
    let mut rng = SeededRng::new(5);
    for _ in 0..100 {
        let albedo = sample_albedo(SurfaceType::Icy, None, &mut rng);
        assert!(albedo_range(SurfaceType::Icy).contains(albedo));
    }
    assert_eq!(sample_albedo(SurfaceType::Icy, Some(0.67), &mut rng), 0.67);
}

#[test]
fn test_internal_heat_warms_surface() {
    assert_relative_eq!(surface_temperature(255.0, 0.0, 6.371e6), 255.0, epsilon = 1e-9);
    // Io: ~110 K irradiated, 1e14 W over a 1822 km radius
    let io = surface_temperature(110.0, 1.0e14, 1.8216e6);
    assert!(io > 110.0 && io < 130.0, "io {}", io);
}

#[test]
fn test_terrain_on_airless_body_is_cratered() {
    let mut rng = SeededRng::new(6);
    let terrain = generate_terrain(1.62, 0.0, 0.0, 0.0, &mut rng);
    assert!(terrain.crater_density >= 0.6);
    assert_eq!(terrain.erosion_level, 0.0);
    assert!(terrain.elevation_range_m <= MAX_ELEVATION_RANGE_M);
    assert!(terrain.elevation_range_m >= MIN_ELEVATION_RANGE_M);
}

#[test]
fn test_terrain_on_earthlike_body_is_eroded() {
    let mut rng = SeededRng::new(7);
    let terrain = generate_terrain(9.81, 0.3, 101_325.0, 0.7, &mut rng);
    assert!(terrain.crater_density < 0.4);
    assert!(terrain.erosion_level > 0.5);
    assert!(terrain.elevation_range_m > 10_000.0 && terrain.elevation_range_m < 30_001.0);
}

#[test]
fn test_hydrosphere_needs_liquid_conditions() {
    let mut rng = SeededRng::new(8);
    for _ in 0..50 {
        assert!(generate_hydrosphere(200.0, Some(1.0e5), None, &mut rng).is_none());
        assert!(generate_hydrosphere(290.0, None, None, &mut rng).is_none());
        assert!(generate_hydrosphere(290.0, Some(100.0), None, &mut rng).is_none());
    }
}

#[test]
fn test_hydrosphere_coverage_fits() {
    let mut rng = SeededRng::new(9);
    for _ in 0..100 {
        let water = generate_hydrosphere(260.0, Some(1.0e5), Some(true), &mut rng).unwrap();
        assert!(water.ocean_coverage + water.ice_coverage <= 1.0 + 1e-12);
        assert!((1_000.0..=5_000.0).contains(&water.mean_depth_m));
        assert!((5.0..=45.0).contains(&water.salinity_ppt));
    }
}

#[test]
fn test_classify_ice() {
    let titan = composition::from_weights([("N2", 0.94), ("CH4", 0.06)]);
    let mars = composition::from_weights([("CO2", 0.95), ("N2", 0.05)]);
    assert_eq!(classify_ice(40.0, None), IceType::Nitrogen);
    assert_eq!(classify_ice(80.0, Some(&titan)), IceType::Methane);
    assert_eq!(classify_ice(80.0, None), IceType::Mixed);
    assert_eq!(classify_ice(200.0, Some(&mars)), IceType::CarbonDioxide);
    assert_eq!(classify_ice(200.0, None), IceType::Water);
}

#[test]
fn test_warm_dry_body_has_no_cryosphere() {
    let mut rng = SeededRng::new(10);
    assert!(generate_cryosphere(300.0, None, None, 0.0, None, &mut rng).is_none());
}

#[test]
fn test_europa_cryosphere() {
    let mut rng = SeededRng::new(11);
    let ice = generate_cryosphere(100.0, None, Some(1.0e5), 0.1, None, &mut rng).unwrap();
    assert!(ice.subsurface_ocean);
    assert_eq!(ice.subsurface_ocean_depth_m, 1.0e5);
    assert!(ice.polar_cap_coverage >= 0.6);
    assert!(ice.permafrost_depth_m > 0.0);
    assert!(ice.cryovolcanism_level >= 0.2);
    assert_eq!(ice.ice_type, IceType::Water);
}

#[test]
fn test_materials_are_normalized() {
    let mut rng = SeededRng::new(12);
    for surface_type in [SurfaceType::Rocky, SurfaceType::Icy, SurfaceType::Carbonaceous] {
        let materials: Composition = sample_materials(surface_type, &mut rng);
        assert!(composition::is_normalized(&materials));
        assert!(!materials.is_empty());
    }
}
