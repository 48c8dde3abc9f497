use tables::constants::{AU_M, SECONDS_PER_YEAR};
use tables::{OrbitZone, distance_range};

use crate::components::orbit::*;
use crate::context::{ParentContext, PlanetContext};
use crate::rng::SeededRng;
use crate::spec::BodyOverrides;

#[test]
fn test_planet_orbits_stay_in_zone() {
    let ctx = ParentContext::sun_like();
    let mut rng = SeededRng::new(42);
    for zone in OrbitZone::ALL {
        let range = distance_range(zone, 1.0);
        for _ in 0..100 {
            let orbit = generate_planet_orbit(zone, &ctx, 6.0e24, &BodyOverrides::default(), &mut rng);
            assert!(range.contains(orbit.semi_major_axis_m), "{} a {}", zone, orbit.semi_major_axis_m);
            assert!(orbit.eccentricity >= 0.0 && orbit.eccentricity <= zone.data().max_eccentricity);
            assert!((0.0..=180.0).contains(&orbit.inclination_deg));
            assert!((0.0..360.0).contains(&orbit.mean_anomaly_deg));
        }
    }
}

#[test]
fn test_one_au_orbit_takes_a_year() {
    let ctx = ParentContext::sun_like();
    let overrides = BodyOverrides {
        semi_major_axis_m: Some(AU_M),
        eccentricity: Some(0.0167),
        ..BodyOverrides::default()
    };
    let mut rng = SeededRng::new(1);
    let orbit = generate_planet_orbit(OrbitZone::Temperate, &ctx, 5.972e24, &overrides, &mut rng);
    assert_eq!(orbit.semi_major_axis_m, AU_M);
    assert_eq!(orbit.eccentricity, 0.0167);
    let years = orbit.orbital_period_s / SECONDS_PER_YEAR;
    assert!((years - 1.0).abs() < 0.01, "period {} yr", years);
}

#[test]
fn test_regular_moons_inside_stability_window() {
    let planet = PlanetContext::jupiter_like();
    let star_mass = ParentContext::sun_like().star_mass_kg;
    let window = moon_distance_range(&planet, star_mass, 2_500.0, false);
    assert!(window.min > planet.radius_m);
    let mut rng = SeededRng::new(5);
    for _ in 0..100 {
        let orbit = generate_moon_orbit(&planet, star_mass, 1.0e22, 2_500.0, false, &BodyOverrides::default(), &mut rng);
        assert!(window.contains(orbit.semi_major_axis_m));
        assert!(orbit.eccentricity >= 0.001 && orbit.eccentricity < 0.02);
        assert!(orbit.inclination_deg < 5.0);
    }
}

#[test]
fn test_captured_moons_are_eccentric() {
    let planet = PlanetContext::jupiter_like();
    let mut rng = SeededRng::new(6);
    for _ in 0..100 {
        let orbit = generate_moon_orbit(&planet, 1.989e30, 1.0e18, 1_500.0, true, &BodyOverrides::default(), &mut rng);
        assert!(orbit.eccentricity >= 0.1 && orbit.eccentricity < 0.4);
        assert!((0.0..180.0).contains(&orbit.inclination_deg));
    }
}

#[test]
fn test_moon_parent_id_follows_planet() {
    let planet = PlanetContext {
        id: Some("host".to_string()),
        ..PlanetContext::earth_like()
    };
    let mut rng = SeededRng::new(7);
    let orbit = generate_moon_orbit(&planet, 1.989e30, 7.0e22, 3_300.0, false, &BodyOverrides::default(), &mut rng);
    assert_eq!(orbit.parent_id.as_deref(), Some("host"));
}

#[test]
fn test_asteroids_in_main_belt() {
    let ctx = ParentContext::sun_like();
    let belt = main_belt_range(1.0);
    let mut rng = SeededRng::new(8);
    for _ in 0..200 {
        let orbit = generate_asteroid_orbit(&ctx, 1.0e15, &BodyOverrides::default(), &mut rng);
        assert!(belt.contains(orbit.semi_major_axis_m));
        assert!(orbit.eccentricity <= 0.3);
        assert!(orbit.inclination_deg <= 20.0);
    }
    assert!((main_belt_range(4.0).min / AU_M - 4.2).abs() < 1e-9);
}
