use approx::assert_relative_eq;
use celestial::composition::{self, Composition};
use tables::SizeCategory;
use tables::constants::{EARTH_MASS_KG, EARTH_RADIUS_M};
use tables::relations::escape_velocity;

use crate::components::atmosphere::*;
use crate::rng::SeededRng;
use crate::spec::AtmosphereOverrides;

#[test]
fn test_jeans_gate_blocks_small_warm_bodies() {
    let mut rng = SeededRng::new(1);
    let moon_escape = escape_velocity(7.342e22, 1.7374e6);
    for _ in 0..50 {
        assert!(!retains_atmosphere(
            SizeCategory::Lunar,
            moon_escape,
            300.0,
            &AtmosphereOverrides::default(),
            &mut rng
        ));
    }
}

#[test]
fn test_present_override_bypasses_gate() {
    let mut rng = SeededRng::new(1);
    let forced = AtmosphereOverrides {
        present: Some(true),
        ..AtmosphereOverrides::default()
    };
    assert!(retains_atmosphere(SizeCategory::Tiny, 1.0, 1000.0, &forced, &mut rng));

    let stripped = AtmosphereOverrides {
        present: Some(false),
        ..AtmosphereOverrides::default()
    };
    let earth_escape = escape_velocity(EARTH_MASS_KG, EARTH_RADIUS_M);
    assert!(!retains_atmosphere(SizeCategory::GasGiant, earth_escape, 100.0, &stripped, &mut rng));
}

#[test]
fn test_cold_regime_is_nitrogen_methane() {
    let mut rng = SeededRng::new(44);
    for _ in 0..100 {
        let gases = generate_composition(SizeCategory::Lunar, 95.0, &mut rng);
        let nitrogen = gases["N2"];
        assert!((0.90..=0.98).contains(&nitrogen), "N2 {}", nitrogen);
        assert!(gases["CH4"] > 0.0 && gases["CH4"] < 0.1);
        assert!(composition::is_normalized(&gases));
    }
}

#[test]
fn test_regimes_by_temperature() {
    let mut rng = SeededRng::new(2);
    let giant = generate_composition(SizeCategory::GasGiant, 120.0, &mut rng);
    assert_eq!(composition::dominant(&giant).unwrap().0, "H2");
    assert!(giant.contains_key("He"));

    let hot = generate_composition(SizeCategory::Terrestrial, 700.0, &mut rng);
    assert_eq!(composition::dominant(&hot).unwrap().0, "CO2");

    let temperate = generate_composition(SizeCategory::Terrestrial, 280.0, &mut rng);
    assert_eq!(composition::dominant(&temperate).unwrap().0, "N2");
    assert!(temperate.contains_key("O2"));
    assert!(composition::is_normalized(&temperate));
}

#[test]
fn test_earth_greenhouse() {
    let mut gases = Composition::new();
    gases.insert("N2".to_string(), 0.78);
    gases.insert("O2".to_string(), 0.21);
    gases.insert("CO2".to_string(), 0.0004);
    let tau = greenhouse_optical_depth(&gases, 101_325.0, 255.0, false);
    assert!(tau < 0.01, "below the water band only CO2 counts: {}", tau);

    let tau = greenhouse_optical_depth(&gases, 101_325.0, 270.0, false);
    let surface = celestial::atmosphere::greenhouse_temperature(255.0, tau);
    assert!((surface - 288.0).abs() < 8.0, "surface {}", surface);
}

#[test]
fn test_giants_sit_at_one_bar() {
    let range = pressure_range(SizeCategory::IceGiant);
    assert_eq!(range.min, 1.0e5);
    assert_eq!(range.max, 1.0e5);
}

#[test]
fn test_generate_atmosphere_honours_overrides() {
    let mut fixed = Composition::new();
    fixed.insert("CO2".to_string(), 0.6);
    fixed.insert("N2".to_string(), 0.2);
    let overrides = AtmosphereOverrides {
        present: Some(true),
        surface_pressure_pa: Some(9.2e6),
        composition: Some(fixed),
        greenhouse_factor: Some(150.0),
    };
    let mut rng = SeededRng::new(3);
    let atmosphere = generate_atmosphere(SizeCategory::Terrestrial, 230.0, 8.87, &overrides, &mut rng);
    assert_eq!(atmosphere.surface_pressure_pa, 9.2e6);
    assert_eq!(atmosphere.greenhouse_factor, 150.0);
    assert_relative_eq!(atmosphere.composition["CO2"], 0.75);
    assert!(atmosphere.scale_height_m > 0.0);
}

#[test]
fn test_scale_height_from_composition() {
    let mut rng = SeededRng::new(9);
    let atmosphere = generate_atmosphere(
        SizeCategory::Terrestrial,
        288.0,
        9.81,
        &AtmosphereOverrides::default(),
        &mut rng,
    );
    assert!(atmosphere.scale_height_m > 7_000.0 && atmosphere.scale_height_m < 10_000.0);
    assert!(composition::is_normalized(&atmosphere.composition));
}
