use approx::assert_relative_eq;
use tables::SizeCategory;
use tables::constants::{EARTH_MASS_KG, EARTH_RADIUS_M, JUPITER_MASS_KG};

use crate::components::physical::*;
use crate::rng::SeededRng;
use crate::spec::BodyOverrides;

#[test]
fn test_bulk_stays_in_category() {
    let mut rng = SeededRng::new(42);
    for category in SizeCategory::ALL {
        let data = category.data();
        for _ in 0..50 {
            let bulk = sample_bulk(category, None, &BodyOverrides::default(), &mut rng);
            assert!(data.mass_kg.contains(bulk.mass_kg), "{} mass {}", category, bulk.mass_kg);
            assert!(data.radius_m.contains(bulk.radius_m), "{} radius {}", category, bulk.radius_m);
        }
    }
}

#[test]
fn test_bulk_overrides_win() {
    let mut rng = SeededRng::new(1);
    let overrides = BodyOverrides {
        mass_kg: Some(EARTH_MASS_KG),
        radius_m: Some(EARTH_RADIUS_M),
        ..BodyOverrides::default()
    };
    let bulk = sample_bulk(SizeCategory::Tiny, None, &overrides, &mut rng);
    assert_eq!(bulk.mass_kg, EARTH_MASS_KG);
    assert_eq!(bulk.radius_m, EARTH_RADIUS_M);
}

#[test]
fn test_radius_override_derives_mass() {
    let mut rng = SeededRng::new(1);
    let overrides = BodyOverrides {
        radius_m: Some(EARTH_RADIUS_M),
        density_kg_m3: Some(5514.0),
        ..BodyOverrides::default()
    };
    let bulk = sample_bulk(SizeCategory::Terrestrial, None, &overrides, &mut rng);
    assert_relative_eq!(bulk.mass_kg, EARTH_MASS_KG, max_relative = 0.01);
    assert_relative_eq!(bulk.density(), 5514.0, max_relative = 1e-9);
}

#[test]
fn test_locked_bodies_spin_with_their_orbit() {
    let mut rng = SeededRng::new(3);
    let period = sample_rotation_period(&mut rng, SizeCategory::Lunar, true, 2.36e6, None);
    assert_eq!(period, 2.36e6);
    let tilt = sample_axial_tilt(&mut rng, true, None);
    assert!((0.0..3.0).contains(&tilt));
}

#[test]
fn test_rotation_override() {
    let mut rng = SeededRng::new(3);
    assert_eq!(sample_rotation_period(&mut rng, SizeCategory::GasGiant, true, 1.0e7, Some(3.6e4)), 3.6e4);
    assert_eq!(sample_axial_tilt(&mut rng, false, Some(23.44)), 23.44);
}

#[test]
fn test_giants_spin_fast() {
    let mut rng = SeededRng::new(8);
    for _ in 0..100 {
        let period = sample_rotation_period(&mut rng, SizeCategory::GasGiant, false, 0.0, None);
        assert!((8.0 * 3600.0..18.0 * 3600.0).contains(&period));
    }
}

#[test]
fn test_oblateness_of_earth_and_jupiter() {
    // Homogeneous-fluid estimate; Earth's real flattening is 1/298
    let earth = oblateness(EARTH_MASS_KG, EARTH_RADIUS_M, 86_164.0);
    assert!(earth > 0.003 && earth < 0.006, "Earth {}", earth);
    let jupiter = oblateness(JUPITER_MASS_KG, 6.9911e7, 35_730.0);
    assert!(jupiter > 0.06 && jupiter < 0.15, "Jupiter {}", jupiter);
    assert_eq!(oblateness(0.0, EARTH_RADIUS_M, 86_164.0), 0.0);
    assert_eq!(oblateness(1.0, 1.0e7, 1.0), 0.5);
}

#[test]
fn test_primordial_heat_calibration() {
    let earth = primordial_heat(EARTH_MASS_KG, 4.6e9, false);
    assert_relative_eq!(earth, EARTH_MASS_KG * 7.9e-12, max_relative = 1e-9);
    let jupiter = primordial_heat(JUPITER_MASS_KG, 4.6e9, true);
    assert!(jupiter > 1.0e17 && jupiter < 1.0e18, "Jupiter {}", jupiter);
    // Younger bodies run hotter
    assert!(primordial_heat(EARTH_MASS_KG, 1.0e9, false) > earth);
    assert_eq!(primordial_heat(-1.0, 4.6e9, false), 0.0);
}

#[test]
fn test_assemble_clamps_heat() {
    let bulk = Bulk {
        mass_kg: EARTH_MASS_KG,
        radius_m: EARTH_RADIUS_M,
    };
    let props = assemble(bulk, 23.0, 86_164.0, false, -5.0);
    assert_eq!(props.internal_heat_watts, 0.0);
    assert!(props.oblateness > 0.0);
}
