use approx::assert_relative_eq;

use crate::atmosphere::*;
use crate::composition::{Composition, from_weights};

#[test]
fn test_earth_mean_molecular_mass() {
    let air = from_weights([("N2", 0.7808), ("O2", 0.2095), ("Ar", 0.0093), ("CO2", 0.0004)]);
    assert_relative_eq!(mean_molecular_mass(&air), 28.97, max_relative = 0.002);
}

#[test]
fn test_unknown_gases_are_ignored() {
    let mixture = from_weights([("H2", 0.5), ("unobtainium", 0.5)]);
    assert_relative_eq!(mean_molecular_mass(&mixture), 2.016);
    assert_relative_eq!(mean_molecular_mass(&Composition::new()), 28.97);
}

#[test]
fn test_molar_mass_lookup() {
    assert_eq!(molar_mass("CO2"), Some(44.01));
    assert_eq!(molar_mass("Xe"), None);
}

#[test]
fn test_greenhouse_warming() {
    // Earth: 255 K equilibrium, τ ≈ 0.83 gives ~288 K
    let t = greenhouse_temperature(255.0, 0.83);
    assert!((t - 288.0).abs() < 3.0, "surface temperature {}", t);
    assert_eq!(greenhouse_temperature(255.0, 0.0), 255.0);
    assert_eq!(greenhouse_temperature(255.0, -4.0), 255.0);
}

#[test]
fn test_atmosphere_surface_temperature() {
    let atmosphere = AtmosphereProps {
        surface_pressure_pa: 9.2e6,
        scale_height_m: 15_900.0,
        composition: from_weights([("CO2", 0.965), ("N2", 0.035)]),
        greenhouse_factor: 100.0,
    };
    assert!(atmosphere.surface_temperature(232.0) > 600.0);
    assert_relative_eq!(atmosphere.composition_total(), 1.0, epsilon = 1e-12);
}
