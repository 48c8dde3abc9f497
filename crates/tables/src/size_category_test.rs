use approx::assert_relative_eq;

use crate::constants::{EARTH_MASS_KG, JUPITER_MASS_KG};
use crate::size_category::SizeCategory;

#[test]
fn test_solar_system_bodies() {
    assert_eq!(SizeCategory::from_mass(EARTH_MASS_KG), SizeCategory::Terrestrial);
    assert_eq!(SizeCategory::from_mass(6.417e23), SizeCategory::Terrestrial); // Mars
    assert_eq!(SizeCategory::from_mass(JUPITER_MASS_KG), SizeCategory::GasGiant);
    assert_eq!(SizeCategory::from_mass(1.024e26), SizeCategory::IceGiant); // Neptune
    assert_eq!(SizeCategory::from_mass(1.345e23), SizeCategory::Lunar); // Titan
    assert_eq!(SizeCategory::from_mass(9.39e20), SizeCategory::Dwarf); // Ceres
    assert_eq!(SizeCategory::from_mass(1.0e15), SizeCategory::Tiny);
}

#[test]
fn test_degenerate_mass_is_tiny() {
    assert_eq!(SizeCategory::from_mass(0.0), SizeCategory::Tiny);
    assert_eq!(SizeCategory::from_mass(-5.0), SizeCategory::Tiny);
    assert_eq!(SizeCategory::from_mass(f64::NAN), SizeCategory::Tiny);
}

#[test]
fn test_mass_bands_are_contiguous() {
    for pair in SizeCategory::ALL.windows(2) {
        assert_relative_eq!(pair[0].data().mass_kg.max, pair[1].data().mass_kg.min);
    }
}

#[test]
fn test_giants_have_no_surface() {
    assert!(SizeCategory::GasGiant.is_giant());
    assert!(SizeCategory::IceGiant.is_giant());
    assert!(!SizeCategory::SuperEarth.is_giant());
    assert!(!SizeCategory::Tiny.is_giant());
}

#[test]
fn test_atmosphere_probability_grows_with_size() {
    for pair in SizeCategory::ALL.windows(2) {
        assert!(
            pair[0].data().atmosphere_probability <= pair[1].data().atmosphere_probability,
            "{} should not retain atmospheres more often than {}",
            pair[0],
            pair[1]
        );
    }
}
