//! Property tests over generated bodies and belts.

use celestial::composition;
use celestial::serialization::{body_from_json, to_json_compact};
use celestial::validate_body;
use forge::belt::in_gap;
use forge::{
    AsteroidSpec, BeltFieldSpec, BeltGap, MoonSpec, ParentContext, PlanetSpec, SeededRng, StarSpec,
    fixture_epoch, generate_asteroid_at, generate_field, generate_moon_at, generate_planet_at,
    generate_star_at,
};
use proptest::prelude::*;

fn check_ranges(body: &celestial::CelestialBody) -> Result<(), TestCaseError> {
    let physical = body.physical.as_ref().unwrap();
    prop_assert!(physical.mass_kg > 0.0);
    prop_assert!(physical.radius_m > 0.0);
    if let Some(atmosphere) = &body.atmosphere {
        let total = composition::total(&atmosphere.composition);
        prop_assert!((0.99..=1.01).contains(&total), "atmosphere sums to {}", total);
    }
    if let Some(rings) = &body.ring_system {
        for band in &rings.bands {
            prop_assert!(band.inner_radius_m < band.outer_radius_m);
            prop_assert!(band.inner_radius_m >= physical.radius_m);
        }
    }
    let result = validate_body(body);
    prop_assert!(result.is_valid(), "{:?}", result.issues);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn star_generation_is_deterministic(seed in any::<u64>()) {
        let spec = StarSpec::new(seed);
        let a = generate_star_at(&spec, &mut spec.rng(), fixture_epoch());
        let b = generate_star_at(&spec, &mut spec.rng(), fixture_epoch());
        prop_assert_eq!(&a, &b);
        check_ranges(&a)?;
    }

    #[test]
    fn planets_satisfy_range_invariants(seed in any::<u64>()) {
        let ctx = ParentContext::sun_like();
        let spec = PlanetSpec::new(seed);
        let planet = generate_planet_at(&spec, &ctx, &mut spec.rng(), fixture_epoch());
        check_ranges(&planet)?;
    }

    #[test]
    fn moons_satisfy_range_invariants(seed in any::<u64>(), captured in any::<bool>()) {
        let ctx = ParentContext::jupiter_like();
        let mut spec = MoonSpec::new(seed);
        spec.captured = captured;
        let moon = generate_moon_at(&spec, &ctx, &mut spec.rng(), fixture_epoch());
        check_ranges(&moon)?;
    }

    #[test]
    fn asteroids_satisfy_range_invariants(seed in any::<u64>()) {
        let ctx = ParentContext::sun_like();
        let spec = AsteroidSpec::new(seed);
        let asteroid = generate_asteroid_at(&spec, &ctx, &mut spec.rng(), fixture_epoch());
        check_ranges(&asteroid)?;
    }

    #[test]
    fn bodies_round_trip_through_json(seed in any::<u64>()) {
        let ctx = ParentContext::earth_like();
        let spec = MoonSpec::new(seed);
        let moon = generate_moon_at(&spec, &ctx, &mut spec.rng(), fixture_epoch());
        let json = to_json_compact(&moon).unwrap();
        let decoded = body_from_json(&json).unwrap();
        prop_assert_eq!(&decoded, &moon);
        prop_assert_eq!(to_json_compact(&decoded).unwrap(), json);
    }

    #[test]
    fn belt_members_stay_in_belt(
        seed in any::<u64>(),
        inner in 0.5f64..5.0,
        width in 0.1f64..3.0,
        count in 0usize..200,
        concentration in 0.0f64..4.0,
    ) {
        let spec = BeltFieldSpec::new(inner, inner + width, count)
            .unwrap()
            .with_radial_concentration(concentration)
            .unwrap();
        let field = generate_field(&spec, &mut SeededRng::new(seed));
        prop_assert_eq!(field.asteroids.len(), count);
        for asteroid in &field.asteroids {
            let elements = &asteroid.elements;
            prop_assert!(elements.semi_major_axis >= inner && elements.semi_major_axis <= inner + width);
            prop_assert!(elements.eccentricity >= 0.0 && elements.eccentricity <= spec.max_eccentricity);
            prop_assert!(asteroid.radius_m >= spec.min_radius_m && asteroid.radius_m <= spec.max_radius_m);
        }
    }

    #[test]
    fn belt_background_avoids_gaps(
        seed in any::<u64>(),
        inner in 0.5f64..5.0,
        width in 0.5f64..3.0,
        count in 1usize..150,
        concentration in 0.0f64..3.0,
        gap_shapes in prop::collection::vec((0.05f64..0.95, 0.005f64..0.05), 1..=3),
    ) {
        // Each gap covers at most a tenth of the belt, so most of it stays open.
        let gaps: Vec<BeltGap> = gap_shapes
            .iter()
            .map(|&(t, half)| BeltGap::new(inner + t * width, half * width).unwrap())
            .collect();
        let spec = BeltFieldSpec::new(inner, inner + width, count)
            .unwrap()
            .with_radial_concentration(concentration)
            .unwrap()
            .with_gaps(gaps)
            .unwrap();
        let field = generate_field(&spec, &mut SeededRng::new(seed));
        prop_assert_eq!(field.background().count(), count);
        for asteroid in field.background() {
            let a = asteroid.elements.semi_major_axis;
            prop_assert!(a >= inner && a <= inner + width);
            prop_assert!(!in_gap(&spec.gaps, a), "a = {} falls in a gap", a);
        }
    }
}
