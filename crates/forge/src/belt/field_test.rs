use std::f64::consts::TAU;

use approx::assert_relative_eq;
use celestial::BodyType;
use celestial::serialization::{from_json, to_json_compact};
use orbital::wrap_angle;

use crate::belt::*;
use crate::rng::SeededRng;

fn ceres() -> MajorBodyInput {
    MajorBodyInput {
        body_id: "ceres".to_string(),
        body_type: BodyType::Asteroid,
        semi_major_axis_au: 2.767,
        eccentricity: 0.0758,
        inclination_deg: 10.59,
        longitude_ascending_node_deg: 80.3,
        argument_periapsis_deg: 73.6,
        mean_anomaly_deg: 95.99,
        radius_m: 4.73e5,
    }
}

/// Mean resultant length of a set of angles: 1 when they coincide, near 0
/// when they are spread uniformly.
fn resultant_length(angles: &[f64]) -> f64 {
    let (sin, cos) = angles
        .iter()
        .fold((0.0, 0.0), |(s, c), angle| (s + angle.sin(), c + angle.cos()));
    (sin * sin + cos * cos).sqrt() / angles.len() as f64
}

#[test]
fn test_radial_density_shape() {
    assert_relative_eq!(radial_density(0.5, 2.0), 0.0625);
    assert_eq!(radial_density(0.0, 2.0), 0.0);
    assert_eq!(radial_density(1.0, 2.0), 0.0);
    assert_eq!(radial_density(0.2, 0.0), 1.0);
    assert!(radial_density(0.3, 2.0) < radial_density(0.5, 2.0));
}

#[test]
fn test_gap_edges_are_open() {
    let gaps = [BeltGap::new(2.5, 0.1).unwrap()];
    assert!(in_gap(&gaps, 2.5));
    assert!(in_gap(&gaps, 2.45));
    assert!(!in_gap(&gaps, 2.7));
    assert!(!in_gap(&[], 2.5));
}

#[test]
fn test_background_stays_in_belt() {
    let spec = BeltFieldSpec::new(2.1, 3.3, 500).unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(11));
    assert_eq!(field.asteroids.len(), 500);
    assert_eq!(field.seed, 11);

    for asteroid in field.background() {
        let elements = &asteroid.elements;
        assert!((2.1..=3.3).contains(&elements.semi_major_axis));
        assert!((0.0..=0.3).contains(&elements.eccentricity));
        assert!(elements.inclination >= 0.0 && elements.inclination <= 20f64.to_radians() + 1e-12);
        assert!((0.0..TAU).contains(&elements.true_anomaly));
        assert!((500.0..=5.0e4).contains(&asteroid.radius_m));

        let r = asteroid.position_au.coords.norm();
        assert_relative_eq!(r, elements.radius(), max_relative = 1e-9);
        assert!(r >= elements.periapsis() * (1.0 - 1e-9));
        assert!(r <= elements.apoapsis() * (1.0 + 1e-9));
    }
}

#[test]
fn test_kirkwood_gaps_are_empty() {
    let spec = BeltFieldSpec::main_belt(2000).unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(12));
    for asteroid in field.background() {
        assert!(
            !in_gap(&spec.gaps, asteroid.elements.semi_major_axis),
            "a = {}",
            asteroid.elements.semi_major_axis
        );
    }
}

#[test]
fn test_concentration_favours_the_middle() {
    let spec = BeltFieldSpec::new(2.0, 3.0, 2000).unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(13));
    let middle = field
        .background()
        .filter(|a| (2.25..=2.75).contains(&a.elements.semi_major_axis))
        .count();
    assert!(middle > 1400, "middle {}", middle);

    let flat = spec.with_radial_concentration(0.0).unwrap();
    let field = generate_field(&flat, &mut SeededRng::new(13));
    let middle = field
        .background()
        .filter(|a| (2.25..=2.75).contains(&a.elements.semi_major_axis))
        .count();
    assert!((880..=1120).contains(&middle), "middle {}", middle);
}

#[test]
fn test_majors_come_first() {
    let spec = BeltFieldSpec::main_belt(50)
        .unwrap()
        .with_major_bodies(vec![ceres()])
        .unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(14));
    assert_eq!(field.asteroids.len(), 51);
    assert_eq!(field.majors().count(), 1);

    let first = &field.asteroids[0];
    assert!(first.is_major);
    assert_eq!(first.body_id.as_deref(), Some("ceres"));
    assert_eq!(first.body_type, Some(BodyType::Asteroid));
    assert_eq!(first.radius_m, 4.73e5);
    assert_eq!(first.elements.semi_major_axis, 2.767);
    assert_relative_eq!(first.elements.inclination, 10.59f64.to_radians());
    assert_relative_eq!(first.elements.mean_anomaly(), 95.99f64.to_radians(), epsilon = 1e-9);
    assert!(field.asteroids[1..].iter().all(|a| !a.is_major && a.body_id.is_none()));
}

#[test]
fn test_majors_do_not_consume_randomness() {
    let plain = BeltFieldSpec::main_belt(20).unwrap();
    let with_major = plain.clone().with_major_bodies(vec![ceres()]).unwrap();
    let a = generate_field(&plain, &mut SeededRng::new(15));
    let b = generate_field(&with_major, &mut SeededRng::new(15));
    let background: Vec<_> = b.background().cloned().collect();
    assert_eq!(a.asteroids, background);
}

#[test]
fn test_clustered_longitudes_bunch_up() {
    let clustering = AngularClustering::new(1, 1.0, 100.0).unwrap();
    let spec = BeltFieldSpec::new(5.0, 5.4, 400)
        .unwrap()
        .with_clustering(clustering)
        .unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(16));
    let longitudes: Vec<f64> = field
        .background()
        .map(|a| wrap_angle(a.elements.true_anomaly + a.elements.argument_of_periapsis))
        .collect();
    let clustered = resultant_length(&longitudes);
    assert!(clustered > 0.95, "resultant {}", clustered);

    let uniform = BeltFieldSpec::new(5.0, 5.4, 400).unwrap();
    let field = generate_field(&uniform, &mut SeededRng::new(16));
    let longitudes: Vec<f64> = field
        .background()
        .map(|a| wrap_angle(a.elements.true_anomaly + a.elements.argument_of_periapsis))
        .collect();
    assert!(resultant_length(&longitudes) < 0.2);
}

#[test]
fn test_fully_gapped_belt_falls_back_to_midpoint() {
    let spec = BeltFieldSpec::new(2.0, 3.0, 3)
        .unwrap()
        .with_gaps(vec![BeltGap::new(2.5, 0.6).unwrap()])
        .unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(17));
    for asteroid in field.background() {
        assert_eq!(asteroid.elements.semi_major_axis, 2.5);
    }
}

#[test]
fn test_empty_belt() {
    let spec = BeltFieldSpec::new(2.0, 3.0, 0).unwrap();
    let field = generate_field(&spec, &mut SeededRng::new(18));
    assert!(field.asteroids.is_empty());
}

#[test]
fn test_field_is_deterministic_and_serializable() {
    let spec = BeltFieldSpec::main_belt(100).unwrap();
    let a = generate_field(&spec, &mut SeededRng::new(19));
    let b = generate_field(&spec, &mut SeededRng::new(19));
    assert_eq!(a, b);

    let json = to_json_compact(&a).unwrap();
    let decoded: BeltFieldData = from_json(&json).unwrap();
    assert_eq!(decoded, a);
}
