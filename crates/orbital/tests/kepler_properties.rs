//! Property tests for the Kepler solver and element transforms.

use std::f64::consts::TAU;

use orbital::{KeplerOptions, OrbitalElements, solve_kepler};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn kepler_solver_converges(mean_anomaly in -20.0f64..20.0, eccentricity in 0.0f64..=0.99) {
        let options = KeplerOptions::default();
        let solution = solve_kepler(mean_anomaly, eccentricity, &options);
        let e = solution.eccentric_anomaly;
        let residual = (e - eccentricity * e.sin() - mean_anomaly).abs();

        prop_assert!(residual < 1e-8, "residual {} for M={} e={}", residual, mean_anomaly, eccentricity);
        prop_assert!(solution.iterations <= options.max_iterations);
    }

    #[test]
    fn position_distance_matches_orbit_radius(
        a in 0.5f64..50.0,
        eccentricity in 0.0f64..0.95,
        inclination in 0.0f64..3.14,
        node in 0.0f64..TAU,
        periapsis in 0.0f64..TAU,
        true_anomaly in 0.0f64..TAU,
    ) {
        let elements = OrbitalElements {
            semi_major_axis: a,
            eccentricity,
            inclination,
            longitude_ascending_node: node,
            argument_of_periapsis: periapsis,
            true_anomaly,
        };
        let r = elements.radius();
        let distance = elements.position().coords.norm();

        prop_assert!((distance - r).abs() <= 1e-9 * r);
        prop_assert!(r >= elements.periapsis() * (1.0 - 1e-12));
        prop_assert!(r <= elements.apoapsis() * (1.0 + 1e-12));
    }
}
