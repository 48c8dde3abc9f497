use approx::assert_relative_eq;
use tables::ValueRange;

use crate::rng::SeededRng;
use crate::sampling::*;

#[test]
fn test_power_law_stays_in_bounds() {
    let mut rng = SeededRng::new(42);
    for _ in 0..2000 {
        let r = sample_power_law(&mut rng, 500.0, 5.0e4, 3.5);
        assert!((500.0..=5.0e4).contains(&r), "radius {}", r);
    }
}

#[test]
fn test_steep_power_law_favours_small_bodies() {
    let mut rng = SeededRng::new(42);
    let n = 5000;
    let small = (0..n)
        .filter(|_| sample_power_law(&mut rng, 1.0, 100.0, 3.5) < 2.0)
        .count();
    // P(r < 2) = (1 − 2^−2.5) / (1 − 100^−2.5) ≈ 0.82
    let fraction = small as f64 / n as f64;
    assert!((fraction - 0.82).abs() < 0.03, "fraction {}", fraction);
}

#[test]
fn test_unit_exponent_is_log_uniform() {
    let mut rng = SeededRng::new(17);
    let n = 5000;
    let below = (0..n)
        .filter(|_| sample_power_law(&mut rng, 1.0, 100.0, 1.0) < 10.0)
        .count();
    let fraction = below as f64 / n as f64;
    assert!((fraction - 0.5).abs() < 0.03, "fraction {}", fraction);
}

#[test]
fn test_power_law_degenerate_bounds() {
    let mut rng = SeededRng::new(1);
    assert_eq!(sample_power_law(&mut rng, 10.0, 10.0, 2.0), 10.0);
    assert_eq!(sample_power_law(&mut rng, 0.0, 10.0, 2.0), 0.0);
}

#[test]
fn test_log_uniform_in_range() {
    let mut rng = SeededRng::new(8);
    let range = ValueRange::new(1.0e10, 1.0e19);
    for _ in 0..1000 {
        assert!(range.contains(sample_log_uniform(&mut rng, &range)));
    }
}

#[test]
fn test_biased_low_mean() {
    let mut rng = SeededRng::new(99);
    let n = 20_000;
    let mean = (0..n).map(|_| sample_biased_low(&mut rng, 0.3)).sum::<f64>() / n as f64;
    // E[u²] = 1/3
    assert_relative_eq!(mean, 0.1, max_relative = 0.05);
}

#[test]
fn test_weighted_skips_non_positive() {
    let mut rng = SeededRng::new(4);
    for _ in 0..500 {
        let i = sample_weighted(&mut rng, &[0.0, 1.0, -3.0, 2.0]);
        assert!(i == 1 || i == 3);
    }
    assert_eq!(sample_weighted(&mut rng, &[0.0, 0.0]), 0);
}

#[test]
fn test_jitter_bounds() {
    let mut rng = SeededRng::new(6);
    for _ in 0..500 {
        let f = jitter(&mut rng, 0.25);
        assert!((0.75..1.25).contains(&f));
    }
}

#[test]
fn test_metallicity_within_clamp() {
    let mut rng = SeededRng::new(21);
    let solar = tables::constants::SOLAR_METALLICITY_Z;
    for _ in 0..1000 {
        let z = sample_metallicity(&mut rng);
        assert!(z >= solar * 10f64.powf(-0.5) - 1e-12);
        assert!(z <= solar * 10f64.powf(0.4) + 1e-12);
    }
}
