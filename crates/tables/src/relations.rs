//! Analytic relations between physical properties.
//!
//! Every function here is total: degenerate inputs (zero or negative masses,
//! radii, densities, distances) short-circuit to a finite sentinel instead of
//! producing NaN or infinity. Callers rely on this so that a bad spec yields
//! a flawed body the validator can flag rather than a poisoned one.
//!
//! # References
//! - Kippenhahn & Weigert (1990) - main-sequence scaling relations
//! - Gladman et al. (1996) - "Synchronous locking of tidally evolving satellites"
//! - Peale, Cassen & Reynolds (1979) - "Melting of Io by tidal dissipation"

use std::f64::consts::PI;

use crate::constants::{AMU_KG, BOLTZMANN, G, SECONDS_PER_YEAR, SOLAR_TEMPERATURE_K, STEFAN_BOLTZMANN};

/// Tidal quality factor assumed for rocky and icy bodies
const TIDAL_Q: f64 = 100.0;

/// Love number k₂ for a moderately rigid body
const LOVE_NUMBER_K2: f64 = 0.3;

/// Initial spin rate before despinning (rad/s), a 12-hour day
const INITIAL_SPIN_RAD_S: f64 = 2.0 * PI / (12.0 * 3600.0);

/// k₂/Q used for tidal dissipation in satellites, calibrated so that an
/// Io-like orbit dissipates ~10¹⁴ W
const SATELLITE_K2_OVER_Q: f64 = 0.015;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// =============================================================================
// Stellar scaling relations (solar units)
// =============================================================================

/// Main-sequence mass–luminosity relation, L ∝ M^3.5.
pub fn luminosity_from_mass(mass_solar: f64) -> f64 {
    if !positive(mass_solar) {
        return 0.0;
    }
    mass_solar.powf(3.5)
}

/// Main-sequence mass–radius relation, R ∝ M^0.8.
pub fn radius_from_mass(mass_solar: f64) -> f64 {
    if !positive(mass_solar) {
        return 0.0;
    }
    mass_solar.powf(0.8)
}

/// Effective temperature from Stefan–Boltzmann relative to the Sun:
/// T = T☉ · L^0.25 / R^0.5
pub fn temperature_from_luminosity_radius(luminosity_solar: f64, radius_solar: f64) -> f64 {
    if !positive(luminosity_solar) || !positive(radius_solar) {
        return 0.0;
    }
    SOLAR_TEMPERATURE_K * luminosity_solar.powf(0.25) / radius_solar.sqrt()
}

/// Inverse of [`temperature_from_luminosity_radius`]: R = √L · (T☉/T)²
pub fn radius_from_luminosity_temperature(luminosity_solar: f64, temperature_k: f64) -> f64 {
    if !positive(luminosity_solar) || !positive(temperature_k) {
        return 0.0;
    }
    luminosity_solar.sqrt() * (SOLAR_TEMPERATURE_K / temperature_k).powi(2)
}

/// Main-sequence lifetime in years, t ≈ 10¹⁰ · M^-2.5
pub fn main_sequence_lifetime_years(mass_solar: f64) -> f64 {
    if !positive(mass_solar) {
        return 0.0;
    }
    1.0e10 * mass_solar.powf(-2.5)
}

// =============================================================================
// Bulk properties (SI)
// =============================================================================

/// Radius of a uniform sphere: r = (3m / 4πρ)^(1/3)
pub fn radius_from_mass_density(mass_kg: f64, density_kg_m3: f64) -> f64 {
    if !positive(mass_kg) || !positive(density_kg_m3) {
        return 0.0;
    }
    (3.0 * mass_kg / (4.0 * PI * density_kg_m3)).cbrt()
}

pub fn density_from_mass_radius(mass_kg: f64, radius_m: f64) -> f64 {
    if !positive(mass_kg) || !positive(radius_m) {
        return 0.0;
    }
    mass_kg / (4.0 / 3.0 * PI * radius_m.powi(3))
}

/// Surface gravity g = GM/r² (m/s²)
pub fn surface_gravity(mass_kg: f64, radius_m: f64) -> f64 {
    if !positive(mass_kg) || !positive(radius_m) {
        return 0.0;
    }
    G * mass_kg / (radius_m * radius_m)
}

/// Escape velocity v = √(2GM/r) (m/s)
pub fn escape_velocity(mass_kg: f64, radius_m: f64) -> f64 {
    if !positive(mass_kg) || !positive(radius_m) {
        return 0.0;
    }
    (2.0 * G * mass_kg / radius_m).sqrt()
}

// =============================================================================
// Atmospheric retention
// =============================================================================

/// Most probable thermal speed √(2kT/m) of a gas molecule (m/s).
pub fn thermal_velocity(temperature_k: f64, molecular_mass_amu: f64) -> f64 {
    if !positive(temperature_k) || !positive(molecular_mass_amu) {
        return 0.0;
    }
    (2.0 * BOLTZMANN * temperature_k / (molecular_mass_amu * AMU_KG)).sqrt()
}

/// Jeans escape parameter v_esc / v_thermal.
///
/// A gas with no thermal motion cannot escape; that case returns
/// `f64::MAX` rather than infinity.
pub fn jeans_parameter(escape_velocity_m_s: f64, thermal_velocity_m_s: f64) -> f64 {
    if !positive(thermal_velocity_m_s) {
        return if escape_velocity_m_s > 0.0 { f64::MAX } else { 0.0 };
    }
    escape_velocity_m_s.max(0.0) / thermal_velocity_m_s
}

/// Atmospheric scale height H = kT / (μ m_u g) (m).
pub fn scale_height(temperature_k: f64, mean_molecular_mass_amu: f64, gravity_m_s2: f64) -> f64 {
    if !positive(temperature_k) || !positive(mean_molecular_mass_amu) || !positive(gravity_m_s2) {
        return 0.0;
    }
    BOLTZMANN * temperature_k / (mean_molecular_mass_amu * AMU_KG * gravity_m_s2)
}

// =============================================================================
// Irradiation
// =============================================================================

/// Radiative equilibrium temperature of a fast rotator:
/// T = [L(1 − A) / (16πσd²)]^(1/4)
pub fn equilibrium_temperature(luminosity_watts: f64, distance_m: f64, albedo: f64) -> f64 {
    if !positive(luminosity_watts) || !positive(distance_m) {
        return 0.0;
    }
    let absorbed = luminosity_watts * (1.0 - albedo.clamp(0.0, 1.0));
    (absorbed / (16.0 * PI * STEFAN_BOLTZMANN * distance_m * distance_m)).powf(0.25)
}

// =============================================================================
// Tides
// =============================================================================

/// Time for a body to become tidally locked to its host, in years
/// (Gladman et al. 1996):
///
/// t_lock = ω a⁶ I Q / (3 G M² k₂ R⁵), with I = 0.4 m R²
pub fn tidal_locking_timescale_years(
    semi_major_axis_m: f64,
    host_mass_kg: f64,
    body_mass_kg: f64,
    body_radius_m: f64,
) -> f64 {
    if !positive(semi_major_axis_m)
        || !positive(host_mass_kg)
        || !positive(body_mass_kg)
        || !positive(body_radius_m)
    {
        return 0.0;
    }
    let moment_of_inertia = 0.4 * body_mass_kg * body_radius_m.powi(2);
    let numerator = INITIAL_SPIN_RAD_S * semi_major_axis_m.powi(6) * moment_of_inertia * TIDAL_Q;
    let denominator = 3.0 * G * host_mass_kg.powi(2) * LOVE_NUMBER_K2 * body_radius_m.powi(5);
    numerator / denominator / SECONDS_PER_YEAR
}

/// Tidal dissipation in an eccentric synchronous satellite (W):
///
/// Ė = (21/2) (k₂/Q) G M² R⁵ n e² / a⁶
pub fn tidal_heating_watts(
    host_mass_kg: f64,
    body_radius_m: f64,
    semi_major_axis_m: f64,
    eccentricity: f64,
) -> f64 {
    if !positive(host_mass_kg) || !positive(body_radius_m) || !positive(semi_major_axis_m) {
        return 0.0;
    }
    let e = eccentricity.clamp(0.0, 0.99);
    let mean_motion = (G * host_mass_kg / semi_major_axis_m.powi(3)).sqrt();
    10.5 * SATELLITE_K2_OVER_Q * G * host_mass_kg.powi(2) * body_radius_m.powi(5) * mean_motion * e * e
        / semi_major_axis_m.powi(6)
}

/// Hill sphere radius R_H = a (m / 3M)^(1/3)
pub fn hill_radius(semi_major_axis_m: f64, body_mass_kg: f64, host_mass_kg: f64) -> f64 {
    if !positive(semi_major_axis_m) || !positive(body_mass_kg) || !positive(host_mass_kg) {
        return 0.0;
    }
    semi_major_axis_m * (body_mass_kg / (3.0 * host_mass_kg)).cbrt()
}

/// Fluid Roche limit R_R ≈ 2.44 R (ρ_primary / ρ_satellite)^(1/3)
pub fn roche_limit(primary_radius_m: f64, primary_density: f64, satellite_density: f64) -> f64 {
    if !positive(primary_radius_m) || !positive(primary_density) || !positive(satellite_density) {
        return primary_radius_m.max(0.0);
    }
    2.44 * primary_radius_m * (primary_density / satellite_density).cbrt()
}
