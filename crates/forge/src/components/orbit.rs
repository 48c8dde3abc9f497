//! Orbit placement around a star or a planet.

use celestial::OrbitalProps;
use orbital::orbital_period;
use tables::constants::AU_M;
use tables::{OrbitZone, ValueRange, distance_range, relations};

use crate::context::{ParentContext, PlanetContext};
use crate::rng::SeededRng;
use crate::sampling::{sample_biased_low, sample_log_uniform};
use crate::spec::BodyOverrides;

// =============================================================================
// Planets
// =============================================================================

/// Inclination scale for planets (degrees); the solar system's planets lie
/// within a few degrees of the invariable plane
const PLANET_MAX_INCLINATION_DEG: f64 = 5.0;

// =============================================================================
// Moons
// =============================================================================

/// Prograde satellites are stable out to roughly half the Hill radius;
/// regular moons form well inside that
const REGULAR_MOON_HILL_FRACTION: f64 = 0.3;
const CAPTURED_MOON_HILL_FRACTION: f64 = 0.5;

/// Moons sit at least this many Roche radii out
const ROCHE_SAFETY_FACTOR: f64 = 2.0;

/// Regular moons form in the circumplanetary disk on near-circular orbits
const REGULAR_ECCENTRICITY: ValueRange = ValueRange::new(0.001, 0.02);
const REGULAR_INCLINATION_SD_DEG: f64 = 0.5;

/// Captured moons keep the eccentric, inclined orbit of their capture
const CAPTURED_ECCENTRICITY: ValueRange = ValueRange::new(0.1, 0.4);

/// Moon density assumed when checking tidal disruption
pub const DEFAULT_MOON_DENSITY: f64 = 2_500.0;

// =============================================================================
// Asteroids
// =============================================================================

/// Main belt around a 1 L☉ star (AU), between the 4:1 and 2:1 Kirkwood gaps
const MAIN_BELT_AU: ValueRange = ValueRange::new(2.1, 3.3);
const ASTEROID_MAX_ECCENTRICITY: f64 = 0.3;
const ASTEROID_MAX_INCLINATION_DEG: f64 = 20.0;

/// Ω, ω and M, each uniform in [0, 360).
fn orientation(rng: &mut SeededRng) -> (f64, f64, f64) {
    (
        rng.uniform_range(0.0, 360.0),
        rng.uniform_range(0.0, 360.0),
        rng.uniform_range(0.0, 360.0),
    )
}

/// Heliocentric orbit inside an orbit zone.
///
/// Semi-major axis is log-uniform across the zone's distance range for the
/// star's luminosity; eccentricity is biased toward circular.
pub fn generate_planet_orbit(
    zone: OrbitZone,
    ctx: &ParentContext,
    mass_kg: f64,
    overrides: &BodyOverrides,
    rng: &mut SeededRng,
) -> OrbitalProps {
    let range = distance_range(zone, ctx.luminosity_solar());
    let semi_major_axis_m = match overrides.semi_major_axis_m {
        Some(a) => a,
        None => sample_log_uniform(rng, &range),
    };
    let eccentricity = match overrides.eccentricity {
        Some(e) => e,
        None => sample_biased_low(rng, zone.data().max_eccentricity),
    };
    let inclination_deg = match overrides.inclination_deg {
        Some(i) => i,
        None => sample_biased_low(rng, PLANET_MAX_INCLINATION_DEG),
    };
    let (node, periapsis, mean_anomaly) = orientation(rng);

    OrbitalProps {
        semi_major_axis_m,
        eccentricity,
        inclination_deg,
        longitude_ascending_node_deg: node,
        argument_periapsis_deg: periapsis,
        mean_anomaly_deg: mean_anomaly,
        orbital_period_s: orbital_period(semi_major_axis_m, ctx.star_mass_kg, mass_kg),
        parent_id: ctx.star_id.clone(),
    }
}

/// Range of stable semi-major axes around `planet`: beyond twice the Roche
/// limit and inside a fraction of the Hill sphere.
pub fn moon_distance_range(
    planet: &PlanetContext,
    star_mass_kg: f64,
    moon_density: f64,
    captured: bool,
) -> ValueRange {
    let roche = relations::roche_limit(planet.radius_m, planet.density(), moon_density);
    let inner = (ROCHE_SAFETY_FACTOR * roche).max(1.5 * planet.radius_m);
    let hill = relations::hill_radius(planet.distance_m, planet.mass_kg, star_mass_kg);
    let fraction = if captured {
        CAPTURED_MOON_HILL_FRACTION
    } else {
        REGULAR_MOON_HILL_FRACTION
    };
    let outer = fraction * hill;
    if outer > inner {
        ValueRange::new(inner, outer)
    } else {
        ValueRange::new(inner, 1.5 * inner)
    }
}

/// Planetocentric orbit for a moon.
pub fn generate_moon_orbit(
    planet: &PlanetContext,
    star_mass_kg: f64,
    moon_mass_kg: f64,
    moon_density: f64,
    captured: bool,
    overrides: &BodyOverrides,
    rng: &mut SeededRng,
) -> OrbitalProps {
    let range = moon_distance_range(planet, star_mass_kg, moon_density, captured);
    let semi_major_axis_m = match overrides.semi_major_axis_m {
        Some(a) => a,
        None => sample_log_uniform(rng, &range),
    };
    let eccentricity = match overrides.eccentricity {
        Some(e) => e,
        None if captured => rng.uniform_range(CAPTURED_ECCENTRICITY.min, CAPTURED_ECCENTRICITY.max),
        None => rng.uniform_range(REGULAR_ECCENTRICITY.min, REGULAR_ECCENTRICITY.max),
    };
    let inclination_deg = match overrides.inclination_deg {
        Some(i) => i,
        None if captured => rng.uniform_range(0.0, 180.0),
        None => rng.normal(0.0, REGULAR_INCLINATION_SD_DEG).abs().min(180.0),
    };
    let (node, periapsis, mean_anomaly) = orientation(rng);

    OrbitalProps {
        semi_major_axis_m,
        eccentricity,
        inclination_deg,
        longitude_ascending_node_deg: node,
        argument_periapsis_deg: periapsis,
        mean_anomaly_deg: mean_anomaly,
        orbital_period_s: orbital_period(semi_major_axis_m, planet.mass_kg, moon_mass_kg),
        parent_id: planet.id.clone(),
    }
}

/// Main-belt distance range (m) around a star of `luminosity_solar`.
pub fn main_belt_range(luminosity_solar: f64) -> ValueRange {
    let scale = if luminosity_solar.is_finite() && luminosity_solar > 0.0 {
        luminosity_solar.sqrt()
    } else {
        1.0
    };
    ValueRange::new(MAIN_BELT_AU.min * scale * AU_M, MAIN_BELT_AU.max * scale * AU_M)
}

/// Heliocentric orbit for a lone asteroid in the star's main belt.
pub fn generate_asteroid_orbit(
    ctx: &ParentContext,
    mass_kg: f64,
    overrides: &BodyOverrides,
    rng: &mut SeededRng,
) -> OrbitalProps {
    let range = main_belt_range(ctx.luminosity_solar());
    let semi_major_axis_m = match overrides.semi_major_axis_m {
        Some(a) => a,
        None => rng.uniform_range(range.min, range.max),
    };
    let eccentricity = match overrides.eccentricity {
        Some(e) => e,
        None => sample_biased_low(rng, ASTEROID_MAX_ECCENTRICITY),
    };
    let inclination_deg = match overrides.inclination_deg {
        Some(i) => i,
        None => sample_biased_low(rng, ASTEROID_MAX_INCLINATION_DEG),
    };
    let (node, periapsis, mean_anomaly) = orientation(rng);

    OrbitalProps {
        semi_major_axis_m,
        eccentricity,
        inclination_deg,
        longitude_ascending_node_deg: node,
        argument_periapsis_deg: periapsis,
        mean_anomaly_deg: mean_anomaly,
        orbital_period_s: orbital_period(semi_major_axis_m, ctx.star_mass_kg, mass_kg),
        parent_id: ctx.star_id.clone(),
    }
}
