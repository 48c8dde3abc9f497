use celestial::{BodyType, CelestialBody};
use chrono::{DateTime, Utc};
use tables::{OrbitZone, SizeCategory, relations};
use tracing::debug;

use super::envelope::{EnvelopeInputs, generate_envelope};
use super::{Identity, stamp};
use crate::components::{orbit, physical};
use crate::context::ParentContext;
use crate::rng::SeededRng;
use crate::spec::PlanetSpec;

/// Categories a planet is drawn from when the spec leaves it open
const PLANET_CATEGORIES: [SizeCategory; 6] = [
    SizeCategory::Dwarf,
    SizeCategory::Lunar,
    SizeCategory::Terrestrial,
    SizeCategory::SuperEarth,
    SizeCategory::IceGiant,
    SizeCategory::GasGiant,
];

fn select_category(spec: &PlanetSpec, rng: &mut SeededRng) -> SizeCategory {
    if let Some(category) = spec.size_category {
        return category;
    }
    if let Some(mass) = spec.overrides.mass_kg {
        return SizeCategory::from_mass(mass);
    }
    PLANET_CATEGORIES[rng.index(PLANET_CATEGORIES.len())]
}

fn select_zone(spec: &PlanetSpec, ctx: &ParentContext, rng: &mut SeededRng) -> OrbitZone {
    if let Some(zone) = spec.orbit_zone {
        return zone;
    }
    if let Some(a) = spec.overrides.semi_major_axis_m {
        return OrbitZone::from_distance(a, ctx.luminosity_solar());
    }
    OrbitZone::ALL[rng.index(OrbitZone::ALL.len())]
}

/// Generate a planet around the context's star, stamped with the current time.
pub fn generate_planet(spec: &PlanetSpec, ctx: &ParentContext, rng: &mut SeededRng) -> CelestialBody {
    generate_planet_at(spec, ctx, rng, Utc::now())
}

/// Generate a planet around the context's star.
///
/// Close-in planets that have had time to lock to the star rotate
/// synchronously and pick up stellar tidal heating.
pub fn generate_planet_at(
    spec: &PlanetSpec,
    ctx: &ParentContext,
    rng: &mut SeededRng,
    created_at: DateTime<Utc>,
) -> CelestialBody {
    let overrides = &spec.overrides;
    let identity = Identity::draw(rng, BodyType::Planet, spec.name.as_deref());
    let category = select_category(spec, rng);
    let zone = select_zone(spec, ctx, rng);

    let bulk = physical::sample_bulk(category, None, overrides, rng);
    let orbit = orbit::generate_planet_orbit(zone, ctx, bulk.mass_kg, overrides, rng);

    let locking = relations::tidal_locking_timescale_years(
        orbit.semi_major_axis_m,
        ctx.star_mass_kg,
        bulk.mass_kg,
        bulk.radius_m,
    );
    let tidally_locked = locking < ctx.star_age_years;
    let axial_tilt_deg = physical::sample_axial_tilt(rng, tidally_locked, overrides.axial_tilt_deg);
    let rotation_period_s = physical::sample_rotation_period(
        rng,
        category,
        tidally_locked,
        orbit.orbital_period_s,
        overrides.rotation_period_s,
    );

    let internal_heat_watts = overrides.internal_heat_watts.unwrap_or_else(|| {
        let primordial = physical::primordial_heat(bulk.mass_kg, ctx.star_age_years, category.is_giant());
        let tidal = if tidally_locked {
            relations::tidal_heating_watts(
                ctx.star_mass_kg,
                bulk.radius_m,
                orbit.semi_major_axis_m,
                orbit.eccentricity,
            )
        } else {
            0.0
        };
        primordial + tidal
    });

    let envelope = generate_envelope(
        &EnvelopeInputs {
            category,
            mass_kg: bulk.mass_kg,
            radius_m: bulk.radius_m,
            star_luminosity_watts: ctx.star_luminosity_watts,
            star_distance_m: orbit.semi_major_axis_m,
            total_heat_watts: internal_heat_watts,
            asteroid_class: None,
            overrides,
        },
        rng,
    );
    let physical = physical::assemble(
        bulk,
        axial_tilt_deg,
        rotation_period_s,
        tidally_locked,
        internal_heat_watts,
    );

    debug!(
        seed = rng.seed(),
        id = %identity.id,
        %category,
        %zone,
        semi_major_axis_m = orbit.semi_major_axis_m,
        atmosphere = envelope.atmosphere.is_some(),
        rings = envelope.ring_system.is_some(),
        "generated planet"
    );

    let mut body = CelestialBody::new(identity.id, identity.name, BodyType::Planet)
        .with_physical(physical)
        .with_orbital(orbit);
    body.surface = envelope.surface;
    body.atmosphere = envelope.atmosphere;
    body.ring_system = envelope.ring_system;
    body.with_provenance(stamp(rng, spec, Some(ctx), created_at))
}
