use celestial::{BodyType, CelestialBody};
use chrono::{DateTime, Utc};
use tables::{SizeCategory, relations};
use tracing::{debug, warn};

use super::envelope::{EnvelopeInputs, generate_envelope};
use super::{Identity, stamp};
use crate::components::{orbit, physical};
use crate::context::{ParentContext, PlanetContext};
use crate::rng::SeededRng;
use crate::spec::MoonSpec;

/// Categories a moon is drawn from when the spec leaves it open
const MOON_CATEGORIES: [SizeCategory; 3] = [SizeCategory::Tiny, SizeCategory::Dwarf, SizeCategory::Lunar];

fn select_category(spec: &MoonSpec, rng: &mut SeededRng) -> SizeCategory {
    if let Some(category) = spec.size_category {
        return category;
    }
    if let Some(mass) = spec.overrides.mass_kg {
        return SizeCategory::from_mass(mass);
    }
    MOON_CATEGORIES[rng.index(MOON_CATEGORIES.len())]
}

/// Generate a moon of the context's planet, stamped with the current time.
pub fn generate_moon(spec: &MoonSpec, ctx: &ParentContext, rng: &mut SeededRng) -> CelestialBody {
    generate_moon_at(spec, ctx, rng, Utc::now())
}

/// Generate a moon of the context's planet.
///
/// The planet sets the orbit's stability window and raises tides on the
/// moon; the star sets its irradiation. A context without a planet falls
/// back to a Jupiter analogue at 5.2 AU.
pub fn generate_moon_at(
    spec: &MoonSpec,
    ctx: &ParentContext,
    rng: &mut SeededRng,
    created_at: DateTime<Utc>,
) -> CelestialBody {
    let overrides = &spec.overrides;
    let planet = match &ctx.planet {
        Some(planet) => planet.clone(),
        None => {
            warn!(seed = rng.seed(), "moon context has no planet, assuming a Jupiter analogue");
            PlanetContext::jupiter_like()
        }
    };

    let identity = Identity::draw(rng, BodyType::Moon, spec.name.as_deref());
    let category = select_category(spec, rng);
    let bulk = physical::sample_bulk(category, None, overrides, rng);
    let orbit = orbit::generate_moon_orbit(
        &planet,
        ctx.star_mass_kg,
        bulk.mass_kg,
        bulk.density(),
        spec.captured,
        overrides,
        rng,
    );

    let locking = relations::tidal_locking_timescale_years(
        orbit.semi_major_axis_m,
        planet.mass_kg,
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

    let tidal_heat = if tidally_locked {
        relations::tidal_heating_watts(
            planet.mass_kg,
            bulk.radius_m,
            orbit.semi_major_axis_m,
            orbit.eccentricity,
        )
    } else {
        0.0
    };
    let internal_heat_watts = overrides
        .internal_heat_watts
        .unwrap_or_else(|| physical::primordial_heat(bulk.mass_kg, ctx.star_age_years, false) + tidal_heat);

    let envelope = generate_envelope(
        &EnvelopeInputs {
            category,
            mass_kg: bulk.mass_kg,
            radius_m: bulk.radius_m,
            star_luminosity_watts: ctx.star_luminosity_watts,
            star_distance_m: planet.distance_m,
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
        captured = spec.captured,
        tidal_heat,
        atmosphere = envelope.atmosphere.is_some(),
        "generated moon"
    );

    let mut body = CelestialBody::new(identity.id, identity.name, BodyType::Moon)
        .with_physical(physical)
        .with_orbital(orbit);
    body.surface = envelope.surface;
    body.atmosphere = envelope.atmosphere;
    body.ring_system = envelope.ring_system;
    body.with_provenance(stamp(rng, spec, Some(ctx), created_at))
}
