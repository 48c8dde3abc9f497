use celestial::{BodyType, CelestialBody};
use chrono::{DateTime, Utc};
use tables::{SizeCategory, relations};
use tracing::debug;

use super::envelope::{EnvelopeInputs, generate_envelope};
use super::{Identity, stamp};
use crate::components::{orbit, physical};
use crate::context::ParentContext;
use crate::rng::SeededRng;
use crate::sampling::sample_weighted;
use crate::spec::{AsteroidClass, AsteroidSpec};

fn select_class(spec: &AsteroidSpec, rng: &mut SeededRng) -> AsteroidClass {
    if let Some(class) = spec.class {
        return class;
    }
    let weights: Vec<f64> = AsteroidClass::ALL.iter().map(|c| c.abundance()).collect();
    AsteroidClass::ALL[sample_weighted(rng, &weights)]
}

/// Generate a main-belt asteroid, stamped with the current time.
pub fn generate_asteroid(spec: &AsteroidSpec, ctx: &ParentContext, rng: &mut SeededRng) -> CelestialBody {
    generate_asteroid_at(spec, ctx, rng, Utc::now())
}

/// Generate a main-belt asteroid around the context's star.
///
/// The taxonomic class fixes bulk density, albedo and surface materials;
/// size defaults to the Tiny category.
pub fn generate_asteroid_at(
    spec: &AsteroidSpec,
    ctx: &ParentContext,
    rng: &mut SeededRng,
    created_at: DateTime<Utc>,
) -> CelestialBody {
    let overrides = &spec.overrides;
    let identity = Identity::draw(rng, BodyType::Asteroid, spec.name.as_deref());
    let class = select_class(spec, rng);
    let category = spec.size_category.unwrap_or_else(|| {
        overrides
            .mass_kg
            .map_or(SizeCategory::Tiny, SizeCategory::from_mass)
    });

    let bulk = physical::sample_bulk(category, Some(class.density_kg_m3()), overrides, rng);
    let orbit = orbit::generate_asteroid_orbit(ctx, bulk.mass_kg, overrides, rng);

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
    let internal_heat_watts = overrides
        .internal_heat_watts
        .unwrap_or_else(|| physical::primordial_heat(bulk.mass_kg, ctx.star_age_years, false));

    let envelope = generate_envelope(
        &EnvelopeInputs {
            category,
            mass_kg: bulk.mass_kg,
            radius_m: bulk.radius_m,
            star_luminosity_watts: ctx.star_luminosity_watts,
            star_distance_m: orbit.semi_major_axis_m,
            total_heat_watts: internal_heat_watts,
            asteroid_class: Some(class),
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
        %class,
        %category,
        radius_m = physical.radius_m,
        "generated asteroid"
    );

    let mut body = CelestialBody::new(identity.id, identity.name, BodyType::Asteroid)
        .with_physical(physical)
        .with_orbital(orbit);
    body.surface = envelope.surface;
    body.atmosphere = envelope.atmosphere;
    body.ring_system = envelope.ring_system;
    body.with_provenance(stamp(rng, spec, Some(ctx), created_at))
}
