use celestial::{BodyType, CelestialBody};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{Identity, stamp};
use crate::components::physical::{self, Bulk};
use crate::components::stellar;
use crate::rng::SeededRng;
use crate::spec::StarSpec;

/// Generate a main-sequence star stamped with the current time.
pub fn generate_star(spec: &StarSpec, rng: &mut SeededRng) -> CelestialBody {
    generate_star_at(spec, rng, Utc::now())
}

/// Generate a main-sequence star.
///
/// Stars carry physical and stellar components only. Their internal heat
/// is their luminosity.
pub fn generate_star_at(spec: &StarSpec, rng: &mut SeededRng, created_at: DateTime<Utc>) -> CelestialBody {
    let identity = Identity::draw(rng, BodyType::Star, spec.name.as_deref());
    let draw = stellar::generate_stellar(spec, rng);

    let axial_tilt_deg = physical::sample_axial_tilt(rng, false, spec.overrides.axial_tilt_deg);
    let rotation_period_s = stellar::sample_rotation_period(
        draw.stellar.stellar_class,
        draw.stellar.age_years,
        spec.overrides.rotation_period_s,
        rng,
    );
    let bulk = Bulk {
        mass_kg: draw.mass_kg,
        radius_m: draw.radius_m,
    };
    let physical = physical::assemble(
        bulk,
        axial_tilt_deg,
        rotation_period_s,
        false,
        draw.stellar.luminosity_watts,
    );

    debug!(
        seed = rng.seed(),
        id = %identity.id,
        spectral_type = %draw.stellar.spectral_type(),
        luminosity_solar = draw.stellar.luminosity_solar(),
        "generated star"
    );

    CelestialBody::new(identity.id, identity.name, BodyType::Star)
        .with_physical(physical)
        .with_stellar(draw.stellar)
        .with_provenance(stamp(rng, spec, None, created_at))
}
