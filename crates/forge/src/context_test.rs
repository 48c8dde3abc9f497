use approx::assert_relative_eq;
use tables::constants::{AU_M, JUPITER_MASS_KG, SOLAR_MASS_KG};

use crate::context::{ParentContext, PlanetContext};
use crate::spec::{PlanetSpec, StarSpec};
use crate::{generate_planet, generate_star};

#[test]
fn test_sun_like_luminosity() {
    let ctx = ParentContext::sun_like();
    assert_relative_eq!(ctx.luminosity_solar(), 1.0);
    assert!(ctx.planet.is_none());
}

#[test]
fn test_jupiter_like_is_cold() {
    let ctx = ParentContext::jupiter_like();
    let planet = ctx.planet.as_ref().unwrap();
    assert_relative_eq!(planet.mass_kg, JUPITER_MASS_KG);
    let t_eq = ctx.equilibrium_temperature(planet.distance_m, 0.3);
    assert!(t_eq < 200.0, "T_eq {}", t_eq);
    // Jupiter's bulk density ≈ 1326 kg/m³
    assert_relative_eq!(PlanetContext::jupiter_like().density(), 1326.0, max_relative = 0.01);
}

#[test]
fn test_context_from_generated_bodies() {
    let star_spec = StarSpec::sun_like(1);
    let star = generate_star(&star_spec, &mut star_spec.rng());
    let ctx = ParentContext::from_star(&star).unwrap();
    assert_eq!(ctx.star_id.as_deref(), Some(star.id.as_str()));
    assert_relative_eq!(ctx.star_mass_kg, SOLAR_MASS_KG);

    let planet_spec = PlanetSpec::new(2);
    let planet = generate_planet(&planet_spec, &ctx, &mut planet_spec.rng());
    let moon_ctx = ctx.clone().with_planet_body(&planet).unwrap();
    let host = moon_ctx.planet.as_ref().unwrap();
    assert_eq!(host.id.as_deref(), Some(planet.id.as_str()));
    assert_relative_eq!(host.distance_m, planet.orbital.as_ref().unwrap().semi_major_axis_m);
}

#[test]
fn test_context_needs_components() {
    let bare = celestial::CelestialBody::new("x", "x", celestial::BodyType::Star);
    assert!(ParentContext::from_star(&bare).is_none());
    assert!(ParentContext::sun_like().with_planet_body(&bare).is_none());
}

#[test]
fn test_context_round_trips_through_json() {
    let ctx = ParentContext::earth_like();
    let json = serde_json::to_string(&ctx).unwrap();
    let back: ParentContext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ctx);
    assert_relative_eq!(back.planet.unwrap().distance_m, AU_M);
}
