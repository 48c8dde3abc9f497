//! Outer layers shared by planets, moons and asteroids: atmosphere, solid
//! surface and rings.

use celestial::atmosphere::greenhouse_temperature;
use celestial::{AtmosphereProps, RingSystemProps, SurfaceProps, SurfaceType};
use tables::{SizeCategory, relations};
use tracing::trace;

use crate::components::{atmosphere, rings, surface};
use crate::rng::SeededRng;
use crate::spec::{AsteroidClass, BodyOverrides};

/// Bond albedo assumed for irradiation before the surface is known
pub const DEFAULT_BOND_ALBEDO: f64 = 0.3;

/// Ocean coverage above which a world counts as an ocean world
const OCEAN_WORLD_COVERAGE: f64 = 0.5;

const WATER_FREEZING_K: f64 = 273.0;

pub(crate) struct EnvelopeInputs<'a> {
    pub category: SizeCategory,
    pub mass_kg: f64,
    pub radius_m: f64,
    pub star_luminosity_watts: f64,
    /// Distance from the star (a moon uses its planet's)
    pub star_distance_m: f64,
    pub total_heat_watts: f64,
    pub asteroid_class: Option<AsteroidClass>,
    pub overrides: &'a BodyOverrides,
}

pub(crate) struct Envelope {
    pub surface: Option<SurfaceProps>,
    pub atmosphere: Option<AtmosphereProps>,
    pub ring_system: Option<RingSystemProps>,
}

impl EnvelopeInputs<'_> {
    fn equilibrium_temperature(&self, albedo: f64) -> f64 {
        relations::equilibrium_temperature(self.star_luminosity_watts, self.star_distance_m, albedo)
    }
}

pub(crate) fn generate_envelope(inputs: &EnvelopeInputs, rng: &mut SeededRng) -> Envelope {
    let overrides = inputs.overrides;
    let gravity = relations::surface_gravity(inputs.mass_kg, inputs.radius_m);
    let escape = relations::escape_velocity(inputs.mass_kg, inputs.radius_m);
    let density = relations::density_from_mass_radius(inputs.mass_kg, inputs.radius_m);
    let t_eq = inputs.equilibrium_temperature(overrides.albedo.unwrap_or(DEFAULT_BOND_ALBEDO));

    let atmosphere = atmosphere::retains_atmosphere(inputs.category, escape, t_eq, &overrides.atmosphere, rng)
        .then(|| atmosphere::generate_atmosphere(inputs.category, t_eq, gravity, &overrides.atmosphere, rng));
    let optical_depth = atmosphere.as_ref().map_or(0.0, |a| a.greenhouse_factor);
    let pressure = atmosphere.as_ref().map(|a| a.surface_pressure_pa);

    let surface = if inputs.category.is_giant() {
        None
    } else {
        let volcanism_level = surface::volcanism_level(inputs.total_heat_watts, overrides.volcanism_level, rng);
        let ocean_depth = surface::subsurface_ocean_depth(inputs.total_heat_watts, overrides.subsurface_ocean, rng);

        let provisional = surface::surface_temperature(
            greenhouse_temperature(t_eq, optical_depth),
            inputs.total_heat_watts,
            inputs.radius_m,
        );
        let hydrosphere = surface::generate_hydrosphere(provisional, pressure, overrides.oceans, rng);

        let surface_type = match &hydrosphere {
            Some(h) if h.ocean_coverage > OCEAN_WORLD_COVERAGE => SurfaceType::Oceanic,
            _ => surface::classify_surface(
                inputs.category,
                provisional,
                density,
                volcanism_level,
                inputs.asteroid_class,
            ),
        };
        let albedo = match (overrides.albedo, inputs.asteroid_class) {
            (Some(albedo), _) => albedo,
            (None, Some(class)) => {
                let range = class.albedo();
                rng.uniform_range(range.min, range.max)
            }
            (None, None) => surface::sample_albedo(surface_type, None, rng),
        };
        let temperature_k = surface::surface_temperature(
            greenhouse_temperature(inputs.equilibrium_temperature(albedo), optical_depth),
            inputs.total_heat_watts,
            inputs.radius_m,
        );

        let terrain = (inputs.category != SizeCategory::Tiny).then(|| {
            let ocean_coverage = hydrosphere.as_ref().map_or(0.0, |h| h.ocean_coverage);
            surface::generate_terrain(gravity, volcanism_level, pressure.unwrap_or(0.0), ocean_coverage, rng)
        });
        let cryosphere = surface::generate_cryosphere(
            temperature_k,
            hydrosphere.as_ref(),
            ocean_depth.filter(|_| temperature_k < WATER_FREEZING_K),
            volcanism_level,
            atmosphere.as_ref().map(|a| &a.composition),
            rng,
        );
        let materials = surface::sample_materials(surface_type, rng);

        trace!(%surface_type, temperature_k, volcanism_level, "surface");
        Some(SurfaceProps {
            temperature_k,
            albedo,
            volcanism_level,
            surface_type,
            materials,
            terrain,
            hydrosphere,
            cryosphere,
        })
    };

    let ring_system = rings::generate_rings(
        inputs.category,
        inputs.radius_m,
        density,
        t_eq,
        overrides.rings,
        rng,
    );

    Envelope {
        surface,
        atmosphere,
        ring_system,
    }
}
