//! Read-only ancestor properties handed to child generators.

use celestial::CelestialBody;
use serde::{Deserialize, Serialize};
use tables::constants::{
    AU_M, EARTH_MASS_KG, EARTH_RADIUS_M, JUPITER_MASS_KG, JUPITER_RADIUS_M, SOLAR_LUMINOSITY_W,
    SOLAR_MASS_KG,
};
use tables::relations;

/// Host star and, for moons, host planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_id: Option<String>,
    pub star_mass_kg: f64,
    pub star_luminosity_watts: f64,
    pub star_temperature_k: f64,
    pub star_age_years: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<PlanetContext>,
}

/// The planet a moon orbits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub mass_kg: f64,
    pub radius_m: f64,
    /// Planet's distance from the star (m)
    pub distance_m: f64,
}

impl PlanetContext {
    pub fn earth_like() -> Self {
        Self {
            id: None,
            mass_kg: EARTH_MASS_KG,
            radius_m: EARTH_RADIUS_M,
            distance_m: AU_M,
        }
    }

    pub fn jupiter_like() -> Self {
        Self {
            id: None,
            mass_kg: JUPITER_MASS_KG,
            radius_m: JUPITER_RADIUS_M,
            distance_m: 5.2 * AU_M,
        }
    }

    pub fn density(&self) -> f64 {
        relations::density_from_mass_radius(self.mass_kg, self.radius_m)
    }
}

impl ParentContext {
    /// A 4.6 Gyr solar twin with no planet.
    pub fn sun_like() -> Self {
        Self {
            star_id: None,
            star_mass_kg: SOLAR_MASS_KG,
            star_luminosity_watts: SOLAR_LUMINOSITY_W,
            star_temperature_k: 5772.0,
            star_age_years: 4.6e9,
            planet: None,
        }
    }

    /// Jupiter at 5.2 AU around a solar twin.
    pub fn jupiter_like() -> Self {
        Self::sun_like().with_planet(PlanetContext::jupiter_like())
    }

    /// Earth at 1 AU around a solar twin.
    pub fn earth_like() -> Self {
        Self::sun_like().with_planet(PlanetContext::earth_like())
    }

    /// Context for bodies orbiting a generated star.
    ///
    /// `None` if the body lacks physical or stellar properties.
    pub fn from_star(star: &CelestialBody) -> Option<Self> {
        let physical = star.physical.as_ref()?;
        let stellar = star.stellar.as_ref()?;
        Some(Self {
            star_id: Some(star.id.clone()),
            star_mass_kg: physical.mass_kg,
            star_luminosity_watts: stellar.luminosity_watts,
            star_temperature_k: stellar.effective_temperature_k,
            star_age_years: stellar.age_years,
            planet: None,
        })
    }

    pub fn with_planet(mut self, planet: PlanetContext) -> Self {
        self.planet = Some(planet);
        self
    }

    /// Context for moons of a generated planet.
    ///
    /// `None` if the planet lacks physical or orbital properties.
    pub fn with_planet_body(self, planet: &CelestialBody) -> Option<Self> {
        let physical = planet.physical.as_ref()?;
        let orbit = planet.orbital.as_ref()?;
        Some(self.with_planet(PlanetContext {
            id: Some(planet.id.clone()),
            mass_kg: physical.mass_kg,
            radius_m: physical.radius_m,
            distance_m: orbit.semi_major_axis_m,
        }))
    }

    pub fn luminosity_solar(&self) -> f64 {
        self.star_luminosity_watts / SOLAR_LUMINOSITY_W
    }

    /// Equilibrium temperature at `distance_m` from the star.
    pub fn equilibrium_temperature(&self, distance_m: f64, albedo: f64) -> f64 {
        relations::equilibrium_temperature(self.star_luminosity_watts, distance_m, albedo)
    }
}
