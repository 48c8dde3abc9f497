//! Generate a planet CSV around solar twins
//!
//! Usage: cargo run -p forge --example generate_planets
//!
//! Output: one row per planet on stdout

use forge::{ParentContext, PlanetSpec, StarSpec, generate_planet, generate_star};
use tables::constants::{AU_M, EARTH_MASS_KG, EARTH_RADIUS_M};

fn main() {
    let n_planets = 1000;

    println!("seed,name,category,mass_earth,radius_earth,sma_au,ecc,inc_deg,surface_k,surface,atmosphere,rings");

    let star_spec = StarSpec::sun_like(1);
    let star = generate_star(&star_spec, &mut star_spec.rng());
    let Some(ctx) = ParentContext::from_star(&star) else {
        eprintln!("generated star has no physical properties");
        return;
    };

    for seed in 0..n_planets {
        let spec = PlanetSpec::new(seed);
        let planet = generate_planet(&spec, &ctx, &mut spec.rng());
        let (Some(physical), Some(orbit)) = (&planet.physical, &planet.orbital) else {
            continue;
        };
        let category = tables::SizeCategory::from_mass(physical.mass_kg);
        let (surface_k, surface) = match &planet.surface {
            Some(surface) => (format!("{:.0}", surface.temperature_k), format!("{:?}", surface.surface_type)),
            None => (String::new(), String::new()),
        };

        println!(
            "{},{},{},{:.4},{:.4},{:.4},{:.4},{:.2},{},{},{},{}",
            seed,
            planet.name,
            category,
            physical.mass_kg / EARTH_MASS_KG,
            physical.radius_m / EARTH_RADIUS_M,
            orbit.semi_major_axis_m / AU_M,
            orbit.eccentricity,
            orbit.inclination_deg,
            surface_k,
            surface,
            planet.has_atmosphere(),
            planet.has_ring_system(),
        );
    }

    eprintln!("Generated {} planets around {}", n_planets, star.name);
}
