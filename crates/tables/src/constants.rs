//! Physical constants in SI units.
//!
//! Reference bodies follow IAU 2015 nominal values where they exist.

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.674_30e-11;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Atomic mass unit (kg)
pub const AMU_KG: f64 = 1.660_539_066_60e-27;

/// Astronomical unit (m)
pub const AU_M: f64 = 1.495_978_707e11;

/// Julian year (s)
pub const SECONDS_PER_YEAR: f64 = 3.155_76e7;

/// Mass of the Sun (kg)
pub const SOLAR_MASS_KG: f64 = 1.988_47e30;

/// Nominal solar radius (m)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Nominal solar luminosity (W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Solar effective temperature (K), reference point for the Stefan–Boltzmann relation
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Present-day solar metallicity as a mass fraction (Asplund et al. 2009)
pub const SOLAR_METALLICITY_Z: f64 = 0.0134;

/// Mass of the Earth (kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mean radius of the Earth (m)
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Mass of Jupiter (kg)
pub const JUPITER_MASS_KG: f64 = 1.898e27;

/// Mean radius of Jupiter (m)
pub const JUPITER_RADIUS_M: f64 = 6.9911e7;

/// Age of the universe (years)
pub const UNIVERSE_AGE_YEARS: f64 = 1.38e10;
