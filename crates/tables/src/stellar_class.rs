//! Main-sequence spectral class table.
//!
//! Ranges follow the usual Harvard classification for luminosity class V
//! (Habets & Heintze 1981; Pecaut & Mamajek 2013). Each row lists the
//! hottest/brightest values as `max`; sub-rank 0 sits at the top of the row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::{ValueRange, interpolate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StellarClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Physical ranges for one spectral class.
///
/// Mass, radius and luminosity are in solar units; temperature in Kelvin;
/// lifetime in years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarClassData {
    pub mass_solar: ValueRange,
    pub radius_solar: ValueRange,
    pub temperature_k: ValueRange,
    pub luminosity_solar: ValueRange,
    pub lifetime_years: ValueRange,
    /// Fraction of main-sequence stars in the solar neighbourhood
    pub abundance: f64,
}

static O_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(16.0, 90.0),
    radius_solar: ValueRange::new(6.6, 15.0),
    temperature_k: ValueRange::new(30_000.0, 50_000.0),
    luminosity_solar: ValueRange::new(3.0e4, 1.0e6),
    lifetime_years: ValueRange::new(3.0e6, 1.0e7),
    abundance: 0.000_03,
};

static B_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(2.1, 16.0),
    radius_solar: ValueRange::new(1.8, 6.6),
    temperature_k: ValueRange::new(10_000.0, 30_000.0),
    luminosity_solar: ValueRange::new(25.0, 3.0e4),
    lifetime_years: ValueRange::new(1.0e7, 3.0e8),
    abundance: 0.0013,
};

static A_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(1.4, 2.1),
    radius_solar: ValueRange::new(1.4, 1.8),
    temperature_k: ValueRange::new(7_500.0, 10_000.0),
    luminosity_solar: ValueRange::new(5.0, 25.0),
    lifetime_years: ValueRange::new(3.0e8, 2.0e9),
    abundance: 0.006,
};

static F_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(1.04, 1.4),
    radius_solar: ValueRange::new(1.15, 1.4),
    temperature_k: ValueRange::new(6_000.0, 7_500.0),
    luminosity_solar: ValueRange::new(1.5, 5.0),
    lifetime_years: ValueRange::new(2.0e9, 7.0e9),
    abundance: 0.03,
};

static G_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(0.8, 1.04),
    radius_solar: ValueRange::new(0.96, 1.15),
    temperature_k: ValueRange::new(5_200.0, 6_000.0),
    luminosity_solar: ValueRange::new(0.6, 1.5),
    lifetime_years: ValueRange::new(7.0e9, 1.5e10),
    abundance: 0.076,
};

static K_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(0.45, 0.8),
    radius_solar: ValueRange::new(0.7, 0.96),
    temperature_k: ValueRange::new(3_700.0, 5_200.0),
    luminosity_solar: ValueRange::new(0.08, 0.6),
    lifetime_years: ValueRange::new(1.5e10, 7.0e10),
    abundance: 0.121,
};

static M_CLASS: StellarClassData = StellarClassData {
    mass_solar: ValueRange::new(0.08, 0.45),
    radius_solar: ValueRange::new(0.1, 0.7),
    temperature_k: ValueRange::new(2_400.0, 3_700.0),
    luminosity_solar: ValueRange::new(1.0e-4, 0.08),
    lifetime_years: ValueRange::new(7.0e10, 1.0e13),
    abundance: 0.7656,
};

/// Lower temperature bound of each class, hottest first.
const TEMP_BOUNDS: [(StellarClass, f64); 7] = [
    (StellarClass::O, 30_000.0),
    (StellarClass::B, 10_000.0),
    (StellarClass::A, 7_500.0),
    (StellarClass::F, 6_000.0),
    (StellarClass::G, 5_200.0),
    (StellarClass::K, 3_700.0),
    (StellarClass::M, 0.0),
];

impl StellarClass {
    pub const ALL: [StellarClass; 7] = [
        StellarClass::O,
        StellarClass::B,
        StellarClass::A,
        StellarClass::F,
        StellarClass::G,
        StellarClass::K,
        StellarClass::M,
    ];

    pub fn data(&self) -> &'static StellarClassData {
        match self {
            StellarClass::O => &O_CLASS,
            StellarClass::B => &B_CLASS,
            StellarClass::A => &A_CLASS,
            StellarClass::F => &F_CLASS,
            StellarClass::G => &G_CLASS,
            StellarClass::K => &K_CLASS,
            StellarClass::M => &M_CLASS,
        }
    }

    /// Classify by effective temperature.
    ///
    /// Anything below the M-class floor (including non-finite input) is
    /// reported as M.
    pub fn from_temperature(temperature_k: f64) -> Self {
        TEMP_BOUNDS
            .iter()
            .find(|(_, lower)| temperature_k >= *lower)
            .map(|(class, _)| *class)
            .unwrap_or(StellarClass::M)
    }

    /// Classify by mass in solar masses, using each row's lower mass bound.
    pub fn from_mass(mass_solar: f64) -> Self {
        Self::ALL
            .iter()
            .find(|class| mass_solar >= class.data().mass_solar.min)
            .copied()
            .unwrap_or(StellarClass::M)
    }

    /// Sub-rank (0–9) of a temperature within this class.
    ///
    /// Temperatures outside the class clamp to the nearest end.
    pub fn subrank_for_temperature(&self, temperature_k: f64) -> u8 {
        let range = self.data().temperature_k;
        if range.span() <= 0.0 || !temperature_k.is_finite() {
            return 0;
        }
        let fraction = ((range.max - temperature_k) / range.span()).clamp(0.0, 0.999_999);
        (fraction * 10.0).floor() as u8
    }

    pub fn temperature_at(&self, subrank: u8) -> f64 {
        interpolate(&self.data().temperature_k, subrank)
    }

    pub fn mass_at(&self, subrank: u8) -> f64 {
        interpolate(&self.data().mass_solar, subrank)
    }

    pub fn luminosity_at(&self, subrank: u8) -> f64 {
        interpolate(&self.data().luminosity_solar, subrank)
    }

    pub fn radius_at(&self, subrank: u8) -> f64 {
        interpolate(&self.data().radius_solar, subrank)
    }
}

impl fmt::Display for StellarClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            StellarClass::O => "O",
            StellarClass::B => "B",
            StellarClass::A => "A",
            StellarClass::F => "F",
            StellarClass::G => "G",
            StellarClass::K => "K",
            StellarClass::M => "M",
        };
        write!(f, "{}", str)
    }
}
