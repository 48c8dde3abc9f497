//! Size categories for non-stellar bodies.
//!
//! Categories are mass-bounded; radius and density ranges describe what is
//! typical for each regime and are used to bound random draws.
//!
//! # Reference bodies
//! - Tiny: Vesta and smaller (rubble piles, monoliths)
//! - Dwarf: Ceres, Pluto, Enceladus
//! - Lunar: the Moon, Europa, Titan, Ganymede
//! - Terrestrial: Mercury through ~2 M⊕
//! - SuperEarth: 2–10 M⊕
//! - IceGiant: Uranus, Neptune (10–50 M⊕)
//! - GasGiant: Saturn up to the deuterium-burning limit (~13 M♃)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::ValueRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeCategory {
    Tiny,
    Dwarf,
    Lunar,
    Terrestrial,
    SuperEarth,
    IceGiant,
    GasGiant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCategoryData {
    pub mass_kg: ValueRange,
    pub radius_m: ValueRange,
    /// Bulk density (kg/m³)
    pub density_kg_m3: ValueRange,
    /// Chance that a body passing the Jeans gate actually keeps an atmosphere
    pub atmosphere_probability: f64,
    pub ring_probability: f64,
}

static TINY: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(1.0e10, 1.0e19),
    radius_m: ValueRange::new(100.0, 2.0e5),
    density_kg_m3: ValueRange::new(1_000.0, 5_500.0),
    atmosphere_probability: 0.0,
    ring_probability: 0.01,
};

static DWARF: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(1.0e19, 1.0e22),
    radius_m: ValueRange::new(2.0e5, 1.3e6),
    density_kg_m3: ValueRange::new(1_500.0, 3_500.0),
    atmosphere_probability: 0.1,
    ring_probability: 0.02,
};

static LUNAR: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(1.0e22, 3.0e23),
    radius_m: ValueRange::new(1.0e6, 2.7e6),
    density_kg_m3: ValueRange::new(1_800.0, 3_600.0),
    atmosphere_probability: 0.3,
    ring_probability: 0.01,
};

static TERRESTRIAL: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(3.0e23, 1.2e25),
    radius_m: ValueRange::new(2.4e6, 8.0e6),
    density_kg_m3: ValueRange::new(3_900.0, 5_600.0),
    atmosphere_probability: 0.85,
    ring_probability: 0.02,
};

static SUPER_EARTH: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(1.2e25, 6.0e25),
    radius_m: ValueRange::new(7.0e6, 1.6e7),
    density_kg_m3: ValueRange::new(3_000.0, 8_000.0),
    atmosphere_probability: 0.95,
    ring_probability: 0.05,
};

static ICE_GIANT: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(6.0e25, 3.0e26),
    radius_m: ValueRange::new(1.5e7, 3.2e7),
    density_kg_m3: ValueRange::new(1_000.0, 2_000.0),
    atmosphere_probability: 1.0,
    ring_probability: 0.5,
};

static GAS_GIANT: SizeCategoryData = SizeCategoryData {
    mass_kg: ValueRange::new(3.0e26, 2.5e28),
    radius_m: ValueRange::new(4.5e7, 1.4e8),
    density_kg_m3: ValueRange::new(200.0, 2_000.0),
    atmosphere_probability: 1.0,
    ring_probability: 0.8,
};

impl SizeCategory {
    pub const ALL: [SizeCategory; 7] = [
        SizeCategory::Tiny,
        SizeCategory::Dwarf,
        SizeCategory::Lunar,
        SizeCategory::Terrestrial,
        SizeCategory::SuperEarth,
        SizeCategory::IceGiant,
        SizeCategory::GasGiant,
    ];

    pub fn data(&self) -> &'static SizeCategoryData {
        match self {
            SizeCategory::Tiny => &TINY,
            SizeCategory::Dwarf => &DWARF,
            SizeCategory::Lunar => &LUNAR,
            SizeCategory::Terrestrial => &TERRESTRIAL,
            SizeCategory::SuperEarth => &SUPER_EARTH,
            SizeCategory::IceGiant => &ICE_GIANT,
            SizeCategory::GasGiant => &GAS_GIANT,
        }
    }

    /// Classify by mass. Bodies heavier than the gas-giant floor are giants,
    /// anything at or below the Tiny floor is Tiny.
    pub fn from_mass(mass_kg: f64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .find(|category| mass_kg >= category.data().mass_kg.min)
            .copied()
            .unwrap_or(SizeCategory::Tiny)
    }

    /// Giants have no solid surface; surface components are never generated.
    pub fn is_giant(&self) -> bool {
        matches!(self, SizeCategory::IceGiant | SizeCategory::GasGiant)
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeCategory::Tiny => "Tiny",
            SizeCategory::Dwarf => "Dwarf",
            SizeCategory::Lunar => "Lunar",
            SizeCategory::Terrestrial => "Terrestrial",
            SizeCategory::SuperEarth => "Super-Earth",
            SizeCategory::IceGiant => "Ice Giant",
            SizeCategory::GasGiant => "Gas Giant",
        };
        write!(f, "{}", name)
    }
}
