//! Golden-master fixture corpus.
//!
//! A fixed, named list of generation requests covering every stellar class,
//! size category and orbit zone, the moon archetypes and the asteroid
//! classes. Every fixture is stamped with the J2000 epoch so the corpus is
//! byte-stable; any change to generation that alters it without a version
//! bump is a regression.

use std::collections::BTreeMap;

use celestial::serialization::to_json_compact;
use celestial::{CelestialBody, SCHEMA_VERSION};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tables::{OrbitZone, SizeCategory, StellarClass};
use tracing::debug;

use crate::GENERATOR_VERSION;
use crate::bodies::{generate_asteroid_at, generate_moon_at, generate_planet_at, generate_star_at};
use crate::context::ParentContext;
use crate::spec::{AsteroidSpec, MoonSpec, PlanetSpec, StarSpec};

/// 2000-01-01T12:00:00Z as a Unix timestamp
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Timestamp every fixture is stamped with.
pub fn fixture_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(J2000_UNIX_SECONDS, 0).unwrap_or_default()
}

/// One generation request, with the context it runs in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureSpec {
    Star(StarSpec),
    Planet {
        spec: PlanetSpec,
        context: ParentContext,
    },
    Moon {
        spec: MoonSpec,
        context: ParentContext,
    },
    Asteroid {
        spec: AsteroidSpec,
        context: ParentContext,
    },
}

impl FixtureSpec {
    pub fn seed(&self) -> u64 {
        match self {
            FixtureSpec::Star(spec) => spec.seed,
            FixtureSpec::Planet { spec, .. } => spec.seed,
            FixtureSpec::Moon { spec, .. } => spec.seed,
            FixtureSpec::Asteroid { spec, .. } => spec.seed,
        }
    }

    /// Generate the body with a fresh RNG from the spec's seed.
    pub fn generate(&self, created_at: DateTime<Utc>) -> CelestialBody {
        match self {
            FixtureSpec::Star(spec) => generate_star_at(spec, &mut spec.rng(), created_at),
            FixtureSpec::Planet { spec, context } => {
                generate_planet_at(spec, context, &mut spec.rng(), created_at)
            }
            FixtureSpec::Moon { spec, context } => {
                generate_moon_at(spec, context, &mut spec.rng(), created_at)
            }
            FixtureSpec::Asteroid { spec, context } => {
                generate_asteroid_at(spec, context, &mut spec.rng(), created_at)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub spec: FixtureSpec,
}

impl FixtureCase {
    fn new(name: impl Into<String>, spec: FixtureSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// A fixture case together with the body it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub spec: FixtureSpec,
    pub body: CelestialBody,
}

fn planet(name: &str, seed: u64, category: SizeCategory, zone: OrbitZone) -> FixtureCase {
    FixtureCase::new(
        name,
        FixtureSpec::Planet {
            spec: PlanetSpec::of(seed, category, zone),
            context: ParentContext::sun_like(),
        },
    )
}

fn moon(name: &str, spec: MoonSpec, context: ParentContext) -> FixtureCase {
    FixtureCase::new(name, FixtureSpec::Moon { spec, context })
}

fn asteroid(name: &str, spec: AsteroidSpec) -> FixtureCase {
    FixtureCase::new(
        name,
        FixtureSpec::Asteroid {
            spec,
            context: ParentContext::sun_like(),
        },
    )
}

/// The named fixture requests, in corpus order.
pub fn fixture_cases() -> Vec<FixtureCase> {
    let mut cases: Vec<FixtureCase> = StellarClass::ALL
        .iter()
        .enumerate()
        .map(|(i, class)| {
            let seed = match class {
                StellarClass::G => 42_000,
                _ => 41_000 + i as u64,
            };
            FixtureCase::new(
                format!("star_{}", class.to_string().to_lowercase()),
                FixtureSpec::Star(StarSpec::of_class(seed, *class)),
            )
        })
        .collect();

    cases.extend([
        planet("planet_dwarf_frozen", 43_001, SizeCategory::Dwarf, OrbitZone::Frozen),
        planet("planet_lunar_warm", 43_002, SizeCategory::Lunar, OrbitZone::Warm),
        planet("planet_terrestrial_temperate", 43_003, SizeCategory::Terrestrial, OrbitZone::Temperate),
        planet("planet_super_earth_cold", 43_004, SizeCategory::SuperEarth, OrbitZone::Cold),
        planet("planet_ice_giant_frozen", 43_005, SizeCategory::IceGiant, OrbitZone::Frozen),
        planet("planet_gas_giant_cold", 43_006, SizeCategory::GasGiant, OrbitZone::Cold),
        planet("planet_hot_jupiter", 43_007, SizeCategory::GasGiant, OrbitZone::Hot),
        planet("planet_terrestrial_hot", 43_008, SizeCategory::Terrestrial, OrbitZone::Hot),
    ]);

    cases.extend([
        moon("moon_titan", MoonSpec::titan_like(44_001), ParentContext::jupiter_like()),
        moon("moon_europa", MoonSpec::europa_like(44_002), ParentContext::jupiter_like()),
        moon("moon_io", MoonSpec::io_like(44_003), ParentContext::jupiter_like()),
        moon("moon_luna", MoonSpec::luna_like(44_004), ParentContext::earth_like()),
        moon("moon_captured", MoonSpec::captured(44_005), ParentContext::jupiter_like()),
    ]);

    cases.extend([
        asteroid("asteroid_c_type", AsteroidSpec::carbonaceous(45_001)),
        asteroid("asteroid_s_type", AsteroidSpec::silicaceous(45_002)),
        asteroid("asteroid_m_type", AsteroidSpec::metallic(45_003)),
        asteroid("asteroid_ceres", AsteroidSpec::ceres_like(45_004)),
    ]);

    cases
}

/// Generate every fixture at the fixture epoch.
///
/// Cases are independent, so they run in parallel; output keeps corpus order.
pub fn build_fixture_corpus() -> Vec<Fixture> {
    let epoch = fixture_epoch();
    let corpus: Vec<Fixture> = fixture_cases()
        .into_par_iter()
        .map(|case| {
            let body = case.spec.generate(epoch);
            Fixture {
                name: case.name,
                spec: case.spec,
                body,
            }
        })
        .collect();
    debug!(fixtures = corpus.len(), "built fixture corpus");
    corpus
}

// =============================================================================
// Corpus digest
// =============================================================================

/// SHA-256 of every fixture body's compact JSON, keyed by case name, with
/// the versions that produced them. Checked in next to the tests and
/// compared against a fresh build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusDigest {
    pub generator_version: String,
    pub schema_version: u32,
    pub bodies: BTreeMap<String, String>,
}

impl CorpusDigest {
    pub fn of(corpus: &[Fixture]) -> celestial::Result<Self> {
        let bodies = corpus
            .iter()
            .map(|fixture| {
                let json = to_json_compact(&fixture.body)?;
                Ok((fixture.name.clone(), hex::encode(Sha256::digest(json.as_bytes()))))
            })
            .collect::<celestial::Result<BTreeMap<_, _>>>()?;
        Ok(Self {
            generator_version: GENERATOR_VERSION.to_string(),
            schema_version: SCHEMA_VERSION,
            bodies,
        })
    }

    /// Whether this digest was recorded by the running generator and schema.
    pub fn is_current_version(&self) -> bool {
        self.generator_version == GENERATOR_VERSION && self.schema_version == SCHEMA_VERSION
    }

    /// Case names whose digest differs, or that exist on only one side.
    pub fn changed_cases(&self, other: &CorpusDigest) -> Vec<String> {
        let mut names: Vec<String> = self
            .bodies
            .iter()
            .filter(|(name, digest)| other.bodies.get(*name) != Some(*digest))
            .map(|(name, _)| name.clone())
            .collect();
        names.extend(
            other
                .bodies
                .keys()
                .filter(|name| !self.bodies.contains_key(*name))
                .cloned(),
        );
        names
    }
}
