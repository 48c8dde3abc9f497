//! Body generators.
//!
//! Each generator threads one [`SeededRng`] through its component
//! generators in a fixed order, so a body is a pure function of the spec,
//! the context, the RNG's seed and the creation timestamp. The plain
//! `generate_*` functions stamp the current time; the `*_at` variants take
//! it explicitly for fixtures and determinism checks.

mod asteroid;
mod envelope;
mod moon;
mod planet;
mod star;

pub use asteroid::{generate_asteroid, generate_asteroid_at};
pub use moon::{generate_moon, generate_moon_at};
pub use planet::{generate_planet, generate_planet_at};
pub use star::{generate_star, generate_star_at};

use celestial::{BodyType, Provenance};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::GENERATOR_VERSION;
use crate::context::ParentContext;
use crate::rng::SeededRng;

/// Id and display name drawn at the start of every generation.
pub(crate) struct Identity {
    pub id: String,
    pub name: String,
}

impl Identity {
    /// Draw sixteen bytes from the RNG and hash them, together with the
    /// body type, into a v5 UUID. Bodies of different types generated from
    /// the same seed therefore get different ids. Without an explicit name
    /// the body gets a catalog designation derived from the id.
    pub fn draw(rng: &mut SeededRng, body_type: BodyType, name: Option<&str>) -> Self {
        let uuid = body_uuid(body_type, &rng.bytes());
        let name = name.map_or_else(|| catalog_name(&uuid), str::to_string);
        Self {
            id: uuid.to_string(),
            name,
        }
    }
}

/// Name-based UUID over `"<BodyType>:"` followed by the random bytes.
fn body_uuid(body_type: BodyType, bytes: &[u8; 16]) -> Uuid {
    let mut name = format!("{}:", body_type).into_bytes();
    name.extend_from_slice(bytes);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, &name)
}

/// Short catalog designation from a UUID: two letters and four digits,
/// e.g. "KV-4729". The same UUID always gives the same designation.
pub fn catalog_name(id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let prefix1 = (bytes[0] % 26 + b'A') as char;
    let prefix2 = (bytes[1] % 26 + b'A') as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
    format!("{}{}-{:04}", prefix1, prefix2, number)
}

#[derive(Serialize)]
struct SpecSnapshot<'a, S> {
    spec: &'a S,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a ParentContext>,
}

/// Provenance for a body generated from `spec` (and `context`) with `rng`.
pub(crate) fn stamp<S: Serialize>(
    rng: &SeededRng,
    spec: &S,
    context: Option<&ParentContext>,
    created_at: DateTime<Utc>,
) -> Provenance {
    let provenance = Provenance::new(rng.seed(), GENERATOR_VERSION, created_at);
    match serde_json::to_value(SpecSnapshot { spec, context }) {
        Ok(snapshot) => provenance.with_spec_snapshot(snapshot),
        Err(err) => {
            warn!(seed = rng.seed(), error = %err, "spec snapshot not serializable, provenance stored without it");
            provenance
        }
    }
}
