//! Structured-value and JSON encodings of bodies and belt fields.
//!
//! Pretty and compact JSON come from the same in-memory form. Decoding and
//! re-encoding an unchanged document reproduces it byte for byte: maps are
//! ordered and floats round-trip exactly.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::body::CelestialBody;
use crate::error::{Result, SerializationError};
use crate::provenance::SCHEMA_VERSION;

/// Convert to a nested map/list value.
pub fn to_value<T: Serialize>(item: &T) -> Result<Value> {
    Ok(serde_json::to_value(item)?)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Indented, human-readable JSON.
pub fn to_json_pretty<T: Serialize>(item: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

pub fn to_json_compact<T: Serialize>(item: &T) -> Result<String> {
    Ok(serde_json::to_string(item)?)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a body, rejecting documents written by a newer schema.
///
/// Older schemas decode successfully; callers inspect
/// [`crate::Provenance::compatibility`] to decide on migration.
pub fn body_from_json(json: &str) -> Result<CelestialBody> {
    let body: CelestialBody = from_json(json)?;
    if let Some(provenance) = &body.provenance
        && provenance.schema_version() > SCHEMA_VERSION
    {
        return Err(SerializationError::UnsupportedSchema {
            found: provenance.schema_version(),
            supported: SCHEMA_VERSION,
        });
    }
    debug!(id = %body.id, body_type = %body.body_type, "decoded body");
    Ok(body)
}
