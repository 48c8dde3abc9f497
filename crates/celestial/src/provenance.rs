//! Generation provenance and schema-migration detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version of the serialized body layout produced by this crate.
///
/// Bump whenever a field is added, renamed or changes meaning.
pub const SCHEMA_VERSION: u32 = 1;

/// How a stored body relates to the running code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    /// Same schema and generator
    Current,
    /// Written by an older schema; needs migrating before use
    NeedsMigration { from: u32, to: u32 },
    /// Written by a newer schema than this runtime understands
    NewerThanRuntime { schema_version: u32, supported: u32 },
    /// Same schema, but regeneration from the seed would give a different body
    GeneratorChanged { recorded: String, running: String },
}

/// Seed, versions and time a body was generated with.
///
/// Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    generation_seed: u64,
    generator_version: String,
    schema_version: u32,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spec_snapshot: Option<Value>,
}

impl Provenance {
    /// Stamp for a body generated now by this schema version.
    pub fn new(generation_seed: u64, generator_version: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            generation_seed,
            generator_version: generator_version.into(),
            schema_version: SCHEMA_VERSION,
            created_at,
            spec_snapshot: None,
        }
    }

    /// Reconstruct a stamp with an explicit schema version, e.g. from an
    /// archived document.
    pub fn with_schema_version(mut self, schema_version: u32) -> Self {
        self.schema_version = schema_version;
        self
    }

    pub fn with_spec_snapshot(mut self, snapshot: Value) -> Self {
        self.spec_snapshot = Some(snapshot);
        self
    }

    pub fn generation_seed(&self) -> u64 {
        self.generation_seed
    }

    pub fn generator_version(&self) -> &str {
        &self.generator_version
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn spec_snapshot(&self) -> Option<&Value> {
        self.spec_snapshot.as_ref()
    }

    /// Compare this stamp with the running schema and generator.
    ///
    /// Schema differences take precedence over generator differences.
    pub fn compatibility(&self, running_generator_version: &str) -> Compatibility {
        if self.schema_version < SCHEMA_VERSION {
            Compatibility::NeedsMigration {
                from: self.schema_version,
                to: SCHEMA_VERSION,
            }
        } else if self.schema_version > SCHEMA_VERSION {
            Compatibility::NewerThanRuntime {
                schema_version: self.schema_version,
                supported: SCHEMA_VERSION,
            }
        } else if self.generator_version != running_generator_version {
            Compatibility::GeneratorChanged {
                recorded: self.generator_version.clone(),
                running: running_generator_version.to_string(),
            }
        } else {
            Compatibility::Current
        }
    }
}
