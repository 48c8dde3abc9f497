use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::provenance::*;

fn stamp() -> Provenance {
    Provenance::new(42_000, "0.3.0", Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap())
}

#[test]
fn test_new_stamp_uses_current_schema() {
    let provenance = stamp();
    assert_eq!(provenance.generation_seed(), 42_000);
    assert_eq!(provenance.generator_version(), "0.3.0");
    assert_eq!(provenance.schema_version(), SCHEMA_VERSION);
    assert!(provenance.spec_snapshot().is_none());
}

#[test]
fn test_current_when_versions_match() {
    assert_eq!(stamp().compatibility("0.3.0"), Compatibility::Current);
}

#[test]
fn test_generator_change_detected() {
    assert_eq!(
        stamp().compatibility("0.4.0"),
        Compatibility::GeneratorChanged {
            recorded: "0.3.0".to_string(),
            running: "0.4.0".to_string(),
        }
    );
}

#[test]
fn test_older_schema_needs_migration() {
    let old = stamp().with_schema_version(0);
    assert_eq!(
        old.compatibility("0.4.0"),
        Compatibility::NeedsMigration {
            from: 0,
            to: SCHEMA_VERSION
        }
    );
}

#[test]
fn test_newer_schema_is_flagged() {
    let future = stamp().with_schema_version(SCHEMA_VERSION + 1);
    assert_eq!(
        future.compatibility("0.3.0"),
        Compatibility::NewerThanRuntime {
            schema_version: SCHEMA_VERSION + 1,
            supported: SCHEMA_VERSION
        }
    );
}

#[test]
fn test_spec_snapshot_is_kept() {
    let provenance = stamp().with_spec_snapshot(json!({ "seed": 42000, "class": "G" }));
    assert_eq!(provenance.spec_snapshot().and_then(|s| s["class"].as_str()), Some("G"));
}
