//! The fixture corpus against its checked-in digest.
//!
//! `tests/fixtures/corpus_digest.json` records a SHA-256 per fixture body
//! and the generator and schema versions that produced them. A rebuild
//! under the same versions must reproduce every digest. After a version
//! bump, or with `FORGE_BLESS_FIXTURES=1`, the file is rewritten; commit
//! the result.

use std::fs;
use std::path::PathBuf;

use celestial::serialization::{from_json, to_json_pretty};
use forge::{CorpusDigest, build_fixture_corpus};

fn digest_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/corpus_digest.json")
}

fn record(digest: &CorpusDigest) {
    let path = digest_path();
    fs::write(&path, to_json_pretty(digest).unwrap() + "\n").unwrap();
    eprintln!("recorded fixture digest at {}", path.display());
}

#[test]
fn corpus_matches_recorded_digest() {
    let fresh = CorpusDigest::of(&build_fixture_corpus()).unwrap();
    let bless = std::env::var_os("FORGE_BLESS_FIXTURES").is_some();

    let recorded = match fs::read_to_string(digest_path()) {
        Ok(json) if !bless => from_json::<CorpusDigest>(&json).unwrap(),
        _ => {
            record(&fresh);
            return;
        }
    };

    if !recorded.is_current_version() {
        eprintln!(
            "fixture digest recorded by {} (schema {}), re-recording",
            recorded.generator_version, recorded.schema_version
        );
        record(&fresh);
        return;
    }

    let changed = recorded.changed_cases(&fresh);
    assert!(
        changed.is_empty(),
        "fixture output changed without a generator or schema version bump: {:?}",
        changed
    );
}
