//! Print the golden-master fixture corpus as pretty JSON
//!
//! Usage: cargo run -p forge --example fixture_corpus > fixtures.json

use celestial::serialization::to_json_pretty;
use forge::build_fixture_corpus;

fn main() {
    let corpus = build_fixture_corpus();
    match to_json_pretty(&corpus) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("failed to encode corpus: {}", err);
            std::process::exit(1);
        }
    }
    eprintln!("Wrote {} fixtures", corpus.len());
}
