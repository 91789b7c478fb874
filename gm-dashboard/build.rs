//! Build script for gm-dashboard.
//!
//! Copies the Gapminder CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time, and warns early when its header is
//! missing a column the loader needs.

use std::env;
use std::fs;
use std::path::Path;

const SRC_PATH: &str = "../fixtures/gapminder.csv";
const DEST_NAME: &str = "gapminder.csv";
/// Written when the fixture is missing so the app still builds and loads.
const PLACEHOLDER_CSV: &str = "\
country,continent,year,lifeExp,pop,gdpPercap
Iceland,Europe,1952,72.49,147962,7267.688428
Iceland,Europe,2007,81.757,301931,36180.78919
";
const REQUIRED_COLUMNS: [&str; 5] = ["country", "year", "pop", "lifeExp", "gdpPercap"];

fn check_header(path: &Path) {
    let mut rdr = match csv::Reader::from_path(path) {
        Ok(rdr) => rdr,
        Err(e) => {
            println!("cargo:warning=Could not read {}: {}", SRC_PATH, e);
            return;
        }
    };
    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            println!("cargo:warning=Could not read header of {}: {}", SRC_PATH, e);
            return;
        }
    };
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            println!(
                "cargo:warning={} has no '{}' column; the dashboard will fail to load",
                SRC_PATH, column
            );
        }
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src = Path::new(SRC_PATH);
    let dest = Path::new(&out_dir).join(DEST_NAME);
    if src.exists() {
        check_header(src);
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", SRC_PATH, dest.display(), e);
        });
    } else {
        fs::write(&dest, PLACEHOLDER_CSV).unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using one-country placeholder",
            SRC_PATH
        );
    }
    println!("cargo:rerun-if-changed={}", SRC_PATH);
    println!("cargo:rerun-if-changed=build.rs");
}
