//! locator: command-line front end for locator-core
//!
//! Loads the city dataset once, then answers a single query against it.
//!
//! Usage examples
//! --------------
//!
//! - Resolve by country and city (exact match or the country's primary city)
//!   $ locator lookup --country FR --city Lyon --locale en
//!
//! - Resolve by coordinates (nearest city within 100 km)
//!   $ locator lookup --lat 48.85 --lng 2.35
//!
//! - Resolve a record produced by an IP geolocation service
//!   $ locator resolve record.json --locale de
//!
//! - Inspect the dataset
//!   $ locator stats
//!   $ locator country FR
//!   $ locator cities zur
//!
//! Logging goes to stderr and honours `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use locator_core::{Gazetteer, GazetteerIndex, GeoRecord, Location, ResolutionEngine};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("locator=info,locator_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let datasets = if args.datasets.is_empty() {
        vec![Gazetteer::default_dataset_path()]
    } else {
        args.datasets
    };

    let started = Instant::now();
    let db = load_gazetteer(&datasets, args.no_cache)
        .with_context(|| format!("failed to load dataset(s) {datasets:?}"))?;
    info!(took_ms = started.elapsed().as_millis() as u64, "gazetteer ready");

    let engine = ResolutionEngine::new(&db);

    match args.command {
        Commands::Lookup {
            country,
            city,
            lat,
            lng,
            locale,
        } => {
            let loc = engine.lookup(&country, &city, lat, lng, &locale);
            return report(loc, &locale);
        }

        Commands::Resolve { record, locale } => {
            let record = read_record(&record);
            let loc = engine.lookup_record(&record, &locale);
            return report(loc, &locale);
        }

        Commands::Stats => {
            let stats = db.stats();
            println!("Gazetteer statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  Geocoded cities: {}", stats.geocoded);
        }

        Commands::Country { code } => match db.country(&code) {
            Some(c) => {
                println!("Country: {} ({})", c.name(), c.code());
                println!("Cities: {}", c.city_count());
                match c.primary_city() {
                    Some(p) => println!("Primary city: {} ({})", p.name(), p.code()),
                    None => println!("Primary city: -"),
                }
                for (locale, name) in &c.translations {
                    println!("  [{locale}] {name}");
                }
            }
            None => {
                eprintln!("No country found for: {code}");
                return Ok(ExitCode::from(2));
            }
        },

        Commands::Cities { query } => {
            let matches = db.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for (country, city) in matches {
                    let coords = city.coordinates_string();
                    println!(
                        "{} ({}) — {} [{}]",
                        city.name(),
                        city.code(),
                        country.name(),
                        if coords.is_empty() { "-" } else { coords.as_str() }
                    );
                }
            }
        }

        #[cfg(feature = "cache")]
        Commands::Build { out } => {
            db.save_as(&out)
                .with_context(|| format!("failed to write snapshot {}", out.display()))?;
            println!("Snapshot written to {}", out.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_gazetteer(datasets: &[PathBuf], no_cache: bool) -> locator_core::Result<Gazetteer> {
    #[cfg(feature = "cache")]
    if let [single] = datasets {
        if !no_cache {
            return Gazetteer::load_cached(single);
        }
    }
    #[cfg(not(feature = "cache"))]
    let _ = no_cache;

    Gazetteer::load_from_paths(datasets)
}

/// Reads a geolocation record, substituting the default record on failure.
fn read_record(path: &Path) -> GeoRecord {
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|s| serde_json::from_str::<GeoRecord>(&s).map_err(anyhow::Error::from));
    match parsed {
        Ok(record) => record,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "geolocation record unusable, using default");
            GeoRecord::default()
        }
    }
}

/// Prints the wire form of a location, or reports the miss.
fn report(loc: Option<Location>, locale: &str) -> anyhow::Result<ExitCode> {
    match loc {
        Some(loc) => {
            info!(
                approach = %loc.approach,
                city = %loc.city_iata,
                timezone = %loc.timezone,
                "processed in {:.3} ms",
                loc.took.as_secs_f64() * 1000.0
            );
            println!("{}", serde_json::to_string(&loc)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            info!(locale, "location lookup failed");
            eprintln!("Location not found");
            Ok(ExitCode::from(2))
        }
    }
}
