use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Locale used when a request does not name one.
pub const DEFAULT_LOCALE: &str = "ru";

/// CLI arguments for locator
#[derive(Debug, Parser)]
#[command(
    name = "locator",
    version,
    about = "Resolve geolocation records to localized city and country names"
)]
pub struct CliArgs {
    /// Dataset file(s), JSON or JSON.gz. Repeat to merge several files in order.
    /// Defaults to ./configs/cities.json
    #[arg(short = 'd', long = "dataset", global = true)]
    pub datasets: Vec<PathBuf>,

    /// Always parse the JSON dataset, never read or write the binary snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a place from its parts
    Lookup {
        /// Country code (e.g. FR)
        #[arg(short = 'c', long, default_value = "")]
        country: String,

        /// City name as spelled in the dataset
        #[arg(long, default_value = "")]
        city: String,

        /// Latitude; 0 together with --lng 0 means "no fix"
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lng: f64,

        #[arg(short = 'l', long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },

    /// Resolve a geolocation record stored as JSON
    /// ({country_code, country_name, city_name, latitude, longitude, timezone})
    Resolve {
        /// Path to the record; an unreadable record is replaced by the empty default
        record: PathBuf,

        #[arg(short = 'l', long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },

    /// Show a summary of the gazetteer
    Stats,

    /// Show a country, its primary city and its translations
    Country {
        /// Country code (e.g. FR)
        code: String,
    },

    /// Search for cities whose name or translation contains a substring
    Cities {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },

    /// Write a binary snapshot of the gazetteer
    #[cfg(feature = "cache")]
    Build {
        /// Output file
        out: PathBuf,
    },
}
