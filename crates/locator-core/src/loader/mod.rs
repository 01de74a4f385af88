// crates/locator-core/src/loader/mod.rs

//! # Dataset Loader
//!
//! Handles the physical layer (files, gzip) and turns dataset records into a
//! [`Gazetteer`]. Every entry point builds a fresh, independent index and
//! either succeeds completely or fails with a [`DecodeError`].

use crate::common::raw::{CitiesRaw, CityRecord};
use crate::error::{DecodeError, Result};
use crate::model::{convert, Gazetteer};
use crate::traits::GazetteerIndex;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;

#[cfg(feature = "cache")]
mod cache;

impl Gazetteer {
    /// Where the CLI looks for a dataset when none is given.
    pub fn default_dataset_path() -> PathBuf {
        PathBuf::from("configs").join("cities.json")
    }

    /// Builds a gazetteer from already parsed records, in order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CityRecord>,
    {
        convert::from_raw(records)
    }

    /// Parses a JSON array of dataset records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_reader(reader).map_err(DecodeError::Json)?;
        Ok(Self::from_records(raw))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_str(json).map_err(DecodeError::Json)?;
        Ok(Self::from_records(raw))
    }

    /// Loads one dataset file (`.json` or `.json.gz`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_paths([path])
    }

    /// Loads several dataset files into one gazetteer.
    ///
    /// Files are merged in the given order with the same rules as records
    /// within a single file. All files are parsed before the index is built,
    /// so one bad file fails the whole load.
    pub fn load_from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut batches: Vec<CitiesRaw> = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let reader = common_io::open_stream(path)?;
            let raw: CitiesRaw = serde_json::from_reader(reader).map_err(DecodeError::Json)?;
            tracing::debug!(path = %path.display(), records = raw.len(), "dataset parsed");
            batches.push(raw);
        }

        let db = Self::from_records(batches.into_iter().flatten());
        let stats = db.stats();
        tracing::info!(
            countries = stats.countries,
            cities = stats.cities,
            geocoded = stats.geocoded,
            "gazetteer built"
        );
        Ok(db)
    }
}
