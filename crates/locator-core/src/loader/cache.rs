// crates/locator-core/src/loader/cache.rs
#![cfg(feature = "cache")]

//! Binary snapshot of a built gazetteer.
//!
//! Decoding JSON for a large dataset dominates startup time; the snapshot is
//! the same index serialized with bincode (and gzipped with `compact`).

use super::common_io;
use crate::error::{DecodeError, Result};
use crate::model::{Gazetteer, CACHE_SUFFIX};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Guards against corrupted or hostile snapshot files.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

/// Size and modification time of the JSON a cached snapshot was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SourceStamp {
    len: u64,
    mtime_secs: u64,
    mtime_nanos: u32,
}

impl SourceStamp {
    fn of(path: &Path) -> Option<Self> {
        let meta = fs::metadata(path).ok()?;
        let since_epoch = meta.modified().ok()?.duration_since(UNIX_EPOCH).ok()?;
        Some(Self {
            len: meta.len(),
            mtime_secs: since_epoch.as_secs(),
            mtime_nanos: since_epoch.subsec_nanos(),
        })
    }
}

/// What `load_cached` keeps next to the JSON source.
#[derive(Serialize, Deserialize)]
struct CachedSnapshot {
    source: SourceStamp,
    gazetteer: Gazetteer,
}

impl Gazetteer {
    /// **Smart Load:** reuses the snapshot next to `json_path` when it was
    /// built from a source with the same size and mtime; otherwise builds from
    /// the JSON and rewrites the snapshot.
    ///
    /// Failing to write the snapshot is logged and otherwise ignored.
    pub fn load_cached(json_path: impl AsRef<Path>) -> Result<Self> {
        let json_path = json_path.as_ref();
        let cache_path = common_io::get_cache_path(json_path, CACHE_SUFFIX);
        let stamp = SourceStamp::of(json_path);

        if let Some(stamp) = stamp {
            match read_generic::<CachedSnapshot>(&cache_path) {
                Ok(cached) if cached.source == stamp => {
                    tracing::debug!(path = %cache_path.display(), "snapshot reused");
                    return Ok(cached.gazetteer);
                }
                Ok(_) => tracing::debug!(path = %cache_path.display(), "snapshot stale, rebuilding"),
                Err(DecodeError::DatasetNotFound(_)) => {}
                Err(e) => tracing::warn!(path = %cache_path.display(), error = %e, "snapshot unreadable, rebuilding"),
            }
        }

        let gazetteer = Self::load_from_path(json_path)?;
        let Some(source) = stamp else {
            return Ok(gazetteer);
        };

        let cached = CachedSnapshot { source, gazetteer };
        if let Err(e) = write_generic(&cache_path, &cached) {
            tracing::warn!(path = %cache_path.display(), error = %e, "could not write snapshot");
        }
        Ok(cached.gazetteer)
    }

    /// Writes the gazetteer as a binary snapshot.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), self)
    }

    /// Reads a snapshot written by [`save_as`](Self::save_as).
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        read_generic(path.as_ref())
    }
}

fn write_generic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(DecodeError::Io)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        snapshot_options().serialize_into(&mut encoder, value)?;
        encoder.finish()?.flush()?;
    }
    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        snapshot_options().serialize_into(&mut writer, value)?;
        writer.flush()?;
    }
    Ok(())
}

fn read_generic<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        DecodeError::DatasetNotFound(format!("{}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    let reader: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let reader: Box<dyn Read> = Box::new(reader);

    Ok(snapshot_options().deserialize_from(reader)?)
}
