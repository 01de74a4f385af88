// crates/locator-core/src/error.rs
use thiserror::Error;

/// Errors raised while building a [`Gazetteer`](crate::Gazetteer).
///
/// Every variant is fatal for the load that produced it: no partially built
/// index is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cache")]
    #[error("snapshot (de)serialization failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// No resolution tier produced a match.
///
/// This is an expected outcome for unknown places, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no location matched the request")]
pub struct NotFound;

pub type Result<T> = std::result::Result<T, DecodeError>;
