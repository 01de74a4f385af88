// crates/locator-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod search;

pub use domain::{City, Country, Gazetteer, Translations};

/// The file suffix used for the binary snapshot of a gazetteer.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "snapshot.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "snapshot.comp.bin";
