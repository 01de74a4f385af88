// crates/locator-core/src/lib.rs

//! # locator-core
//!
//! Resolves a geolocation record (country code, city name, coordinates) to a
//! localized city/country name.
//!
//! ```no_run
//! use locator_core::{Gazetteer, ResolutionEngine};
//!
//! let db = Gazetteer::load_from_path("configs/cities.json")?;
//! let engine = ResolutionEngine::new(&db);
//!
//! if let Some(loc) = engine.lookup("FR", "Lyon", 45.76, 4.84, "ru") {
//!     println!("{} ({}) via {}", loc.name, loc.country_name, loc.approach);
//! }
//! # Ok::<(), locator_core::DecodeError>(())
//! ```

pub mod common;
pub mod engine;
pub mod error;
pub mod geo;
pub mod loader;
pub mod location;
pub mod model;
pub mod text;
pub mod traits;
pub mod translate;

// Re-exports
pub use crate::common::raw::{CityRecord, TranslationRecord};
pub use crate::common::GazetteerStats;
pub use crate::engine::{ClosestCity, ExactMatch, PrimaryCity, ResolutionEngine, Strategy};
pub use crate::error::{DecodeError, NotFound, Result};
pub use crate::geo::Coordinates;
pub use crate::location::{Approach, GeoRecord, Location};
pub use crate::model::{City, Country, Gazetteer};
pub use crate::traits::{GazetteerIndex, Translated};
pub use crate::translate::FALLBACK_LOCALE;
