// crates/locator-core/src/common.rs
//! Shared types: raw dataset records and aggregate statistics.

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the gazetteer.
///
/// Returned by [`Gazetteer::stats`](crate::Gazetteer::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub countries: usize,
    pub cities: usize,
    /// Cities carrying a latitude/longitude pair.
    pub geocoded: usize,
}

pub mod raw {
    use serde::{Deserialize, Deserializer, Serialize};

    /// Treats an explicit `null` like a missing key.
    ///
    /// The exporter writes absent attributes (no IATA code, no timezone) as
    /// `null`; those records must still load.
    fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Option::<T>::deserialize(d).map(Option::unwrap_or_default)
    }

    /// One entry of the dataset file, exactly as it appears in the JSON array.
    ///
    /// ```json
    /// {
    ///   "city": "Paris", "city_iata": "PAR",
    ///   "country": "France", "country_iata": "FR",
    ///   "latitude": 48.8566, "longitude": 2.3522,
    ///   "timezone": "Europe/Paris", "is_primary": true,
    ///   "translations": [{ "locale": "ru", "country": "Франция", "city": "Париж" }]
    /// }
    /// ```
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct CityRecord {
        #[serde(default, deserialize_with = "null_as_default")]
        pub city: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub city_iata: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub country: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub country_iata: String,
        #[serde(default)]
        pub latitude: Option<f64>,
        #[serde(default)]
        pub longitude: Option<f64>,
        #[serde(default, deserialize_with = "null_as_default")]
        pub timezone: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub is_primary: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        pub translations: Vec<TranslationRecord>,
    }

    /// A `{locale, country, city}` triple attached to a [`CityRecord`].
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct TranslationRecord {
        #[serde(default, deserialize_with = "null_as_default")]
        pub locale: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub country: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub city: String,
    }

    pub type CitiesRaw = Vec<CityRecord>;
}
