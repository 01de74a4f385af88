// crates/locator-core/src/location.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which resolution tier produced a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    ExactMatch,
    PrimaryCity,
    ClosestCity,
}

impl Approach {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::ExactMatch => "exact_match",
            Approach::PrimaryCity => "primary_city",
            Approach::ClosestCity => "closest_city",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved, localized place.
///
/// Only `iata`, `name`, `country_name` and `coordinates` go over the wire; the
/// remaining fields are diagnostics for the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Code of the resolved country.
    pub iata: String,
    /// Localized city name.
    pub name: String,
    pub country_name: String,
    /// `"<lng>:<lat>"`, empty when the city has no coordinates.
    pub coordinates: String,

    #[serde(skip)]
    pub city_iata: String,
    #[serde(skip)]
    pub timezone: String,
    #[serde(skip)]
    pub approach: Approach,
    #[serde(skip)]
    pub took: Duration,
}

/// What the IP-resolution collaborator knows about a client address.
///
/// When that lookup fails the collaborator hands over
/// `GeoRecord::default()` instead: empty codes and the `(0, 0)` "no fix"
/// point, which resolves to nothing rather than to a wrong place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_hides_diagnostics() {
        let loc = Location {
            iata: "FR".into(),
            name: "Paris".into(),
            country_name: "France".into(),
            coordinates: "2.3522:48.8566".into(),
            city_iata: "PAR".into(),
            timezone: "Europe/Paris".into(),
            approach: Approach::ExactMatch,
            took: Duration::from_micros(12),
        };
        let json: serde_json::Value = serde_json::to_value(&loc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "iata": "FR",
                "name": "Paris",
                "country_name": "France",
                "coordinates": "2.3522:48.8566"
            })
        );
    }

    #[test]
    fn approach_tags() {
        assert_eq!(Approach::ExactMatch.to_string(), "exact_match");
        assert_eq!(Approach::PrimaryCity.as_str(), "primary_city");
        assert_eq!(Approach::ClosestCity.as_str(), "closest_city");
    }

    #[test]
    fn partial_record_fills_defaults() {
        let rec: GeoRecord = serde_json::from_str(r#"{"country_code":"FR"}"#).unwrap();
        assert_eq!(rec.country_code, "FR");
        assert_eq!(rec.latitude, 0.0);
        assert_eq!(rec.city_name, "");
    }
}
