// crates/locator-core/src/model/domain.rs
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale code -> localized name. At most one value per locale.
pub type Translations = BTreeMap<String, String>;

/// The gazetteer: every known country keyed by its code.
///
/// Built once by the loader and never mutated afterwards, so a single value
/// can be shared by reference across any number of threads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Gazetteer {
    /// Ordered map so iteration (and nearest-city tie-breaking) is stable.
    pub(crate) countries: BTreeMap<String, Country>,
}

/// A Country entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,

    /// City name -> City. Names are unique within a country.
    pub(crate) cities: BTreeMap<String, City>,

    /// Key into `cities`, never a copy, so it cannot point outside this country.
    pub(crate) primary_city: Option<String>,

    pub translations: Translations,
}

/// A City entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub code: String,
    pub country_code: String,
    pub name: String,
    pub coordinates: Option<Coordinates>,
    pub timezone: String,
    pub translations: Translations,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            cities: BTreeMap::new(),
            primary_city: None,
            translations: Translations::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive lookup by the dataset's city name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Cities ordered by name.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.values()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn primary_city(&self) -> Option<&City> {
        self.primary_city
            .as_deref()
            .and_then(|name| self.cities.get(name))
    }
}

impl City {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn is_geocoded(&self) -> bool {
        self.coordinates.is_some()
    }

    /// `"<lng>:<lat>"`, or an empty string when the city has no coordinates.
    pub fn coordinates_string(&self) -> String {
        self.coordinates
            .map(|c| c.to_lng_lat_string())
            .unwrap_or_default()
    }
}
