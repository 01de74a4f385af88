// crates/locator-core/src/traits.rs
use crate::model::{City, Country, Translations};

/// Entities that carry a locale -> name mapping.
///
/// Implemented by [`City`] and [`Country`] so the translation resolver can
/// treat both the same way.
pub trait Translated {
    fn translations(&self) -> &Translations;

    /// The stored name for `locale`. Empty strings count as missing.
    #[inline]
    fn translation(&self, locale: &str) -> Option<&str> {
        self.translations()
            .get(locale)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

impl Translated for City {
    fn translations(&self) -> &Translations {
        &self.translations
    }
}

impl Translated for Country {
    fn translations(&self) -> &Translations {
        &self.translations
    }
}

/// A city together with the country that owns it.
pub type CityContext<'a> = (&'a Country, &'a City);

/// An iterator that yields cities with their owning country.
/// Boxed so implementors can return whatever adapter chain they build.
pub type CitiesIter<'a> = Box<dyn Iterator<Item = CityContext<'a>> + 'a>;

/// Read-only queries over a built gazetteer.
pub trait GazetteerIndex: Send + Sync {
    /// Aggregate counts, see [`GazetteerStats`](crate::common::GazetteerStats).
    fn stats(&self) -> crate::common::GazetteerStats;

    /// All countries, ordered by code.
    fn countries(&self) -> Box<dyn Iterator<Item = &Country> + '_>;

    /// Exact lookup by country code.
    fn country(&self, code: &str) -> Option<&Country>;

    /// Exact lookup of a city name within a country.
    fn city(&self, country_code: &str, name: &str) -> Option<&City>;

    /// Every city that has coordinates, ordered by country code and then by
    /// city name. The order is part of the contract: the nearest-city search
    /// keeps the first of equally distant candidates.
    fn geocoded_cities(&self) -> CitiesIter<'_>;

    /// Accent- and case-insensitive substring search over city names and
    /// their translations.
    fn find_cities_by_substring(&self, substr: &str) -> Vec<CityContext<'_>>;
}
