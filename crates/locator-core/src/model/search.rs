// crates/locator-core/src/model/search.rs
use crate::common::GazetteerStats;
use crate::model::domain::{City, Country, Gazetteer};
use crate::text::fold_key;
use crate::traits::{CitiesIter, CityContext, GazetteerIndex};

impl GazetteerIndex for Gazetteer {
    fn stats(&self) -> GazetteerStats {
        let mut stats = GazetteerStats {
            countries: self.countries.len(),
            cities: 0,
            geocoded: 0,
        };
        for c in self.countries.values() {
            stats.cities += c.cities.len();
            stats.geocoded += c.cities.values().filter(|city| city.is_geocoded()).count();
        }
        stats
    }

    fn countries(&self) -> Box<dyn Iterator<Item = &Country> + '_> {
        Box::new(self.countries.values())
    }

    fn country(&self, code: &str) -> Option<&Country> {
        self.countries.get(code)
    }

    fn city(&self, country_code: &str, name: &str) -> Option<&City> {
        self.country(country_code).and_then(|c| c.city(name))
    }

    fn geocoded_cities(&self) -> CitiesIter<'_> {
        // BTreeMap iteration: country code, then city name.
        Box::new(self.countries.values().flat_map(|country| {
            country
                .cities
                .values()
                .filter(|city| city.is_geocoded())
                .map(move |city| (country, city))
        }))
    }

    fn find_cities_by_substring(&self, substr: &str) -> Vec<CityContext<'_>> {
        let q = fold_key(substr.trim());
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }

        for country in self.countries.values() {
            for city in country.cities.values() {
                let matched = fold_key(&city.name).contains(&q)
                    || city
                        .translations
                        .values()
                        .any(|name| fold_key(name).contains(&q));
                if matched {
                    out.push((country, city));
                }
            }
        }
        out
    }
}
