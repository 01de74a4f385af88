// crates/locator-core/src/model/convert.rs
use crate::common::raw::CityRecord;
use crate::geo::Coordinates;
use crate::model::domain::{City, Country, Gazetteer, Translations};

/// **Standard Converter:** Raw records -> Gazetteer.
///
/// Records are applied in order. See [`import_record`] for the merge rules.
pub fn from_raw<I>(records: I) -> Gazetteer
where
    I: IntoIterator<Item = CityRecord>,
{
    let mut db = Gazetteer::default();
    for record in records {
        import_record(&mut db, record);
    }
    db
}

/// Applies one dataset record to a gazetteer under construction.
///
/// - The country is created on first sight; its canonical name is the one
///   from that first record.
/// - A city replaces any earlier city with the same name in the same country.
/// - City translations: last write wins.
/// - Country translations: first write wins, across all of the country's cities.
/// - `is_primary` moves the primary designation to this city.
pub(crate) fn import_record(db: &mut Gazetteer, record: CityRecord) {
    let CityRecord {
        city: city_name,
        city_iata,
        country,
        country_iata,
        latitude,
        longitude,
        timezone,
        is_primary,
        translations,
    } = record;

    let entry = db
        .countries
        .entry(country_iata.clone())
        .or_insert_with(|| Country::new(country_iata.clone(), country));

    let mut city_translations = Translations::new();
    for tr in translations {
        entry
            .translations
            .entry(tr.locale.clone())
            .or_insert(tr.country);
        city_translations.insert(tr.locale, tr.city);
    }

    let city = City {
        code: city_iata,
        country_code: country_iata,
        name: city_name.clone(),
        coordinates: Coordinates::from_parts(latitude, longitude),
        timezone,
        translations: city_translations,
    };

    entry.cities.insert(city_name.clone(), city);
    if is_primary {
        entry.primary_city = Some(city_name);
    }
}
