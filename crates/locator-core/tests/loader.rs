mod common;

use locator_core::{DecodeError, Gazetteer, GazetteerIndex, GazetteerStats};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_fixture_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cities.json", common::FIXTURE);

    let db = Gazetteer::load_from_path(&path).unwrap();
    assert_eq!(
        db.stats(),
        GazetteerStats {
            countries: 3,
            cities: 5,
            geocoded: 4
        }
    );
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = Gazetteer::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DecodeError::DatasetNotFound(_)));
}

#[test]
fn truncated_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cities.json", &common::FIXTURE[..200]);
    let err = Gazetteer::load_from_path(&path).unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn duplicate_key_keeps_later_city_and_first_country_translation() {
    let json = r#"[
        {"city":"Kyiv","city_iata":"IEV","country":"Ukraine","country_iata":"UA",
         "latitude":50.45,"longitude":30.52,"timezone":"Europe/Kiev","is_primary":true,
         "translations":[{"locale":"en","country":"Ukraine","city":"Kiev"}]},
        {"city":"Kyiv","city_iata":"KBP","country":"Ukraine","country_iata":"UA",
         "latitude":50.4501,"longitude":30.5234,"timezone":"Europe/Kyiv","is_primary":false,
         "translations":[{"locale":"en","country":"The Ukraine","city":"Kyiv"}]}
    ]"#;
    let db = Gazetteer::from_json_str(json).unwrap();
    let ua = db.country("UA").unwrap();

    assert_eq!(ua.city_count(), 1);
    let kyiv = ua.city("Kyiv").unwrap();
    assert_eq!(kyiv.code(), "KBP");
    assert_eq!(kyiv.timezone(), "Europe/Kyiv");
    assert_eq!(kyiv.translations["en"], "Kyiv");
    assert_eq!(ua.translations["en"], "Ukraine");

    // Primary designation still names a city in the map.
    assert_eq!(ua.primary_city().unwrap().code(), "KBP");
}

#[test]
fn null_strings_load_as_empty() {
    let json = r#"[
        {"city":"Ushuaia","city_iata":null,"country":"Argentina","country_iata":"AR",
         "latitude":-54.8,"longitude":-68.3,"timezone":null,"is_primary":null,
         "translations":[{"locale":"en","country":null,"city":"Ushuaia"}]},
        {"city":"Rawson","city_iata":"RWO","country":null,"country_iata":"AR",
         "latitude":null,"longitude":null,"timezone":"America/Argentina/Catamarca",
         "is_primary":true,"translations":null}
    ]"#;
    let db = Gazetteer::from_json_str(json).unwrap();
    let ar = db.country("AR").unwrap();

    let ushuaia = ar.city("Ushuaia").unwrap();
    assert_eq!(ushuaia.code(), "");
    assert_eq!(ushuaia.timezone(), "");
    assert_eq!(ushuaia.translations["en"], "Ushuaia");
    assert_eq!(ar.translations["en"], "");
    assert_eq!(ar.name(), "Argentina");

    let rawson = ar.city("Rawson").unwrap();
    assert!(rawson.translations.is_empty());
    assert_eq!(ar.primary_city().unwrap().name(), "Rawson");
}

#[test]
fn multiple_files_merge_in_order() {
    let dir = TempDir::new().unwrap();
    let first = write_file(
        &dir,
        "a.json",
        r#"[{"city":"Paris","city_iata":"PAR","country":"France","country_iata":"FR",
             "latitude":48.8566,"longitude":2.3522,"timezone":"Europe/Paris","is_primary":true,
             "translations":[{"locale":"en","country":"France","city":"Paris"}]}]"#,
    );
    let second = write_file(
        &dir,
        "b.json",
        r#"[{"city":"Nice","city_iata":"NCE","country":"France","country_iata":"FR",
             "latitude":43.7,"longitude":7.27,"timezone":"Europe/Paris","is_primary":false,
             "translations":[{"locale":"en","country":"French Republic","city":"Nice"}]}]"#,
    );

    let db = Gazetteer::load_from_paths([&first, &second]).unwrap();
    let fr = db.country("FR").unwrap();
    assert_eq!(fr.city_count(), 2);
    assert_eq!(fr.translations["en"], "France");
    assert_eq!(fr.primary_city().unwrap().name(), "Paris");
}

#[test]
fn one_bad_file_fails_the_whole_load() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.json", common::FIXTURE);
    let bad = write_file(&dir, "bad.json", "[{]");

    let err = Gazetteer::load_from_paths([&good, &bad]).unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn each_load_is_independent() {
    let a = common::fixture();
    let b = Gazetteer::from_json_str("[]").unwrap();
    assert_eq!(a.stats().countries, 3);
    assert_eq!(b.stats().countries, 0);
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_dataset_is_decompressed() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cities.json.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(common::FIXTURE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let db = Gazetteer::load_from_path(&path).unwrap();
    assert_eq!(db.stats().cities, 5);
}

#[cfg(feature = "cache")]
mod snapshot {
    use super::*;

    #[test]
    fn snapshot_round_trip_preserves_lookups() {
        use locator_core::{Approach, ResolutionEngine};

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gazetteer.bin");
        common::fixture().save_as(&path).unwrap();

        let db = Gazetteer::load_binary(&path).unwrap();
        let engine = ResolutionEngine::new(&db);
        let loc = engine.lookup("FR", "Marseille", 0.0, 0.0, "ru").unwrap();
        assert_eq!(loc.approach, Approach::PrimaryCity);
        assert_eq!(loc.name, "Париж");
        assert!(db.city("RU", "Tver").unwrap().coordinates.is_none());
    }

    #[test]
    fn load_cached_writes_and_reuses_snapshot() {
        let dir = TempDir::new().unwrap();
        let json = write_file(&dir, "cities.json", common::FIXTURE);

        let first = Gazetteer::load_cached(&json).unwrap();
        let snapshots: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("cities.json."))
            .collect();
        assert_eq!(snapshots.len(), 1);

        let second = Gazetteer::load_cached(&json).unwrap();
        assert_eq!(first.stats(), second.stats());
    }

    fn overwrite_keeping_mtime(path: &std::path::Path, contents: &str, mtime: std::time::SystemTime) {
        fs::write(path, contents).unwrap();
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
    }

    #[test]
    fn source_rewritten_within_same_mtime_is_rebuilt() {
        let dir = TempDir::new().unwrap();
        let json = write_file(&dir, "cities.json", common::FIXTURE);
        assert_eq!(Gazetteer::load_cached(&json).unwrap().stats().countries, 3);

        let mtime = fs::metadata(&json).unwrap().modified().unwrap();
        overwrite_keeping_mtime(&json, "[]", mtime);

        assert_eq!(Gazetteer::load_cached(&json).unwrap().stats().countries, 0);
    }

    #[test]
    fn source_restored_with_older_mtime_is_rebuilt() {
        let dir = TempDir::new().unwrap();
        let json = write_file(&dir, "cities.json", common::FIXTURE);
        assert_eq!(Gazetteer::load_cached(&json).unwrap().stats().countries, 3);

        let old = std::time::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
        overwrite_keeping_mtime(&json, "[]", old);

        assert_eq!(Gazetteer::load_cached(&json).unwrap().stats().countries, 0);
    }

    #[test]
    fn corrupt_snapshot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "gazetteer.bin", "not a snapshot");
        assert!(Gazetteer::load_binary(&path).is_err());
    }
}
