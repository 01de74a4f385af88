use locator_core::Gazetteer;

pub const FIXTURE: &str = include_str!("../fixtures/cities.json");

pub fn fixture() -> Gazetteer {
    Gazetteer::from_json_str(FIXTURE).expect("fixture must parse")
}
