// crates/locator-core/src/engine.rs
//! # Resolution Engine
//!
//! Turns a geolocation record into a localized [`Location`] by trying a fixed
//! list of tiers in order. The first tier that returns a city wins:
//!
//! 1. [`ExactMatch`]: the country and city names are both in the gazetteer.
//! 2. [`PrimaryCity`]: the country is known and has a designated primary city.
//! 3. [`ClosestCity`]: the nearest geocoded city within 100 km.

use crate::error::NotFound;
use crate::geo::Coordinates;
use crate::location::{Approach, GeoRecord, Location};
use crate::traits::{CityContext, GazetteerIndex};
use crate::translate;
use std::time::Instant;

/// Radius of the nearest-city tier.
pub const MAX_CLOSEST_DISTANCE_KM: f64 = 100.0;

/// Search parameters handed to every tier.
#[derive(Debug, Clone, Copy)]
pub struct Request<'r> {
    pub country_code: &'r str,
    pub city_name: &'r str,
    pub point: Coordinates,
}

/// One resolution tier.
pub trait Strategy: Send + Sync {
    /// Tag reported on locations this tier produces.
    fn approach(&self) -> Approach;

    /// The matching city, if this tier can place the request.
    fn find<'a>(&self, index: &'a dyn GazetteerIndex, req: &Request<'_>) -> Option<CityContext<'a>>;
}

/// Tier 1: country code and city name both match exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Strategy for ExactMatch {
    fn approach(&self) -> Approach {
        Approach::ExactMatch
    }

    fn find<'a>(&self, index: &'a dyn GazetteerIndex, req: &Request<'_>) -> Option<CityContext<'a>> {
        let country = index.country(req.country_code)?;
        let city = country.city(req.city_name)?;
        Some((country, city))
    }
}

/// Tier 2: the country's primary city.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryCity;

impl Strategy for PrimaryCity {
    fn approach(&self) -> Approach {
        Approach::PrimaryCity
    }

    fn find<'a>(&self, index: &'a dyn GazetteerIndex, req: &Request<'_>) -> Option<CityContext<'a>> {
        let country = index.country(req.country_code)?;
        let city = country.primary_city()?;
        Some((country, city))
    }
}

/// Tier 3: nearest geocoded city by great-circle distance.
///
/// Skipped for the `(0, 0)` point. Scans every geocoded city, so the cost is
/// linear in the size of the gazetteer. Equally distant candidates resolve to
/// the first one in [`GazetteerIndex::geocoded_cities`] order.
#[derive(Debug, Clone, Copy)]
pub struct ClosestCity {
    pub max_distance_km: f64,
}

impl Default for ClosestCity {
    fn default() -> Self {
        Self {
            max_distance_km: MAX_CLOSEST_DISTANCE_KM,
        }
    }
}

impl Strategy for ClosestCity {
    fn approach(&self) -> Approach {
        Approach::ClosestCity
    }

    fn find<'a>(&self, index: &'a dyn GazetteerIndex, req: &Request<'_>) -> Option<CityContext<'a>> {
        if req.point.is_unknown() {
            return None;
        }

        let mut best: Option<(CityContext<'a>, f64)> = None;
        for (country, city) in index.geocoded_cities() {
            let Some(coords) = city.coordinates else {
                continue;
            };
            let dist = req.point.distance_km(&coords);
            if best.map_or(true, |(_, closest)| dist < closest) {
                best = Some(((country, city), dist));
            }
        }

        best.filter(|(_, dist)| *dist <= self.max_distance_km)
            .map(|(ctx, _)| ctx)
    }
}

/// The tiered resolver.
///
/// Borrows the gazetteer; holds no mutable state, so one engine can serve
/// concurrent requests.
pub struct ResolutionEngine<'g> {
    index: &'g dyn GazetteerIndex,
    tiers: Vec<Box<dyn Strategy>>,
}

impl<'g> ResolutionEngine<'g> {
    /// Engine with the standard exact → primary → closest tiers.
    pub fn new(index: &'g dyn GazetteerIndex) -> Self {
        Self::with_tiers(
            index,
            vec![
                Box::new(ExactMatch),
                Box::new(PrimaryCity),
                Box::new(ClosestCity::default()),
            ],
        )
    }

    pub fn with_tiers(index: &'g dyn GazetteerIndex, tiers: Vec<Box<dyn Strategy>>) -> Self {
        Self { index, tiers }
    }

    /// Resolves a place. `None` means no tier matched.
    pub fn lookup(
        &self,
        country_code: &str,
        city_name: &str,
        latitude: f64,
        longitude: f64,
        locale: &str,
    ) -> Option<Location> {
        let started = Instant::now();
        let req = Request {
            country_code,
            city_name,
            point: Coordinates::new(latitude, longitude),
        };

        for tier in &self.tiers {
            if let Some((country, city)) = tier.find(self.index, &req) {
                let loc = Location {
                    iata: country.code().to_string(),
                    name: translate::resolve(city, locale),
                    country_name: translate::resolve(country, locale),
                    coordinates: city.coordinates_string(),
                    city_iata: city.code().to_string(),
                    timezone: city.timezone().to_string(),
                    approach: tier.approach(),
                    took: started.elapsed(),
                };
                tracing::debug!(
                    approach = %loc.approach,
                    country = %loc.iata,
                    city = %city.name(),
                    took_us = loc.took.as_micros() as u64,
                    "location resolved"
                );
                return Some(loc);
            }
            tracing::trace!(approach = %tier.approach(), "tier missed");
        }

        tracing::debug!(country_code, city_name, latitude, longitude, "location not found");
        None
    }

    /// [`lookup`](Self::lookup) for a record produced by the IP resolver.
    pub fn lookup_record(&self, record: &GeoRecord, locale: &str) -> Option<Location> {
        self.lookup(
            &record.country_code,
            &record.city_name,
            record.latitude,
            record.longitude,
            locale,
        )
    }

    /// Like [`lookup`](Self::lookup) but reports a miss as [`NotFound`].
    pub fn try_lookup(
        &self,
        country_code: &str,
        city_name: &str,
        latitude: f64,
        longitude: f64,
        locale: &str,
    ) -> Result<Location, NotFound> {
        self.lookup(country_code, city_name, latitude, longitude, locale)
            .ok_or(NotFound)
    }
}
