//! Geospatial resolution over the reading store

use crate::models::{Reading, ResolvedMatch};
use crate::store::ReadingStore;
use crate::types::GpsCoordinates;

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in km (haversine formula)
pub fn haversine_km(a: GpsCoordinates, b: GpsCoordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

impl ReadingStore {
    /// Reading closest to the query point
    ///
    /// Ties go to the reading that comes first in store order. Returns `None`
    /// when the store is empty or the query point is not a finite coordinate.
    pub fn find_nearest(&self, latitude: f64, longitude: f64) -> Option<ResolvedMatch> {
        let query = GpsCoordinates::new(latitude, longitude);
        let mut best: Option<(&Reading, f64)> = None;

        for reading in self.iter() {
            let distance = haversine_km(query, reading.coordinates());
            if !distance.is_finite() {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((reading, distance)),
            }
        }

        best.map(|(reading, distance_km)| ResolvedMatch {
            reading: reading.clone(),
            distance_km,
        })
    }

    /// Case-insensitive exact match against district or state name
    ///
    /// The first reading in store order wins. No partial or fuzzy matching.
    pub fn find_by_name(&self, name: &str) -> Option<&Reading> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.iter().find(|reading| {
            reading.district.to_lowercase() == wanted || reading.state.to_lowercase() == wanted
        })
    }
}
