// ABOUTME: Great-circle distance between coordinates for distance-based tie-breaking
// ABOUTME: Haversine formula on a spherical Earth, rounded to one decimal kilometer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers, rounded to one decimal
#[must_use]
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = lat1.cos().mul_add(
        lat2.cos() * (d_lon / 2.0).sin().powi(2),
        (d_lat / 2.0).sin().powi(2),
    );
    let c = 2.0 * a.sqrt().min(1.0).asin();

    (EARTH_RADIUS_KM * c * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = point(45.5, -73.6);
        assert!(haversine_km(&p, &p).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_distance() {
        // Montreal to Toronto, roughly 504 km
        let montreal = point(45.5017, -73.5673);
        let toronto = point(43.6532, -79.3832);
        let d = haversine_km(&montreal, &toronto);
        assert!((d - 504.0).abs() < 5.0, "got {d}");
        assert!(((d * 10.0).round() - d * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = point(48.8566, 2.3522);
        let b = point(51.5074, -0.1278);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < f64::EPSILON);
    }
}
