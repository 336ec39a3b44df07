//! Haversine great-circle distance on the mean sphere.
//!
//! d = 2R·atan2(√a, √(1−a)), a = sin²(Δφ/2) + cosφ₁·cosφ₂·sin²(Δλ/2)
//!
//! The half-versed-sine form stays well-conditioned for small
//! separations, where the plain law-of-cosines argument saturates
//! near 1.

use super::EARTH_RADIUS;
use crate::coord::GeodeticCoordinate;

/// Great-circle distance in metres between two points (degrees) on a
/// sphere of mean Earth radius.
pub fn distance(p1: GeodeticCoordinate, p2: GeodeticCoordinate) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();
    let dlat = lat2 - lat1;
    let dlon = p2.lon_rad() - p1.lon_rad();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_coincident_is_zero() {
        let p = GeodeticCoordinate::new(48.8566, 2.3522);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_quarter_circumference() {
        let d = distance(
            GeodeticCoordinate::new(0.0, 0.0),
            GeodeticCoordinate::new(0.0, 90.0),
        );
        assert_relative_eq!(d, EARTH_RADIUS * FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_nyc_to_la() {
        let d = distance(
            GeodeticCoordinate::new(40.7128, -74.0060),
            GeodeticCoordinate::new(34.0522, -118.2437),
        );
        // ~3936 km on the mean sphere
        assert!(d > 3_920_000.0 && d < 3_950_000.0, "d = {d}");
    }

    #[test]
    fn test_symmetry() {
        let p = GeodeticCoordinate::new(-33.8688, 151.2093);
        let q = GeodeticCoordinate::new(59.9139, 10.7522);
        assert_relative_eq!(distance(p, q), distance(q, p), max_relative = 1e-12);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = distance(
            GeodeticCoordinate::new(0.0, 0.0),
            GeodeticCoordinate::new(0.0, 180.0),
        );
        assert_relative_eq!(d, EARTH_RADIUS * std::f64::consts::PI, epsilon = 1e-6);
    }
}
