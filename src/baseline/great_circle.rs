//! Great-circle distance via the atan2 central-angle form.
//!
//! Δσ = atan2(√((cosφ₂·sinΔλ)² + (cosφ₁·sinφ₂ − sinφ₁·cosφ₂·cosΔλ)²),
//!            sinφ₁·sinφ₂ + cosφ₁·cosφ₂·cosΔλ)
//!
//! Evaluates the same central angle as the spherical law of cosines, but
//! keeps full precision at separations where the arccosine argument
//! saturates near ±1 (very short hops and near-antipodal pairs).

use super::EARTH_RADIUS;
use crate::coord::GeodeticCoordinate;

/// Great-circle distance in metres between two points (degrees) on a
/// sphere of mean Earth radius.
pub fn distance(p1: GeodeticCoordinate, p2: GeodeticCoordinate) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();
    let dlon = p2.lon_rad() - p1.lon_rad();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    let sin_angle = ((lat2.cos() * dlon.sin()).powi(2)
        + (lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos()).powi(2))
    .sqrt();

    EARTH_RADIUS * sin_angle.atan2(cos_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coincident_is_zero() {
        let p = GeodeticCoordinate::new(35.6895, 139.6917);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_matches_haversine() {
        let pairs = [
            (
                GeodeticCoordinate::new(40.7128, -74.0060),
                GeodeticCoordinate::new(34.0522, -118.2437),
            ),
            (
                GeodeticCoordinate::new(51.5074, -0.1278),
                GeodeticCoordinate::new(35.6895, 139.6917),
            ),
            (
                GeodeticCoordinate::new(-33.8688, 151.2093),
                GeodeticCoordinate::new(59.9139, 10.7522),
            ),
        ];
        for (p, q) in pairs {
            assert_relative_eq!(
                distance(p, q),
                super::super::haversine::distance(p, q),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_short_hop_stays_precise() {
        // ~28 m apart; the arccosine form starts losing digits here,
        // the atan2 form does not
        let d = distance(
            GeodeticCoordinate::new(40.7128, -74.0060),
            GeodeticCoordinate::new(40.7130, -74.0062),
        );
        assert!(d > 20.0 && d < 40.0, "d = {d}");
    }

    #[test]
    fn test_pole_to_pole() {
        let d = distance(
            GeodeticCoordinate::new(90.0, 0.0),
            GeodeticCoordinate::new(-90.0, 0.0),
        );
        assert_relative_eq!(d, EARTH_RADIUS * std::f64::consts::PI, epsilon = 1e-6);
    }
}
