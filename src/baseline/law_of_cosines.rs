//! Spherical law of cosines distance.
//!
//! d = R·acos(sinφ₁·sinφ₂ + cosφ₁·cosφ₂·cosΔλ)

use super::EARTH_RADIUS;
use crate::coord::GeodeticCoordinate;

/// Great-circle distance in metres between two points (degrees) on a
/// sphere of mean Earth radius, via the law of cosines.
pub fn distance(p1: GeodeticCoordinate, p2: GeodeticCoordinate) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();
    let dlon = p2.lon_rad() - p1.lon_rad();

    // Rounding can push the cosine a hair past ±1, which acos maps to NaN
    let central = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos()).clamp(-1.0, 1.0);

    EARTH_RADIUS * central.acos()
}
