//! Planar Euclidean distance, and a flat-earth shortcut for short
//! geographic spans.

use crate::coord::GeodeticCoordinate;

/// Metres per degree of latitude in the flat-earth approximation.
const METRES_PER_DEGREE_LAT: f64 = 111_000.0;

/// Euclidean distance between two points in the plane. Unit-agnostic.
pub fn distance_2d(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    (p2.0 - p1.0).hypot(p2.1 - p1.1)
}

/// Euclidean distance between two points in 3-space. Unit-agnostic.
pub fn distance_3d(p1: (f64, f64, f64), p2: (f64, f64, f64)) -> f64 {
    (p2.0 - p1.0).hypot(p2.1 - p1.1).hypot(p2.2 - p1.2)
}

/// Rough Earth distance in metres: latitude scaled at 111 km per degree,
/// longitude scaled by the cosine of the mean latitude, then measured in
/// the plane. Ignores curvature entirely; off by about 1% even at
/// city-pair range.
pub fn flat_earth(p1: GeodeticCoordinate, p2: GeodeticCoordinate) -> f64 {
    let mean_lat = (p1.lat + p2.lat) / 2.0;
    let metres_per_degree_lon = mean_lat.to_radians().cos() * METRES_PER_DEGREE_LAT;

    distance_2d(
        (p1.lon * metres_per_degree_lon, p1.lat * METRES_PER_DEGREE_LAT),
        (p2.lon * metres_per_degree_lon, p2.lat * METRES_PER_DEGREE_LAT),
    )
}
