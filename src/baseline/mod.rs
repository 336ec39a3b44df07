//! Closed-form reference formulas: planar Euclidean and spherical
//! great-circle distances.
//!
//! These are the non-iterative siblings of the ellipsoidal solver in
//! [`crate::geodesic`] — one evaluation, no failure mode, no state. They
//! trade the ellipsoid for a mean sphere (or a plane), which costs up to
//! about 0.5% of accuracy and makes them useful as fast approximations
//! and as order-of-magnitude cross-checks.
//!
//! All functions assume already-validated coordinates; garbage in,
//! garbage out.

pub mod euclidean;
pub mod great_circle;
pub mod haversine;
pub mod law_of_cosines;

use crate::coord::GeodeticCoordinate;

/// Mean Earth radius in metres, shared by the spherical formulas.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Available spherical formulas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SphericalFormula {
    Haversine,
    GreatCircle,
    LawOfCosines,
}

impl SphericalFormula {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "haversine" => Some(Self::Haversine),
            "great-circle" | "great_circle" => Some(Self::GreatCircle),
            "law-of-cosines" | "law_of_cosines" => Some(Self::LawOfCosines),
            _ => None,
        }
    }
}

/// Spherical distance in metres between two points (degrees) using
/// `formula`.
pub fn distance(formula: SphericalFormula, p1: GeodeticCoordinate, p2: GeodeticCoordinate) -> f64 {
    match formula {
        SphericalFormula::Haversine => haversine::distance(p1, p2),
        SphericalFormula::GreatCircle => great_circle::distance(p1, p2),
        SphericalFormula::LawOfCosines => law_of_cosines::distance(p1, p2),
    }
}
