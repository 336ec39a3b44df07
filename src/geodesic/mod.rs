//! Vincenty inverse geodesic — shortest-path distance on an oblate
//! spheroid.
//!
//! The ellipsoidal inverse problem has no closed form. The longitude
//! difference on the auxiliary sphere is found by fixed-point iteration
//! ([`solver`]), and the converged arc is scaled to metres by a series
//! expansion ([`series`]). Accuracy is about 0.5 mm on WGS-84. The
//! iteration fails to converge for near-antipodal pairs; that surfaces as
//! [`GeodesicError::NonConvergence`] rather than an approximate result, so
//! batch callers can skip the pair and keep going.

pub mod ellipsoid;
pub mod series;
pub mod solver;

pub use ellipsoid::{Ellipsoid, GRS80, WGS84};
pub use solver::{ConvergencePolicy, ConvergenceResult, IterationState, LambdaSolver, Step};

use crate::coord::GeodeticCoordinate;
use crate::error::GeodesicError;

/// Geodesic distance in metres between two points on WGS-84, with the
/// default convergence policy.
pub fn distance(p1: GeodeticCoordinate, p2: GeodeticCoordinate) -> Result<f64, GeodesicError> {
    distance_with(p1, p2, &WGS84, &ConvergencePolicy::default())
}

/// Geodesic distance between two points on `ellipsoid`, in the unit of
/// its semi-major axis.
///
/// Both coordinates are validated before any trigonometry. Coincident
/// points short-circuit to zero; a pair that exhausts the iteration cap
/// returns [`GeodesicError::NonConvergence`].
pub fn distance_with(
    p1: GeodeticCoordinate,
    p2: GeodeticCoordinate,
    ellipsoid: &Ellipsoid,
    policy: &ConvergencePolicy,
) -> Result<f64, GeodesicError> {
    p1.validate()?;
    p2.validate()?;

    let u1 = ellipsoid.reduced_latitude(p1.lat_rad());
    let u2 = ellipsoid.reduced_latitude(p2.lat_rad());
    let l = p2.lon_rad() - p1.lon_rad();

    let solver = LambdaSolver::new(l, u1, u2, ellipsoid.f);
    match solver.solve(policy) {
        ConvergenceResult::Coincident => Ok(0.0),
        ConvergenceResult::Converged { state, .. } => Ok(series::distance(ellipsoid, &state)),
        ConvergenceResult::NonConvergence => Err(GeodesicError::NonConvergence {
            max_iterations: policy.max_iterations,
        }),
    }
}
