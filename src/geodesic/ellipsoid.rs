//! Reference ellipsoids and the auxiliary-sphere latitude reduction.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Latitudes closer than this (radians) to ±π/2 are treated as exactly polar.
const POLE_EPS: f64 = 1e-12;

/// Reference ellipsoid parameters.
///
/// Only the defining pair `(a, f)` is stored; every derived quantity is
/// recomputed from it, so the model can never hold an inconsistent
/// semi-minor axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// Semi-minor axis: b = a·(1 − f).
    #[inline]
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// First eccentricity squared: e² = 2f − f².
    #[inline]
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Second eccentricity squared: e'² = (a² − b²)/b² = e²/(1 − e²).
    #[inline]
    pub fn ep2(&self) -> f64 {
        let e2 = self.e2();
        e2 / (1.0 - e2)
    }

    /// Reduced latitude of the geodetic latitude `lat` (radians), as the
    /// `(sin U, cos U)` pair on the auxiliary sphere.
    ///
    /// Computed from `tan U = (1 − f)·tan φ`, normalized via
    /// `cos U = 1/√(1 + tan²U)` so that `cos U ≥ 0`. The poles are
    /// special-cased to `(±1, 0)`: `tan φ` diverges at ±π/2, and the
    /// result must not depend on how the tangent overflows.
    pub fn reduced_latitude(&self, lat: f64) -> (f64, f64) {
        if FRAC_PI_2 - lat.abs() < POLE_EPS {
            return (lat.signum(), 0.0);
        }
        let tan_u = (1.0 - self.f) * lat.tan();
        let cos_u = 1.0 / (1.0 + tan_u * tan_u).sqrt();
        (tan_u * cos_u, cos_u)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);
