//! Series expansion turning a converged auxiliary arc into a distance.
//!
//! Vincenty's A/B coefficients in u² = cos²α·e'²: the correction Δσ is
//! subtracted from the spherical arc σ before scaling by b·A. For u² = 0
//! (equatorial paths) the series collapses to b·σ.

use super::ellipsoid::Ellipsoid;
use super::solver::IterationState;

/// Ellipsoidal distance for a converged arc, in the unit of the
/// ellipsoid's semi-major axis (metres for the standard models).
pub fn distance(ellipsoid: &Ellipsoid, state: &IterationState) -> f64 {
    let b = ellipsoid.b();
    let u_sq = state.cos_sq_alpha * ellipsoid.ep2();

    let a_coeff =
        1.0 + u_sq / 16_384.0 * (4_096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let b_coeff = u_sq / 1_024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let delta_sigma = b_coeff
        * state.sin_sigma
        * (state.cos_2sigma_m
            + b_coeff / 4.0
                * (state.cos_sigma * (-1.0 + 2.0 * state.cos_2sigma_m * state.cos_2sigma_m)
                    - b_coeff / 6.0
                        * state.cos_2sigma_m
                        * (-3.0 + 4.0 * state.sin_sigma * state.sin_sigma)
                        * (-3.0 + 4.0 * state.cos_2sigma_m * state.cos_2sigma_m)));

    b * a_coeff * (state.sigma - delta_sigma)
}
