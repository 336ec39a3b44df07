//! Fixed-point iteration for the auxiliary-sphere longitude difference λ.
//!
//! Vincenty (1975) inverse problem: the geodesic between two points on the
//! ellipsoid is mapped to an arc on an auxiliary sphere, where the
//! longitude difference λ has no closed form and is found by iterating
//!
//!   λ' = L + (1−C)·f·sinα·(σ + C·sinσ·(cos2σM + C·cosσ·(−1 + 2·cos2σM²)))
//!
//! until successive values agree within the configured tolerance. The
//! iteration is a contraction for most of the globe but fails to converge
//! for near-antipodal pairs, which is reported explicitly instead of
//! returning a best-effort value.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Iteration cap and acceptance tolerance for the λ fixed point.
///
/// Exposed so batch workloads can trade accuracy against worst-case
/// latency per pair; the cap bounds the work per call deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePolicy {
    /// Maximum number of update steps before giving up.
    pub max_iterations: usize,
    /// Acceptance threshold on |λ' − λ|, in radians.
    pub tolerance: f64,
}

impl Default for ConvergencePolicy {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-12,
        }
    }
}

/// σ-quantities produced by one λ update step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationState {
    /// Updated longitude difference λ' on the auxiliary sphere.
    pub lambda: f64,
    /// Arc length σ between the points on the auxiliary sphere.
    pub sigma: f64,
    pub sin_sigma: f64,
    pub cos_sigma: f64,
    /// cos²α, α the azimuth of the geodesic at the equator; 0 for
    /// equatorial paths.
    pub cos_sq_alpha: f64,
    /// cos(2σₘ), σₘ the angular distance to the arc midpoint.
    pub cos_2sigma_m: f64,
}

/// Outcome of one update step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// sinσ = 0 with cosσ ≥ 0: the points coincide on the auxiliary
    /// sphere.
    Coincident,
    /// sinσ = 0 with cosσ < 0: an exact pole-to-pole pair. The geodesic
    /// runs along a meridian with σ = π; the general update would
    /// evaluate 0/0 here.
    PolarAntipodal,
    /// Regular update.
    Next(IterationState),
}

/// One inverse-problem instance: a point pair reduced onto the auxiliary
/// sphere, plus the flattening that couples the sphere back to the
/// ellipsoid.
#[derive(Clone, Copy, Debug)]
pub struct LambdaSolver {
    /// Longitude difference on the ellipsoid (radians).
    l: f64,
    /// Ellipsoid flattening.
    f: f64,
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
}

impl LambdaSolver {
    /// Build a solver from the longitude difference `l` (radians), the two
    /// reduced-latitude `(sin U, cos U)` pairs, and the flattening `f`.
    pub fn new(l: f64, u1: (f64, f64), u2: (f64, f64), f: f64) -> Self {
        Self {
            l,
            f,
            sin_u1: u1.0,
            cos_u1: u1.1,
            sin_u2: u2.0,
            cos_u2: u2.1,
        }
    }

    /// One pure update step: evaluate the σ-quantities at `lambda` and
    /// produce the next λ. Does not mutate the solver.
    pub fn step(&self, lambda: f64) -> Step {
        let sin_lambda = lambda.sin();
        let cos_lambda = lambda.cos();

        let cross = self.cos_u1 * self.sin_u2 - self.sin_u1 * self.cos_u2 * cos_lambda;
        let sin_sigma = ((self.cos_u2 * sin_lambda).powi(2) + cross * cross).sqrt();
        let cos_sigma = self.sin_u1 * self.sin_u2 + self.cos_u1 * self.cos_u2 * cos_lambda;

        if sin_sigma == 0.0 {
            // Guards the sinα division below. cosσ (no division involved)
            // picks between the two zero-sine arcs: σ = 0 and σ = π.
            return if cos_sigma >= 0.0 {
                Step::Coincident
            } else {
                Step::PolarAntipodal
            };
        }

        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = self.cos_u1 * self.cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // Equatorial paths have α = 90°, collapsing cos²α to zero and
        // leaving the cos2σM quotient undefined. C vanishes together with
        // cos²α, so taking cos2σM = 0 keeps the update well-defined.
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * self.sin_u1 * self.sin_u2 / cos_sq_alpha
        };

        let c = self.f / 16.0 * cos_sq_alpha * (4.0 + self.f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_next = self.l
            + (1.0 - c)
                * self.f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        Step::Next(IterationState {
            lambda: lambda_next,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_sq_alpha,
            cos_2sigma_m,
        })
    }

    /// Run the fixed-point iteration from λ = L under `policy`.
    pub fn solve(&self, policy: &ConvergencePolicy) -> ConvergenceResult {
        let mut lambda = self.l;
        for iteration in 1..=policy.max_iterations {
            match self.step(lambda) {
                Step::Coincident => return ConvergenceResult::Coincident,
                Step::PolarAntipodal => {
                    // Meridional geodesic between opposite poles: the
                    // auxiliary arc is exactly π and the azimuth at the
                    // equator is 0, so every σ-quantity is known in
                    // closed form.
                    return ConvergenceResult::Converged {
                        state: IterationState {
                            lambda,
                            sigma: PI,
                            sin_sigma: 0.0,
                            cos_sigma: -1.0,
                            cos_sq_alpha: 1.0,
                            cos_2sigma_m: 1.0,
                        },
                        iterations: iteration,
                    };
                }
                Step::Next(state) => {
                    if (state.lambda - lambda).abs() < policy.tolerance {
                        return ConvergenceResult::Converged {
                            state,
                            iterations: iteration,
                        };
                    }
                    lambda = state.lambda;
                }
            }
        }
        ConvergenceResult::NonConvergence
    }
}

/// Outcome of the full iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvergenceResult {
    /// |λ' − λ| met the tolerance.
    Converged {
        state: IterationState,
        /// Update steps taken until acceptance.
        iterations: usize,
    },
    /// Zero-distance pair, detected on the auxiliary sphere.
    Coincident,
    /// Iteration cap exhausted — typically a near-antipodal pair.
    NonConvergence,
}
