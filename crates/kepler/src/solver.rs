//! Newton–Raphson solver for Kepler's equation, M = E − e·sin E

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use tracing::{trace, warn};

/// Outcome of one solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    /// Newton steps taken
    pub iterations: usize,
    /// E − e·sin E − M at the returned anomaly
    pub residual: f64,
}

/// Iteration limits for solving Kepler's equation on closed orbits.
///
/// # Examples
///
/// ```
/// use kepler::solver::KeplerSolver;
///
/// let solver = KeplerSolver::default().with_tolerance(1e-12);
/// let solution = solver.solve(1.0, 0.3);
///
/// let e = solution.eccentric_anomaly;
/// assert!((e - 0.3 * e.sin() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerSolver {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            max_iterations: 512,
            tolerance: 1e-8,
        }
    }
}

/// Wrap an angle into (−π, π]. Angles already in range are returned as is.
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    PI - (PI - angle).rem_euclid(TAU)
}

impl KeplerSolver {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Solve for the eccentric anomaly given a mean anomaly and an
    /// eccentricity in [0, 1).
    ///
    /// The mean anomaly is wrapped into (−π, π] first; the returned anomaly
    /// lies in the same branch. Seeds at E₀ = M and stops once
    /// |E − e·sin E − M| drops below the tolerance or the iteration cap is
    /// reached, whichever comes first.
    ///
    /// The root always lies in [M − e, M + e]. Newton steps that leave the
    /// shrinking bracket are replaced by bisection, otherwise plain Newton
    /// cycles for some anomalies once e approaches 1.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
        let mean_anomaly = wrap_angle(mean_anomaly);
        let kepler = |e_anom: f64| e_anom - eccentricity * e_anom.sin() - mean_anomaly;

        let mut low = mean_anomaly - eccentricity;
        let mut high = mean_anomaly + eccentricity;
        let mut e_anom = mean_anomaly;
        let mut residual = kepler(e_anom);
        let mut iterations = 0;

        while residual.abs() >= self.tolerance && iterations < self.max_iterations {
            if residual < 0.0 {
                low = e_anom;
            } else {
                high = e_anom;
            }

            let newton = e_anom - residual / (1.0 - eccentricity * e_anom.cos());
            e_anom = if newton > low && newton < high {
                newton
            } else {
                0.5 * (low + high)
            };
            residual = kepler(e_anom);
            iterations += 1;
        }

        if residual.abs() >= self.tolerance {
            warn!(
                mean_anomaly,
                eccentricity, residual, iterations, "Kepler solver hit its iteration cap"
            );
        } else {
            trace!(mean_anomaly, eccentricity, residual, iterations, "Kepler solve");
        }

        KeplerSolution {
            eccentric_anomaly: e_anom,
            iterations,
            residual,
        }
    }
}
