//! Eigen-decomposition configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Tunables for the general eigen-decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EigenConfig {
    /// Convergence tolerance. Default: 1e-10.
    pub tolerance: Option<f64>,
    /// Schur iteration cap. Default: 10_000.
    pub max_iterations: Option<usize>,
    /// Inverse iteration cap per eigenvector. Default: 50.
    pub inverse_iterations: Option<usize>,
}

impl EigenConfig {
    /// Returns the effective tolerance, defaulting to 1e-10.
    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(defaults::DEFAULT_EIGEN_TOLERANCE)
    }

    /// Returns the effective Schur iteration cap, defaulting to 10_000.
    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or(defaults::DEFAULT_EIGEN_MAX_ITERATIONS)
    }

    /// Returns the effective inverse iteration cap, defaulting to 50.
    pub fn effective_inverse_iterations(&self) -> usize {
        self.inverse_iterations
            .unwrap_or(defaults::DEFAULT_INVERSE_ITERATIONS)
    }
}
