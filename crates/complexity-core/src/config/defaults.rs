//! Compiled defaults for every tunable.

/// Convergence tolerance for the Schur decomposition and eigenvector residuals.
pub const DEFAULT_EIGEN_TOLERANCE: f64 = 1e-10;

/// Iteration cap for the Schur decomposition (0 would mean "unbounded" in nalgebra).
pub const DEFAULT_EIGEN_MAX_ITERATIONS: usize = 10_000;

/// Iteration cap for shifted inverse iteration per eigenvector.
pub const DEFAULT_INVERSE_ITERATIONS: usize = 50;

/// Decimal places used by the console report.
pub const DEFAULT_REPORT_PRECISION: usize = 6;

/// Whether indices are z-score standardized before display.
pub const DEFAULT_REPORT_STANDARDIZE: bool = false;

/// Largest accepted eigen tolerance.
pub const MAX_EIGEN_TOLERANCE: f64 = 1e-2;

/// Largest accepted report precision.
pub const MAX_REPORT_PRECISION: usize = 15;
