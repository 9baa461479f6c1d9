use super::error_code::{self, ComplexityErrorCode};
use super::{ConfigError, InputError};

/// Top-level error for every fallible operation in the workspace.
///
/// All variants are unrecoverable for the current request: callers abort
/// the computation and report, no partial results are produced.
#[derive(Debug, thiserror::Error)]
pub enum ComplexityError {
    /// A country with no products or a product with no exporter, or a blank name.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// Fewer than two countries or products: the second eigenvalue is undefined.
    #[error("insufficient data: need at least 2 countries and 2 products, got {countries} countries and {products} products")]
    InsufficientData { countries: usize, products: usize },

    /// Eigen-decomposition failed to converge or produced NaN/Inf.
    #[error("numeric instability during {stage}: {reason}")]
    NumericInstability { stage: String, reason: String },

    /// Labels do not agree with the matrix shape.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl ComplexityError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    pub fn numeric(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NumericInstability {
            stage: stage.into(),
            reason: reason.into(),
        }
    }
}

impl ComplexityErrorCode for ComplexityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DegenerateInput { .. } => error_code::DEGENERATE_INPUT,
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::NumericInstability { .. } => error_code::NUMERIC_INSTABILITY,
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type ComplexityResult<T> = Result<T, ComplexityError>;
