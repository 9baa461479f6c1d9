//! Stable error codes for process-boundary reporting.

/// Every error enum implements this to expose a structured code string.
pub trait ComplexityErrorCode {
    /// Returns the error code string (e.g., "INSUFFICIENT_DATA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DEGENERATE_INPUT: &str = "DEGENERATE_INPUT";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const NUMERIC_INSTABILITY: &str = "NUMERIC_INSTABILITY";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
