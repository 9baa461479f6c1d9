//! Errors raised by data-entry sources and report sinks.

use super::error_code::{self, ComplexityErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {source_name}: {message}")]
    Read {
        source_name: String,
        message: String,
    },

    #[error("malformed input in {source_name} at line {line}: {message}")]
    Malformed {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("could not parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("failed to write report: {message}")]
    Write { message: String },
}

impl ComplexityErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Write { .. } => error_code::OUTPUT_ERROR,
            _ => error_code::INPUT_ERROR,
        }
    }
}
