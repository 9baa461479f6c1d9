//! Error taxonomy for the workspace.
//! One enum per subsystem, rolled up into [`ComplexityError`].

pub mod complexity_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;

pub use complexity_error::{ComplexityError, ComplexityResult};
pub use config_error::ConfigError;
pub use error_code::ComplexityErrorCode;
pub use input_error::InputError;
