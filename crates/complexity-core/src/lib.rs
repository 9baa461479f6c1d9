//! # complexity-core
//!
//! Foundation crate for the economic complexity workspace.
//! Defines the shared models, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ComplexityConfig;
pub use errors::{ComplexityError, ComplexityResult};
pub use models::{
    ComplexityBreakdown, ComplexityReport, CountryProducts, IncidenceMatrix, LabeledMatrix,
    LabeledSeries,
};
