//! # complexity-cli
//!
//! Wires a data-entry source, the Incidence Builder, the Complexity Engine,
//! and a report sink into one batch run.

pub mod app;
pub mod cli;
pub mod sinks;
pub mod sources;

pub use app::run;
pub use cli::{Cli, OutputFormat};
