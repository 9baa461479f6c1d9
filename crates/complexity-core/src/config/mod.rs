//! Configuration system.
//! TOML-based, 3-layer resolution: CLI > env > config file > defaults.

pub mod complexity_config;
pub mod defaults;
pub mod eigen_config;
pub mod report_config;

pub use complexity_config::{CliOverrides, ComplexityConfig};
pub use eigen_config::EigenConfig;
pub use report_config::ReportConfig;
