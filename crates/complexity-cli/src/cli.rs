//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use complexity_core::config::CliOverrides;

/// Compute the Economic and Product Complexity Indices of a country → products table.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "complexity", version, about)]
pub struct Cli {
    /// Input file: `.toml`, `.json`, or one `country: product, product` line per country.
    /// Reads the line format from stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value = "console")]
    pub format: OutputFormat,

    /// Config file. Defaults to `complexity.toml` in the working directory if present.
    #[arg(long, env = "COMPLEXITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decimal places in the console report.
    #[arg(long)]
    pub precision: Option<usize>,

    /// Z-score the indices before reporting.
    #[arg(long)]
    pub standardize: bool,

    /// Eigen-decomposition convergence tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Titled tables on stdout.
    #[default]
    Console,
    /// The whole report as pretty JSON.
    Json,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            eigen_tolerance: self.tolerance,
            report_precision: self.precision,
            report_standardize: self.standardize.then_some(true),
        }
    }
}
