//! Report configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the report sinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for matrix cells and index values. Default: 6.
    pub precision: Option<usize>,
    /// Z-score the indices before display. Default: false.
    pub standardize: Option<bool>,
}

impl ReportConfig {
    pub fn effective_precision(&self) -> usize {
        self.precision.unwrap_or(defaults::DEFAULT_REPORT_PRECISION)
    }

    pub fn effective_standardize(&self) -> bool {
        self.standardize
            .unwrap_or(defaults::DEFAULT_REPORT_STANDARDIZE)
    }
}
