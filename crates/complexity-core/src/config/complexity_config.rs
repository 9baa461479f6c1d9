//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{EigenConfig, ReportConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COMPLEXITY_*`)
/// 3. Config file (explicit path, or `complexity.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComplexityConfig {
    pub eigen: EigenConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub eigen_tolerance: Option<f64>,
    pub report_precision: Option<usize>,
    pub report_standardize: Option<bool>,
}

impl ComplexityConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `complexity.toml`
    /// in `root` is merged when present and skipped otherwise.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ComplexityConfig) -> Result<(), ConfigError> {
        if let Some(tolerance) = config.eigen.tolerance {
            if !(tolerance > 0.0 && tolerance <= defaults::MAX_EIGEN_TOLERANCE) {
                return Err(ConfigError::ValidationFailed {
                    field: "eigen.tolerance".to_string(),
                    message: format!(
                        "must be in (0, {}]",
                        defaults::MAX_EIGEN_TOLERANCE
                    ),
                });
            }
        }
        if config.eigen.max_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "eigen.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.eigen.inverse_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "eigen.inverse_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(precision) = config.report.precision {
            if precision > defaults::MAX_REPORT_PRECISION {
                return Err(ConfigError::ValidationFailed {
                    field: "report.precision".to_string(),
                    message: format!("must be at most {}", defaults::MAX_REPORT_PRECISION),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ComplexityConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ComplexityConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ComplexityConfig, other: &ComplexityConfig) {
        if other.eigen.tolerance.is_some() {
            base.eigen.tolerance = other.eigen.tolerance;
        }
        if other.eigen.max_iterations.is_some() {
            base.eigen.max_iterations = other.eigen.max_iterations;
        }
        if other.eigen.inverse_iterations.is_some() {
            base.eigen.inverse_iterations = other.eigen.inverse_iterations;
        }
        if other.report.precision.is_some() {
            base.report.precision = other.report.precision;
        }
        if other.report.standardize.is_some() {
            base.report.standardize = other.report.standardize;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ComplexityConfig) {
        if let Ok(val) = std::env::var("COMPLEXITY_EIGEN_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.eigen.tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMPLEXITY_EIGEN_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.eigen.max_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMPLEXITY_REPORT_PRECISION") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.precision = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMPLEXITY_REPORT_STANDARDIZE") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.standardize = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ComplexityConfig, cli: &CliOverrides) {
        if let Some(v) = cli.eigen_tolerance {
            config.eigen.tolerance = Some(v);
        }
        if let Some(v) = cli.report_precision {
            config.report.precision = Some(v);
        }
        if let Some(v) = cli.report_standardize {
            config.report.standardize = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
