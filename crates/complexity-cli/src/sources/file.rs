use std::path::{Path, PathBuf};

use complexity_core::errors::InputError;
use complexity_core::models::CountryEntry;
use complexity_core::traits::ICountryProductSource;
use complexity_core::{ComplexityResult, CountryProducts};
use complexity_incidence::normalize_mapping;
use serde::Deserialize;
use tracing::debug;

use super::line_format::parse_lines;

/// TOML layout: a `[[country]]` table per country.
#[derive(Debug, Deserialize)]
struct TomlInput {
    #[serde(default)]
    country: Vec<CountryEntry>,
}

/// Reads a mapping from disk. The format follows the extension:
/// `.toml`, `.json`, anything else is the line format.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn parse_error(&self, message: String) -> InputError {
        InputError::Parse {
            source_name: self.source_name(),
            message,
        }
    }
}

impl ICountryProductSource for FileSource {
    fn load(&self) -> ComplexityResult<CountryProducts> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| InputError::Read {
            source_name: self.source_name(),
            message: e.to_string(),
        })?;

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let raw = match extension.as_deref() {
            Some("toml") => {
                let input: TomlInput =
                    toml::from_str(&text).map_err(|e| self.parse_error(e.to_string()))?;
                CountryProducts::from(input.country)
            }
            Some("json") => {
                serde_json::from_str(&text).map_err(|e| self.parse_error(e.to_string()))?
            }
            _ => parse_lines(&text, &self.source_name())?,
        };

        let mapping = normalize_mapping(&raw);
        debug!(path = %self.path.display(), countries = mapping.len(), "loaded input file");
        Ok(mapping)
    }
}
