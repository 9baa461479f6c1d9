use std::io::Read;

use complexity_core::errors::InputError;
use complexity_core::traits::ICountryProductSource;
use complexity_core::{ComplexityResult, CountryProducts};

use super::line_format::parse_lines;

/// Reads the line format from stdin until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl ICountryProductSource for StdinSource {
    fn load(&self) -> ComplexityResult<CountryProducts> {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| InputError::Read {
                source_name: "<stdin>".to_string(),
                message: e.to_string(),
            })?;
        parse_lines(&text, "<stdin>")
    }
}
