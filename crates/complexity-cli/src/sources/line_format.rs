//! Plain-text entry format: one `country: product, product, ...` line per country.
//!
//! Blank lines and lines starting with `#` are skipped. A country repeated on
//! a later line replaces its earlier products but keeps its position.

use complexity_core::errors::InputError;
use complexity_core::{ComplexityResult, CountryProducts};
use complexity_incidence::{normalize_name, parse_product_list};

pub fn parse_lines(text: &str, source_name: &str) -> ComplexityResult<CountryProducts> {
    let mut mapping = CountryProducts::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (country, products) = line.split_once(':').ok_or_else(|| InputError::Malformed {
            source_name: source_name.to_string(),
            line: idx + 1,
            message: "expected `country: product, product, ...`".to_string(),
        })?;
        mapping.insert(normalize_name(country), parse_product_list(products));
    }
    Ok(mapping)
}
