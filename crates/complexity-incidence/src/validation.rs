//! Batch validation of a country → products mapping.
//!
//! Runs before construction so the engine never sees a zero diversity or
//! ubiquity. Per-entry problems are reported before size problems.

use std::collections::HashSet;

use complexity_core::constants::{MIN_COUNTRIES, MIN_PRODUCTS};
use complexity_core::{ComplexityError, ComplexityResult, CountryProducts};

/// Reject mappings the Complexity Engine cannot process.
///
/// - blank country name, empty product list, or blank product name → `DegenerateInput`
/// - fewer than 2 countries or 2 distinct products → `InsufficientData`
pub fn validate(mapping: &CountryProducts) -> ComplexityResult<()> {
    let mut distinct_products: HashSet<&str> = HashSet::new();

    for (position, (country, products)) in mapping.iter().enumerate() {
        if country.trim().is_empty() {
            return Err(ComplexityError::degenerate(format!(
                "country #{} has a blank name",
                position + 1
            )));
        }
        if products.is_empty() {
            return Err(ComplexityError::degenerate(format!(
                "country '{country}' exports no products"
            )));
        }
        for product in products {
            if product.trim().is_empty() {
                return Err(ComplexityError::degenerate(format!(
                    "country '{country}' lists a blank product name"
                )));
            }
            distinct_products.insert(product.as_str());
        }
    }

    if mapping.len() < MIN_COUNTRIES || distinct_products.len() < MIN_PRODUCTS {
        return Err(ComplexityError::InsufficientData {
            countries: mapping.len(),
            products: distinct_products.len(),
        });
    }

    Ok(())
}
