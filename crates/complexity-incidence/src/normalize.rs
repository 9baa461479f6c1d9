//! Name normalization applied by data-entry sources.

use complexity_core::CountryProducts;

/// Trim surrounding whitespace and lowercase.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a comma-separated product line into normalized names.
///
/// Blank entries are kept so validation can reject them rather than
/// silently dropping what the user typed.
pub fn parse_product_list(raw: &str) -> Vec<String> {
    raw.split(',').map(normalize_name).collect()
}

/// Normalize every country and product name in a mapping.
///
/// Countries that collide after normalization merge with dictionary
/// semantics: the later list wins, the earlier position is kept.
pub fn normalize_mapping(mapping: &CountryProducts) -> CountryProducts {
    mapping
        .iter()
        .map(|(country, products)| {
            (
                normalize_name(country),
                products.iter().map(|p| normalize_name(p)).collect::<Vec<_>>(),
            )
        })
        .collect()
}
