//! Incidence matrix construction.

use std::collections::HashMap;

use complexity_core::{ComplexityResult, CountryProducts, IncidenceMatrix};
use nalgebra::DMatrix;
use tracing::debug;

use crate::validation;

/// Build M with country labels in mapping order and product labels in order
/// of first appearance (countries in order, each list in order).
///
/// Duplicate products within one country collapse to a single 1.
/// No validation is performed: a country with an empty list yields an
/// all-zero row. Use [`build_validated`] for untrusted input.
pub fn build(mapping: &CountryProducts) -> IncidenceMatrix {
    let countries: Vec<String> = mapping.countries().map(str::to_string).collect();

    let mut products: Vec<String> = Vec::new();
    let mut column_of: HashMap<&str, usize> = HashMap::new();
    for (_, list) in mapping.iter() {
        for product in list {
            if !column_of.contains_key(product.as_str()) {
                column_of.insert(product.as_str(), products.len());
                products.push(product.clone());
            }
        }
    }

    let mut matrix = DMatrix::<f64>::zeros(countries.len(), products.len());
    for (i, (_, list)) in mapping.iter().enumerate() {
        for product in list {
            // Every product was registered in the first pass.
            if let Some(&j) = column_of.get(product.as_str()) {
                matrix[(i, j)] = 1.0;
            }
        }
    }

    debug!(
        countries = countries.len(),
        products = products.len(),
        nonzero = matrix.iter().filter(|v| **v == 1.0).count(),
        "built incidence matrix"
    );

    IncidenceMatrix::from_validated_parts(matrix, countries, products)
}

/// Validate, then build.
pub fn build_validated(mapping: &CountryProducts) -> ComplexityResult<IncidenceMatrix> {
    validation::validate(mapping)?;
    Ok(build(mapping))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: Vec<(&str, Vec<&str>)>) -> CountryProducts {
        entries.into_iter().collect()
    }

    #[test]
    fn labels_follow_first_appearance() {
        let m = build(&mapping(vec![
            ("a", vec!["x", "y"]),
            ("b", vec!["y", "z"]),
            ("c", vec!["x", "z"]),
        ]));
        assert_eq!(m.countries(), &["a", "b", "c"]);
        assert_eq!(m.products(), &["x", "y", "z"]);
        assert_eq!(
            m.matrix(),
            &DMatrix::from_row_slice(3, 3, &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0])
        );
    }

    #[test]
    fn duplicates_collapse_to_one() {
        let m = build(&mapping(vec![("a", vec!["x", "x", "y"]), ("b", vec!["y"])]));
        assert_eq!(m.n_products(), 2);
        assert_eq!(m.matrix()[(0, 0)], 1.0);
        assert_eq!(m.matrix().row(0).sum(), 2.0);
    }

    #[test]
    fn empty_list_yields_zero_row_without_validation() {
        let m = build(&mapping(vec![("a", vec!["x"]), ("b", vec![])]));
        assert_eq!(m.matrix().row(1).sum(), 0.0);
    }

    #[test]
    fn build_validated_rejects_degenerate() {
        let err = build_validated(&mapping(vec![("a", vec!["x"]), ("b", vec![])])).unwrap_err();
        assert!(matches!(
            err,
            complexity_core::ComplexityError::DegenerateInput { .. }
        ));
    }
}
