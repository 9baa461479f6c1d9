use nalgebra::DMatrix;

use super::LabeledMatrix;
use crate::errors::{ComplexityError, ComplexityResult};

/// Binary country × product matrix M with its label orderings.
///
/// `M[i, j] = 1.0` iff country `countries[i]` exports product `products[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    matrix: DMatrix<f64>,
    countries: Vec<String>,
    products: Vec<String>,
}

impl IncidenceMatrix {
    /// Wrap an existing matrix. Entries must be exactly 0 or 1 and the labels
    /// must match the shape.
    pub fn new(
        matrix: DMatrix<f64>,
        countries: Vec<String>,
        products: Vec<String>,
    ) -> ComplexityResult<Self> {
        if countries.len() != matrix.nrows() {
            return Err(ComplexityError::DimensionMismatch {
                what: "country labels".to_string(),
                expected: matrix.nrows(),
                actual: countries.len(),
            });
        }
        if products.len() != matrix.ncols() {
            return Err(ComplexityError::DimensionMismatch {
                what: "product labels".to_string(),
                expected: matrix.ncols(),
                actual: products.len(),
            });
        }
        if let Some(bad) = matrix.iter().find(|v| **v != 0.0 && **v != 1.0) {
            return Err(ComplexityError::degenerate(format!(
                "incidence entries must be 0 or 1, found {bad}"
            )));
        }
        Ok(Self {
            matrix,
            countries,
            products,
        })
    }

    /// Construct without re-checking; the caller guarantees a binary matrix
    /// whose shape matches the labels.
    pub fn from_validated_parts(
        matrix: DMatrix<f64>,
        countries: Vec<String>,
        products: Vec<String>,
    ) -> Self {
        debug_assert_eq!(countries.len(), matrix.nrows());
        debug_assert_eq!(products.len(), matrix.ncols());
        Self {
            matrix,
            countries,
            products,
        }
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn n_countries(&self) -> usize {
        self.countries.len()
    }

    pub fn n_products(&self) -> usize {
        self.products.len()
    }

    /// Whether `country` exports `product`.
    pub fn exports(&self, country: &str, product: &str) -> bool {
        let i = self.countries.iter().position(|c| c == country);
        let j = self.products.iter().position(|p| p == product);
        match (i, j) {
            (Some(i), Some(j)) => self.matrix[(i, j)] == 1.0,
            _ => false,
        }
    }

    pub fn to_labeled(&self) -> LabeledMatrix {
        // Shape agreement was checked in `new`.
        LabeledMatrix::from_parts(
            self.matrix.clone(),
            self.countries.clone(),
            self.products.clone(),
        )
    }
}
