//! The coupled similarity matrices.

use nalgebra::DMatrix;

/// `Aᵗ · B` (products × products).
///
/// Entry (p, q) weighs how often p and q are co-exported, normalized by
/// exporter diversity and by the ubiquity of q.
pub fn product_space(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    a.transpose() * b
}

/// `A · Bᵗ` (countries × countries).
///
/// Entry (c, d) weighs the overlap of the export baskets of c and d,
/// normalized by the diversity of c and the ubiquity of shared products.
pub fn country_space(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    a * b.transpose()
}
