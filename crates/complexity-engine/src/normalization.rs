//! Diversity/ubiquity and the row- and column-normalized matrices A and B.

use complexity_core::{ComplexityBreakdown, ComplexityError, ComplexityResult, IncidenceMatrix};
use nalgebra::{DMatrix, DVector};

/// Row sums of M: products exported per country.
pub fn diversity(m: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_iterator(m.nrows(), m.row_iter().map(|row| row.sum()))
}

/// Column sums of M: exporters per product.
pub fn ubiquity(m: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_iterator(m.ncols(), m.column_iter().map(|col| col.sum()))
}

/// Diagonal matrix of reciprocals. Every entry must be non-zero.
fn inverse_diagonal(values: &DVector<f64>) -> DMatrix<f64> {
    DMatrix::from_diagonal(&values.map(|v| 1.0 / v))
}

/// Fail with `DegenerateInput` naming the first zero entry.
fn require_nonzero(values: &DVector<f64>, labels: &[String], kind: &str) -> ComplexityResult<()> {
    match values.iter().position(|v| *v == 0.0) {
        Some(idx) => Err(ComplexityError::degenerate(format!(
            "{kind} of '{}' is zero",
            labels.get(idx).map(String::as_str).unwrap_or("?")
        ))),
        None => Ok(()),
    }
}

/// Diversity, ubiquity, `A = D⁻¹·M` and `B = M·U⁻¹`.
///
/// A zero diversity or ubiquity is a violated precondition and fails with
/// `DegenerateInput`; it is never patched over.
pub fn breakdown(incidence: &IncidenceMatrix) -> ComplexityResult<ComplexityBreakdown> {
    let m = incidence.matrix();
    let diversity = diversity(m);
    let ubiquity = ubiquity(m);

    require_nonzero(&diversity, incidence.countries(), "diversity")?;
    require_nonzero(&ubiquity, incidence.products(), "ubiquity")?;

    let a = inverse_diagonal(&diversity) * m;
    let b = m * inverse_diagonal(&ubiquity);

    Ok(ComplexityBreakdown {
        diversity,
        ubiquity,
        a,
        b,
    })
}
