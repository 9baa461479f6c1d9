use nalgebra::{DMatrix, DVector};

/// Intermediate quantities of the complexity computation, for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityBreakdown {
    /// Row sums of M.
    pub diversity: DVector<f64>,
    /// Column sums of M.
    pub ubiquity: DVector<f64>,
    /// `D⁻¹ · M`; every row sums to 1.
    pub a: DMatrix<f64>,
    /// `M · U⁻¹`; every column sums to 1.
    pub b: DMatrix<f64>,
}
