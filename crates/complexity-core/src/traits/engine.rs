use crate::errors::ComplexityResult;
use crate::models::{ComplexityReport, IncidenceMatrix};

/// Computes the country/product spaces and the ECI/PCI from an incidence matrix.
pub trait IComplexityEngine {
    /// Pure function of `incidence`; no partial results on failure.
    fn compute(&self, incidence: &IncidenceMatrix) -> ComplexityResult<ComplexityReport>;
}
