use serde::Serialize;

use super::{LabeledMatrix, LabeledSeries};

/// Everything a report sink needs: the incidence matrix, both spaces, and both indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityReport {
    pub incidence: LabeledMatrix,
    pub product_space: LabeledMatrix,
    pub country_space: LabeledMatrix,
    /// Economic Complexity Index, in country label order.
    pub eci: LabeledSeries,
    /// Product Complexity Index, in product label order.
    pub pci: LabeledSeries,
}
