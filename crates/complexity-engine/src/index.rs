//! ECI/PCI extraction from a space matrix.

use complexity_core::constants::IMAGINARY_WARN_THRESHOLD;
use complexity_core::{ComplexityError, ComplexityResult, LabeledSeries};
use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::eigen::EigenSolver;

/// Real part of the eigenvector of the second-largest eigenvalue of `space`,
/// labeled in row order.
///
/// The largest eigenvalue's vector is the trivial uniform direction and is
/// skipped. No sign or scale normalization beyond the solver's convention.
pub fn complexity_index(
    solver: &EigenSolver,
    space: &DMatrix<f64>,
    labels: &[String],
    name: &str,
    stage: &str,
) -> ComplexityResult<LabeledSeries> {
    let pair = solver.second_pair(space, stage)?;

    if pair.value.im.abs() > IMAGINARY_WARN_THRESHOLD {
        warn!(stage, eigenvalue = %pair.value, "second eigenvalue is complex, keeping real part only");
    }
    let discarded = pair.max_imaginary();
    if discarded > IMAGINARY_WARN_THRESHOLD {
        warn!(stage, discarded, "discarding imaginary part of eigenvector");
    }

    let values = pair.real_vector();
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ComplexityError::numeric(stage, "index contains NaN or Inf"));
    }

    debug!(stage, eigenvalue = pair.value.re, len = values.len(), "extracted {name}");
    LabeledSeries::new(name, labels, &values)
}

/// Z-score an index (mean 0, population standard deviation 1).
///
/// A constant series has no spread and maps to all zeros.
pub fn standardize(series: &LabeledSeries) -> LabeledSeries {
    let n = series.len();
    if n == 0 {
        return series.clone();
    }
    let values = series.values();
    let mean = values.mean();
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();
    if std_dev <= f64::EPSILON {
        return series.map_values(|_| 0.0);
    }
    series.map_values(|v| (v - mean) / std_dev)
}
