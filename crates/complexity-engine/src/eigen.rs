//! General (non-symmetric) real eigen-decomposition.
//!
//! Eigenvalues come from a real Schur decomposition. Eigenvectors come from
//! complex shifted inverse iteration against each eigenvalue, so complex
//! pairs and near-symmetric matrices are handled the same way. Nothing here
//! assumes symmetry.
//!
//! Conventions:
//! - pairs are ordered by descending real part; the sort is stable, so
//!   numerically equal eigenvalues keep the order the Schur routine emitted
//!   them in (undefined among equal values);
//! - eigenvectors have unit Euclidean norm, and the first component whose
//!   modulus is within `1e-6` (relative) of the largest is rotated to be real
//!   and positive;
//! - eigenvectors of a repeated eigenvalue are mutually orthogonal when the
//!   eigenspace allows it, otherwise (defective matrices) they may coincide.

use complexity_core::config::EigenConfig;
use complexity_core::{ComplexityError, ComplexityResult};
use nalgebra::{Complex, DMatrix, DVector, Schur};
use tracing::{debug, trace};

/// Relative slack used to pick the component fixed real-positive.
const PHASE_PIVOT_SLACK: f64 = 1e-6;

/// Maximum number of times the shift perturbation is enlarged when the
/// shifted system is exactly singular.
const MAX_SHIFT_RETRIES: usize = 6;

/// One eigenvalue and its unit eigenvector.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    pub value: Complex<f64>,
    pub vector: DVector<Complex<f64>>,
}

impl EigenPair {
    /// Real part of the eigenvector; imaginary parts are discarded.
    pub fn real_vector(&self) -> DVector<f64> {
        self.vector.map(|c| c.re)
    }

    /// Largest imaginary magnitude across the eigenvector.
    pub fn max_imaginary(&self) -> f64 {
        self.vector.iter().fold(0.0, |acc, c| acc.max(c.im.abs()))
    }
}

/// Eigen solver for dense real matrices.
#[derive(Debug, Clone, Copy)]
pub struct EigenSolver {
    tolerance: f64,
    max_iterations: usize,
    inverse_iterations: usize,
}

impl EigenSolver {
    pub fn new(config: &EigenConfig) -> Self {
        Self {
            tolerance: config.effective_tolerance(),
            max_iterations: config.effective_max_iterations(),
            inverse_iterations: config.effective_inverse_iterations(),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// All eigenvalues, ordered by descending real part (stable).
    pub fn eigenvalues(
        &self,
        matrix: &DMatrix<f64>,
        stage: &str,
    ) -> ComplexityResult<Vec<Complex<f64>>> {
        check_square_finite(matrix, stage)?;

        let schur = Schur::try_new(matrix.clone(), self.tolerance, self.max_iterations)
            .ok_or_else(|| {
                ComplexityError::numeric(
                    stage,
                    format!(
                        "Schur decomposition did not converge within {} iterations",
                        self.max_iterations
                    ),
                )
            })?;

        let mut values: Vec<Complex<f64>> = schur.complex_eigenvalues().iter().copied().collect();
        if let Some(bad) = values.iter().find(|v| !v.re.is_finite() || !v.im.is_finite()) {
            return Err(ComplexityError::numeric(
                stage,
                format!("non-finite eigenvalue {bad}"),
            ));
        }

        values.sort_by(|a, b| b.re.total_cmp(&a.re));
        trace!(stage, ?values, "sorted eigenvalues");
        Ok(values)
    }

    /// Full decomposition: every eigenpair, ordered as [`Self::eigenvalues`].
    pub fn decompose(&self, matrix: &DMatrix<f64>, stage: &str) -> ComplexityResult<Vec<EigenPair>> {
        self.leading_pairs(matrix, matrix.nrows(), stage)
    }

    /// The pair for the second-largest eigenvalue (by real part).
    ///
    /// Fails with `NumericInstability` on matrices smaller than 2×2; the
    /// engine rejects such inputs earlier with `InsufficientData`.
    pub fn second_pair(&self, matrix: &DMatrix<f64>, stage: &str) -> ComplexityResult<EigenPair> {
        if matrix.nrows() < 2 {
            return Err(ComplexityError::numeric(
                stage,
                "second eigenvalue requested from a matrix smaller than 2x2",
            ));
        }
        let mut pairs = self.leading_pairs(matrix, 2, stage)?;
        Ok(pairs.swap_remove(1))
    }

    /// The first `count` eigenpairs in sorted order.
    ///
    /// Vectors of numerically equal eigenvalues are kept orthogonal to the
    /// ones already found for the same value.
    pub fn leading_pairs(
        &self,
        matrix: &DMatrix<f64>,
        count: usize,
        stage: &str,
    ) -> ComplexityResult<Vec<EigenPair>> {
        let values = self.eigenvalues(matrix, stage)?;
        let complex = matrix.map(|x| Complex::new(x, 0.0));
        let scale = matrix.norm().max(1.0);
        let cluster_tol = self.residual_tolerance() * scale;

        let mut pairs: Vec<EigenPair> = Vec::with_capacity(count.min(values.len()));
        for value in values.into_iter().take(count) {
            let same_value: Vec<&DVector<Complex<f64>>> = pairs
                .iter()
                .filter(|p| (p.value - value).norm() <= cluster_tol)
                .map(|p| &p.vector)
                .collect();

            let vector = match self.inverse_iteration(&complex, value, scale, &same_value, stage) {
                Ok(v) => v,
                // Defective eigenvalue: no independent vector exists, accept a repeated one.
                Err(_) if !same_value.is_empty() => {
                    debug!(stage, %value, "eigenspace exhausted, repeating eigenvector");
                    self.inverse_iteration(&complex, value, scale, &[], stage)?
                }
                Err(e) => return Err(e),
            };
            pairs.push(EigenPair { value, vector });
        }
        Ok(pairs)
    }

    /// Residuals are judged against `sqrt(tolerance)` so defective and
    /// clustered eigenvalues still converge.
    fn residual_tolerance(&self) -> f64 {
        self.tolerance.sqrt()
    }

    fn inverse_iteration(
        &self,
        matrix: &DMatrix<Complex<f64>>,
        value: Complex<f64>,
        scale: f64,
        exclude: &[&DVector<Complex<f64>>],
        stage: &str,
    ) -> ComplexityResult<DVector<Complex<f64>>> {
        let n = matrix.nrows();
        let residual_tol = self.residual_tolerance() * scale;

        let mut delta = self.tolerance * scale;
        let lu = factor_shifted(matrix, value, &mut delta, stage)?;

        let mut v = start_vector(n, exclude).ok_or_else(|| {
            ComplexityError::numeric(stage, format!("eigenspace of {value} is exhausted"))
        })?;

        for iteration in 0..self.inverse_iterations {
            let w = lu.solve(&v).ok_or_else(|| {
                ComplexityError::numeric(stage, "shifted system became singular")
            })?;
            let w = project_out(w, exclude);
            let norm = w.norm();
            if !norm.is_finite() {
                return Err(ComplexityError::numeric(
                    stage,
                    format!("inverse iteration diverged for eigenvalue {value}"),
                ));
            }
            if norm <= f64::EPSILON {
                return Err(ComplexityError::numeric(
                    stage,
                    format!("eigenspace of {value} is exhausted"),
                ));
            }
            v = w.unscale(norm);

            let residual = (matrix * &v - v.map(|c| c * value)).norm();
            if residual <= residual_tol {
                trace!(stage, %value, iteration, residual, "eigenvector converged");
                // One polishing step flushes what is left of other eigendirections.
                let polished = lu
                    .solve(&v)
                    .map(|w| project_out(w, exclude))
                    .filter(|w| w.norm().is_finite() && w.norm() > f64::EPSILON)
                    .map(|w| {
                        let norm = w.norm();
                        w.unscale(norm)
                    })
                    .unwrap_or(v);
                return Ok(fix_phase(polished));
            }
        }

        Err(ComplexityError::numeric(
            stage,
            format!(
                "eigenvector for {value} did not converge within {} inverse iterations",
                self.inverse_iterations
            ),
        ))
    }
}

impl Default for EigenSolver {
    fn default() -> Self {
        Self::new(&EigenConfig::default())
    }
}

fn check_square_finite(matrix: &DMatrix<f64>, stage: &str) -> ComplexityResult<()> {
    if !matrix.is_square() {
        return Err(ComplexityError::DimensionMismatch {
            what: format!("{stage} columns"),
            expected: matrix.nrows(),
            actual: matrix.ncols(),
        });
    }
    if matrix.iter().any(|x| !x.is_finite()) {
        return Err(ComplexityError::numeric(stage, "matrix contains NaN or Inf"));
    }
    Ok(())
}

/// LU of `A - (value + delta) I`, enlarging `delta` while the system is exactly singular.
fn factor_shifted(
    matrix: &DMatrix<Complex<f64>>,
    value: Complex<f64>,
    delta: &mut f64,
    stage: &str,
) -> ComplexityResult<nalgebra::LU<Complex<f64>, nalgebra::Dyn, nalgebra::Dyn>> {
    let n = matrix.nrows();
    for _ in 0..=MAX_SHIFT_RETRIES {
        let shift = value + Complex::new(*delta, 0.0);
        let shifted = matrix - DMatrix::<Complex<f64>>::identity(n, n) * shift;
        let lu = shifted.lu();
        if lu.is_invertible() {
            return Ok(lu);
        }
        *delta *= 10.0;
    }
    Err(ComplexityError::numeric(
        stage,
        format!("shifted system for eigenvalue {value} is singular"),
    ))
}

/// Deterministic start vector with no component in `exclude`.
fn start_vector(n: usize, exclude: &[&DVector<Complex<f64>>]) -> Option<DVector<Complex<f64>>> {
    let irregular =
        DVector::from_fn(n, |i, _| Complex::new(1.0 / ((i + 1) as f64).sqrt(), 0.0));
    let candidates = std::iter::once(irregular).chain((0..n).map(|k| {
        DVector::from_fn(n, |i, _| Complex::new(if i == k { 1.0 } else { 0.0 }, 0.0))
    }));

    for candidate in candidates {
        let projected = project_out(candidate, exclude);
        let norm = projected.norm();
        if norm > 1e-8 {
            return Some(projected.unscale(norm));
        }
    }
    None
}

/// Remove the components along each (unit) vector in `exclude`.
fn project_out(
    mut v: DVector<Complex<f64>>,
    exclude: &[&DVector<Complex<f64>>],
) -> DVector<Complex<f64>> {
    for u in exclude {
        let coeff = u.dotc(&v);
        v -= u.map(|c| c * coeff);
    }
    v
}

/// Rotate a unit vector so its pivot component is real and positive.
fn fix_phase(v: DVector<Complex<f64>>) -> DVector<Complex<f64>> {
    let max = v.iter().fold(0.0_f64, |acc, c| acc.max(c.norm()));
    if max == 0.0 {
        return v;
    }
    let pivot = v
        .iter()
        .copied()
        .find(|c| c.norm() >= max * (1.0 - PHASE_PIVOT_SLACK))
        .unwrap_or(Complex::new(1.0, 0.0));
    let rotation = pivot.conj() / pivot.norm();
    v.map(|c| c * rotation)
}
