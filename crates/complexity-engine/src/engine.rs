use complexity_core::config::EigenConfig;
use complexity_core::constants::{
    ECI_SERIES_NAME, MIN_COUNTRIES, MIN_PRODUCTS, PCI_SERIES_NAME,
};
use complexity_core::traits::IComplexityEngine;
use complexity_core::{
    ComplexityBreakdown, ComplexityError, ComplexityReport, ComplexityResult, IncidenceMatrix,
    LabeledMatrix,
};
use nalgebra::DMatrix;
use tracing::{debug, info};

use crate::eigen::EigenSolver;
use crate::{index, normalization, spaces};

const COUNTRY_SPACE_STAGE: &str = "country space";
const PRODUCT_SPACE_STAGE: &str = "product space";

/// Computes both spaces and both complexity indices from an incidence matrix.
///
/// Stateless apart from solver tunables; repeated calls on the same input
/// return identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityEngine {
    solver: EigenSolver,
}

impl ComplexityEngine {
    pub fn new(config: &EigenConfig) -> Self {
        Self {
            solver: EigenSolver::new(config),
        }
    }

    pub fn solver(&self) -> &EigenSolver {
        &self.solver
    }

    /// Diversity, ubiquity, A and B.
    pub fn breakdown(&self, incidence: &IncidenceMatrix) -> ComplexityResult<ComplexityBreakdown> {
        normalization::breakdown(incidence)
    }

    /// `(product_space, country_space)` after the degenerate-input and size checks.
    pub fn spaces(
        &self,
        incidence: &IncidenceMatrix,
    ) -> ComplexityResult<(DMatrix<f64>, DMatrix<f64>)> {
        let bd = self.breakdown(incidence)?;
        check_size(incidence)?;
        Ok((
            spaces::product_space(&bd.a, &bd.b),
            spaces::country_space(&bd.a, &bd.b),
        ))
    }

    /// Full pipeline: spaces, then ECI from the country space and PCI from the
    /// product space.
    pub fn compute(&self, incidence: &IncidenceMatrix) -> ComplexityResult<ComplexityReport> {
        debug!(
            countries = incidence.n_countries(),
            products = incidence.n_products(),
            "computing complexity"
        );
        let (product_space, country_space) = self.spaces(incidence)?;

        let eci = index::complexity_index(
            &self.solver,
            &country_space,
            incidence.countries(),
            ECI_SERIES_NAME,
            COUNTRY_SPACE_STAGE,
        )?;
        let pci = index::complexity_index(
            &self.solver,
            &product_space,
            incidence.products(),
            PCI_SERIES_NAME,
            PRODUCT_SPACE_STAGE,
        )?;

        info!(
            countries = incidence.n_countries(),
            products = incidence.n_products(),
            "complexity indices computed"
        );

        Ok(ComplexityReport {
            incidence: incidence.to_labeled(),
            product_space: LabeledMatrix::new(
                product_space,
                incidence.products().to_vec(),
                incidence.products().to_vec(),
            )?,
            country_space: LabeledMatrix::new(
                country_space,
                incidence.countries().to_vec(),
                incidence.countries().to_vec(),
            )?,
            eci,
            pci,
        })
    }
}

impl IComplexityEngine for ComplexityEngine {
    fn compute(&self, incidence: &IncidenceMatrix) -> ComplexityResult<ComplexityReport> {
        ComplexityEngine::compute(self, incidence)
    }
}

fn check_size(incidence: &IncidenceMatrix) -> ComplexityResult<()> {
    if incidence.n_countries() < MIN_COUNTRIES || incidence.n_products() < MIN_PRODUCTS {
        return Err(ComplexityError::InsufficientData {
            countries: incidence.n_countries(),
            products: incidence.n_products(),
        });
    }
    Ok(())
}
