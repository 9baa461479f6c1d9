//! # complexity-engine
//!
//! Complexity Engine: diversity/ubiquity normalization, the coupled
//! country and product spaces, and ECI/PCI extraction from the eigenvector
//! of the second-largest eigenvalue of each space (Method of Reflections,
//! eigenvector formulation).

pub mod eigen;
pub mod engine;
pub mod index;
pub mod normalization;
pub mod spaces;

pub use eigen::{EigenPair, EigenSolver};
pub use engine::ComplexityEngine;
pub use index::standardize;
