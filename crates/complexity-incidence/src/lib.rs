//! # complexity-incidence
//!
//! Incidence Builder: turns a country → products mapping into the binary
//! matrix M plus stable country and product label orderings.
//!
//! Pipeline: [`normalize`] names → [`validation::validate`] → [`builder::build`].

pub mod builder;
pub mod normalize;
pub mod validation;

pub use builder::{build, build_validated};
pub use normalize::{normalize_mapping, normalize_name, parse_product_list};
pub use validation::validate;
