use crate::errors::ComplexityResult;
use crate::models::CountryProducts;

/// Data-entry collaborator: supplies the complete country → products mapping once.
pub trait ICountryProductSource {
    /// Load the mapping. Names are expected lowercase-trimmed.
    fn load(&self) -> ComplexityResult<CountryProducts>;
}
