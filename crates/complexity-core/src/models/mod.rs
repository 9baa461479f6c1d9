pub mod breakdown;
pub mod country_products;
pub mod incidence;
pub mod labeled;
pub mod report;

pub use breakdown::ComplexityBreakdown;
pub use country_products::{CountryEntry, CountryProducts};
pub use incidence::IncidenceMatrix;
pub use labeled::{LabeledMatrix, LabeledSeries};
pub use report::ComplexityReport;
