/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of countries for the second eigenvalue of the country space to exist.
pub const MIN_COUNTRIES: usize = 2;

/// Minimum number of products for the second eigenvalue of the product space to exist.
pub const MIN_PRODUCTS: usize = 2;

/// Tolerance used when checking the row/column normalizations of A and B.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Discarded imaginary parts above this magnitude are logged as suspicious.
pub const IMAGINARY_WARN_THRESHOLD: f64 = 1e-8;

/// Name of the ECI series.
pub const ECI_SERIES_NAME: &str = "ECI";

/// Name of the PCI series.
pub const PCI_SERIES_NAME: &str = "PCI";

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "complexity.toml";
