//! Data-entry sources. Each yields one complete, normalized mapping.

pub mod file;
pub mod line_format;
pub mod stdin;

pub use file::FileSource;
pub use line_format::parse_lines;
pub use stdin::StdinSource;
