pub mod engine;
pub mod report_sink;
pub mod source;

pub use engine::IComplexityEngine;
pub use report_sink::IReportSink;
pub use source::ICountryProductSource;
