use crate::errors::ComplexityResult;
use crate::models::ComplexityReport;

/// Display collaborator: renders a finished report.
pub trait IReportSink {
    fn emit(&mut self, report: &ComplexityReport) -> ComplexityResult<()>;
}
