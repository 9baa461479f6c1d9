use std::io::Write;

use complexity_core::errors::InputError;
use complexity_core::traits::IReportSink;
use complexity_core::{ComplexityReport, ComplexityResult};

/// Writes the report as one pretty-printed JSON document.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> IReportSink for JsonSink<W> {
    fn emit(&mut self, report: &ComplexityReport) -> ComplexityResult<()> {
        let write_err = |message: String| InputError::Write { message };
        serde_json::to_writer_pretty(&mut self.out, report).map_err(|e| write_err(e.to_string()))?;
        writeln!(self.out).map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }
}
