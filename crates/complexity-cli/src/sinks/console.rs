//! Titled, column-aligned text rendering of a [`ComplexityReport`].

use std::io::Write;

use complexity_core::errors::InputError;
use complexity_core::traits::IReportSink;
use complexity_core::{ComplexityResult, ComplexityReport, LabeledMatrix, LabeledSeries};

pub const INCIDENCE_TITLE: &str = "Country-Product Matrix";
pub const PRODUCT_SPACE_TITLE: &str = "Product Space matrix";
pub const COUNTRY_SPACE_TITLE: &str = "Country Space matrix";
pub const ECI_TITLE: &str = "Economic Complexity Index (ECI)";
pub const PCI_TITLE: &str = "Product Complexity Index (PCI)";

pub struct ConsoleSink<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, precision: usize) -> Self {
        Self { out, precision }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, report: &ComplexityReport) -> std::io::Result<()> {
        writeln!(self.out, "Economic Complexity Calculator")?;
        writeln!(self.out)?;

        self.write_matrix(INCIDENCE_TITLE, &report.incidence, Some(0))?;
        self.write_matrix(PRODUCT_SPACE_TITLE, &report.product_space, None)?;
        self.write_matrix(COUNTRY_SPACE_TITLE, &report.country_space, None)?;

        writeln!(self.out, "Results:")?;
        writeln!(self.out, "--------")?;
        self.write_series(ECI_TITLE, &report.eci)?;
        self.write_series(PCI_TITLE, &report.pci)?;
        self.out.flush()
    }

    fn write_matrix(
        &mut self,
        title: &str,
        matrix: &LabeledMatrix,
        precision: Option<usize>,
    ) -> std::io::Result<()> {
        let precision = precision.unwrap_or(self.precision);
        let cells: Vec<Vec<String>> = matrix
            .to_rows()
            .iter()
            .map(|row| row.iter().map(|v| format!("{v:.precision$}")).collect())
            .collect();

        let label_width = matrix
            .row_labels()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = matrix
            .col_labels()
            .iter()
            .enumerate()
            .map(|(j, label)| {
                cells
                    .iter()
                    .map(|row| row[j].chars().count())
                    .chain(std::iter::once(label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        writeln!(self.out, "{title}:")?;
        write!(self.out, "{:label_width$}", "")?;
        for (label, width) in matrix.col_labels().iter().zip(&widths) {
            write!(self.out, "  {label:>width$}")?;
        }
        writeln!(self.out)?;
        for (label, row) in matrix.row_labels().iter().zip(&cells) {
            write!(self.out, "{label:<label_width$}")?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(self.out, "  {cell:>width$}")?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out)
    }

    fn write_series(&mut self, title: &str, series: &LabeledSeries) -> std::io::Result<()> {
        let precision = self.precision;
        writeln!(self.out, "{title}:")?;
        for (label, value) in series.iter() {
            writeln!(self.out, "{label}: {value:.precision$}")?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> IReportSink for ConsoleSink<W> {
    fn emit(&mut self, report: &ComplexityReport) -> ComplexityResult<()> {
        self.write_report(report).map_err(|e| InputError::Write {
            message: e.to_string(),
        })?;
        Ok(())
    }
}
