//! End-to-end pipeline: resolve config, load input, build M, compute, report.

use std::io::Write;
use std::path::Path;

use complexity_core::traits::{ICountryProductSource, IComplexityEngine, IReportSink};
use complexity_core::{ComplexityConfig, ComplexityReport, ComplexityResult};
use complexity_engine::{standardize, ComplexityEngine};
use complexity_incidence::build_validated;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::sinks::{ConsoleSink, JsonSink};
use crate::sources::{FileSource, StdinSource};

/// Run the calculator once with the given arguments, writing the report to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> ComplexityResult<()> {
    let overrides = cli.overrides();
    let config = ComplexityConfig::load(Path::new("."), cli.config.as_deref(), Some(&overrides))?;

    let source: Box<dyn ICountryProductSource> = match &cli.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StdinSource),
    };

    let report = compute_report(source.as_ref(), &config)?;
    emit(&report, cli.format, config.report.effective_precision(), out)
}

/// Load, build, and compute. Indices are z-scored when the config asks for it.
pub fn compute_report(
    source: &dyn ICountryProductSource,
    config: &ComplexityConfig,
) -> ComplexityResult<ComplexityReport> {
    let mapping = source.load()?;
    let incidence = build_validated(&mapping)?;
    info!(
        countries = incidence.n_countries(),
        products = incidence.n_products(),
        "incidence matrix built"
    );

    let engine = ComplexityEngine::new(&config.eigen);
    let mut report = IComplexityEngine::compute(&engine, &incidence)?;
    if config.report.effective_standardize() {
        report.eci = standardize(&report.eci);
        report.pci = standardize(&report.pci);
    }
    Ok(report)
}

pub fn emit(
    report: &ComplexityReport,
    format: OutputFormat,
    precision: usize,
    out: &mut dyn Write,
) -> ComplexityResult<()> {
    match format {
        OutputFormat::Console => ConsoleSink::new(out, precision).emit(report),
        OutputFormat::Json => JsonSink::new(out).emit(report),
    }
}
