use std::process::ExitCode;

use clap::Parser;
use complexity_cli::{run, Cli};
use complexity_core::errors::ComplexityErrorCode;

fn main() -> ExitCode {
    complexity_core::tracing::init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.error_code(), "run failed");
            eprintln!("{}", err.coded_string());
            ExitCode::FAILURE
        }
    }
}
