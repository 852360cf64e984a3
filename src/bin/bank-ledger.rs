use std::fs::File;

use anyhow::{Context, Result};
use bank_ledger::bin_utils::{OperationError, Service, demo::run_demo};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(filename) = std::env::args().nth(1) else {
        return run_demo(&mut std::io::stdout());
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            OperationError::CommandErr(err) => eprintln!("Error at line {line}: {err}"),
            OperationError::LedgerErr(err) => eprintln!("Rejected at line {line}: {err}"),
        }),
    };
    service.run()
}
