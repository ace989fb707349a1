use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use atm_session::{
    bin_utils::{Service, ServiceExit, csv_printer::save_statement},
    config::SessionConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // stderr keeps log lines out of the interactive prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let statement_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = SessionConfig::from_env().context("Failed to load ATM configuration")?;

    let service = Service {
        input: io::stdin().lock(),
        output: &mut io::stdout(),
        config,
    };
    match service.run()? {
        ServiceExit::AuthenticationFailed => Ok(ExitCode::FAILURE),
        ServiceExit::Finished(history) => {
            if let Some(path) = statement_path {
                save_statement(&path, &history)?;
                tracing::info!(path = %path.display(), records = history.len(), "statement written");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
