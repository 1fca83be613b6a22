//! Command-line entry point: discover, validate, report.

use anyhow::Result;
use std::io;
use std::process::ExitCode;

use crate::checker::MermaidCli;
use crate::config::Config;
use crate::discover::find_documents;
use crate::report::{write_diagnostic, write_verdict};
use crate::validation::validate_documents_with;

/// Run the checker against `docs/` in the current directory
pub fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    run_with_config(&config)
}

/// Run with an already-built configuration; logging must be set up by the caller
pub fn run_with_config(config: &Config) -> Result<ExitCode> {
    let checker = MermaidCli::new(&config.checker);
    log::debug!("Using checker {}", checker.program().display());

    let documents = find_documents(&config.docs_root)?;
    let report = validate_documents_with(&documents, &checker, |diagnostic| {
        if let Err(err) = write_diagnostic(&mut io::stderr().lock(), diagnostic) {
            log::error!("Failed to write diagnostic: {}", err);
        }
    })?;

    let code = write_verdict(&report, &mut io::stdout().lock())?;
    Ok(code)
}
