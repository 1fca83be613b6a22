use anyhow::Result;
use mermaid_docs_check::cli::run;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    run()
}
