//! Console Reporting
//!
//! Turns a validation report into console output and an exit status.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::validation::{Diagnostic, ValidationReport};

/// Line printed when every diagram parsed
pub const SUCCESS_LINE: &str = "✅ All Mermaid diagrams are valid.";

/// Write one diagnostic as its two console lines.
pub fn write_diagnostic<E: Write>(err: &mut E, diagnostic: &Diagnostic) -> io::Result<()> {
    writeln!(err, "{}", diagnostic)
}

/// Write the verdict to `out` and pick the exit code.
///
/// Diagnostics are expected to have been written already, as they were found.
pub fn write_verdict<O: Write>(report: &ValidationReport, out: &mut O) -> io::Result<ExitCode> {
    if report.is_valid() {
        writeln!(out, "{}", SUCCESS_LINE)?;
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
