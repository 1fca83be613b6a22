//! Validation Engine
//!
//! Core scan loop separated from discovery and reporting concerns.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::checker::{CheckError, SyntaxChecker};
use crate::extract;

/// A diagram the checker rejected
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// 1-based ordinal of the block within `path`
    pub block: usize,
    /// Line of the opening fence
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "❌ Error in file: {} [block #{}]",
            self.path.display(),
            self.block
        )?;
        write!(f, "{}", self.message)
    }
}

/// Result of validating a set of documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Documents read
    pub documents: usize,
    /// Diagram blocks checked
    pub blocks: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, path: &Path, block: usize, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            path: path.to_path_buf(),
            block,
            line,
            message,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validate every mermaid block of one document's text.
///
/// Syntax errors are recorded in `report`; a checker that cannot run at
/// all aborts with an error.
pub fn validate_text<C: SyntaxChecker>(
    path: &Path,
    text: &str,
    checker: &C,
    report: &mut ValidationReport,
) -> Result<()> {
    report.documents += 1;

    for block in extract::blocks(text) {
        report.blocks += 1;

        match checker.parse(block.content) {
            Ok(()) => {
                log::debug!("{} block #{} is valid", path.display(), block.ordinal);
            }
            Err(CheckError::Syntax(message)) => {
                log::debug!(
                    "{} block #{} (line {}) rejected",
                    path.display(),
                    block.ordinal,
                    block.line
                );
                report.add_error(path, block.ordinal, block.line, message);
            }
            Err(CheckError::Unavailable(err)) => {
                return Err(err.context(format!(
                    "Could not check {} [block #{}]",
                    path.display(),
                    block.ordinal
                )));
            }
        }
    }

    if let Some(line) = extract::unterminated_fence(text) {
        log::warn!(
            "{}:{}: mermaid fence is never closed, skipping it",
            path.display(),
            line
        );
    }

    Ok(())
}

/// Read and validate each document in order.
///
/// Unreadable files are fatal. Invalid UTF-8 is replaced, not rejected.
pub fn validate_documents<P, C>(paths: &[P], checker: &C) -> Result<ValidationReport>
where
    P: AsRef<Path>,
    C: SyntaxChecker,
{
    validate_documents_with(paths, checker, |_| {})
}

/// Like [`validate_documents`], calling `on_error` for each diagnostic as soon
/// as its document is done.
///
/// Diagnostics found before a fatal error are still handed to `on_error`.
pub fn validate_documents_with<P, C, F>(
    paths: &[P],
    checker: &C,
    mut on_error: F,
) -> Result<ValidationReport>
where
    P: AsRef<Path>,
    C: SyntaxChecker,
    F: FnMut(&Diagnostic),
{
    let mut report = ValidationReport::new();

    for path in paths {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            log::warn!("{}: invalid UTF-8 replaced", path.display());
        }

        let seen = report.diagnostics.len();
        let outcome = validate_text(path, &text, checker, &mut report);
        report.diagnostics[seen..].iter().for_each(&mut on_error);
        outcome?;
    }

    log::info!(
        "Checked {} blocks in {} documents, {} failed",
        report.blocks,
        report.documents,
        report.diagnostics.len()
    );

    Ok(report)
}
