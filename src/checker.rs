//! Diagram Syntax Checker
//!
//! The grammar itself lives in mermaid-cli. This module only defines the
//! capability the scan engine needs and a process-backed implementation.

use anyhow::Context;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Why a diagram did not pass
#[derive(Debug)]
pub enum CheckError {
    /// The checker rejected the diagram source
    Syntax(String),
    /// The checker could not be run at all
    Unavailable(anyhow::Error),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Syntax(message) => write!(f, "{}", message),
            CheckError::Unavailable(err) => write!(f, "Diagram checker unavailable: {:#}", err),
        }
    }
}

impl std::error::Error for CheckError {}

/// Anything that can tell whether a diagram parses
pub trait SyntaxChecker {
    fn parse(&self, source: &str) -> Result<(), CheckError>;
}

impl<T: SyntaxChecker + ?Sized> SyntaxChecker for &T {
    fn parse(&self, source: &str) -> Result<(), CheckError> {
        (**self).parse(source)
    }
}

/// Checker backed by the mermaid-cli `mmdc` executable
#[derive(Debug, Clone)]
pub struct MermaidCli {
    program: PathBuf,
}

impl MermaidCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    fn run(&self, source: &str) -> anyhow::Result<Result<(), String>> {
        let workdir = tempfile::Builder::new()
            .prefix("mermaid-check")
            .tempdir()
            .context("Failed to create scratch directory")?;
        let input = workdir.path().join("diagram.mmd");
        let output = workdir.path().join("diagram.svg");

        let mut file = std::fs::File::create(&input)
            .with_context(|| format!("Failed to create {}", input.display()))?;
        file.write_all(source.as_bytes())
            .with_context(|| format!("Failed to write {}", input.display()))?;
        drop(file);

        log::trace!("Running {} on {}", self.program.display(), input.display());

        let result = Command::new(&self.program)
            .arg("--quiet")
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(&output)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if result.status.success() {
            return Ok(Ok(()));
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        let stdout = String::from_utf8_lossy(&result.stdout);
        let message = if !stderr.trim().is_empty() {
            stderr.trim().to_string()
        } else if !stdout.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            format!("{} exited with {}", self.program.display(), result.status)
        };

        Ok(Err(message))
    }
}

impl Default for MermaidCli {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CHECKER)
    }
}

impl SyntaxChecker for MermaidCli {
    fn parse(&self, source: &str) -> Result<(), CheckError> {
        match self.run(source) {
            Ok(verdict) => verdict.map_err(CheckError::Syntax),
            Err(err) => Err(CheckError::Unavailable(err)),
        }
    }
}
