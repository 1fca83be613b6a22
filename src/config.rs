//! Configuration management for the Mermaid docs checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Checker binary selection
//!
//! The documentation glob is fixed; only ambient knobs are configurable.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Root directory scanned for documentation files
pub const DOCS_ROOT: &str = "docs";

/// Default mermaid-cli executable
pub const DEFAULT_CHECKER: &str = "mmdc";

/// Command-line arguments for the Mermaid docs checker
#[derive(Debug, Parser)]
#[command(name = "mermaid-check")]
#[command(about = "Validate Mermaid diagrams embedded in docs/**/*.{md,mdx}")]
#[command(version)]
pub struct Args {
    /// Mermaid CLI executable used to parse diagrams
    #[arg(
        long,
        env = "MERMAID_CHECK_MMDC",
        default_value = DEFAULT_CHECKER,
        help = "Path to the mermaid-cli (mmdc) executable"
    )]
    pub checker: PathBuf,

    /// Log level for diagnostics logging
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory walked for `.md` and `.mdx` files
    pub docs_root: PathBuf,
    /// Executable invoked for each diagram
    pub checker: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if args.checker.as_os_str().is_empty() {
            anyhow::bail!("checker executable must not be empty");
        }

        Ok(Config {
            docs_root: PathBuf::from(DOCS_ROOT),
            checker: args.checker,
            log_level: args.log_level,
        })
    }
}
