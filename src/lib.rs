//! Mermaid Docs Check
//!
//! Validates the Mermaid diagrams embedded in a documentation tree.
//!
//! This library provides:
//! - Discovery of `docs/**/*.{md,mdx}` files
//! - Extraction of fenced ```` ```mermaid ```` blocks
//! - Validation through a pluggable syntax checker (mermaid-cli by default)
//! - Console reporting and exit status

pub mod checker;
pub mod cli;
pub mod config;
pub mod discover;
pub mod extract;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use checker::{CheckError, MermaidCli, SyntaxChecker};
pub use config::Config;
pub use discover::find_documents;
pub use extract::{blocks, Block};
pub use validation::{validate_documents, validate_documents_with, Diagnostic, ValidationReport};
