//! Validation Engine
//!
//! Runs every extracted diagram through a syntax checker and accumulates
//! the outcome. Discovery and console output live elsewhere.

pub mod engine;

pub use engine::{
    validate_documents, validate_documents_with, validate_text, Diagnostic, ValidationReport,
};
