// ABOUTME: Error types for template substitution operations
// ABOUTME: Covers missing templates, unwritable outputs, and unusable variable mappings

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template file not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read template {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Variable '{key}' has no value")]
    MissingValue { key: String },

    #[error("Invalid variable name '{key}': must be non-empty and must not contain '{delimiter}'")]
    InvalidKey { key: String, delimiter: char },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
