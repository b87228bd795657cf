//! Application layer errors.
//!
//! These errors represent failures around a mapping, not inside it: reading
//! and parsing the documents that feed a [`DocumentMapper`](crate::application::DocumentMapper).
//! Mapping failures are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while preparing a field source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Document file could not be read.
    #[error("Failed to read document at {path}: {reason}")]
    DocumentRead { path: PathBuf, reason: String },

    /// Document text is malformed or its root is not a key/value record.
    #[error("Invalid {format} document: {reason}")]
    DocumentParse { format: &'static str, reason: String },

    /// No adapter handles this document type.
    #[error("Unsupported document format: {extension}")]
    UnsupportedFormat { extension: String },

    /// The path has no extension to pick an adapter from.
    #[error("Cannot detect the format of {path}: no file extension")]
    MissingExtension { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DocumentRead { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::DocumentParse { format, .. } => vec![
                format!("Check that the input is valid {format}"),
                "The document root must be an object of field names to values".into(),
            ],
            Self::UnsupportedFormat { extension } => vec![
                format!("'{extension}' is not a known document type"),
                "Supported extensions: .json, .toml".into(),
            ],
            Self::MissingExtension { path } => vec![
                format!("Rename {} with a .json or .toml extension", path.display()),
                "Or read the text yourself and pick a format explicitly".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocumentRead { .. } | Self::DocumentParse { .. } => ErrorCategory::Document,
            Self::UnsupportedFormat { .. } | Self::MissingExtension { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}
