//! Unified error handling for micromap.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for micromap operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MicromapError {
    /// Errors from the domain layer (bad selectors, bad assignments).
    #[error("Mapping error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (document loading).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl MicromapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Selector => ErrorCategory::Selector,
                crate::domain::ErrorCategory::Assignment => ErrorCategory::Assignment,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Always `false`: every failure is a configuration mistake or bad input,
    /// and repeating the same call yields the same error.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selector,
    Assignment,
    Document,
    Configuration,
}

/// Convenient result type alias.
pub type MicromapResult<T> = Result<T, MicromapError>;
