// ============================================================================
// domain/error.rs - MAPPING ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value::ValueKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they carry only names and kinds)
/// - Categorizable (for display)
/// - Actionable (provides suggestions)
/// - Never transient: every variant is a caller-fixable configuration error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration-time errors
    // ========================================================================
    #[error("'{selector}' is not a field of {type_name}")]
    InvalidFieldSelector {
        type_name: &'static str,
        selector: String,
    },

    // ========================================================================
    // Execute-time errors
    // ========================================================================
    #[error("cannot assign {found} value to {type_name}.{field} (declared {expected})")]
    IncompatibleAssignment {
        type_name: &'static str,
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFieldSelector {
                type_name,
                selector,
            } => vec![
                format!("{type_name} has no field named '{selector}'"),
                "Field names are matched exactly and case-sensitively".into(),
                format!("Check the field list declared on {type_name}"),
            ],
            Self::IncompatibleAssignment {
                field,
                expected,
                found,
                ..
            } => vec![
                format!("'{field}' expects a {expected} value but received {found}"),
                "Use map_field to supply a value of the declared type".into(),
                format!("Or exclude '{field}' from the mapping"),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFieldSelector { .. } => ErrorCategory::Selector,
            Self::IncompatibleAssignment { .. } => ErrorCategory::Assignment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selector,
    Assignment,
}
