//! Field descriptors and visibility.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value::ValueKind;

// ── Visibility ───────────────────────────────────────────────────────────────

/// Accessibility of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    NonPublic,
}

impl Visibility {
    /// Classify a Rust visibility token as written in source.
    ///
    /// Only a bare `pub` is public; `pub(crate)`, `pub(super)` and the empty
    /// token are all non-public.
    pub fn from_token(token: &str) -> Self {
        if token.trim() == "pub" {
            Self::Public
        } else {
            Self::NonPublic
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::NonPublic => "non-public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VisibilityScope ──────────────────────────────────────────────────────────

/// Which fields of a record are eligible to take part in a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityScope {
    PublicOnly,
    #[default]
    PublicAndNonPublic,
}

impl VisibilityScope {
    pub const fn admits(self, visibility: Visibility) -> bool {
        match self {
            Self::PublicOnly => matches!(visibility, Visibility::Public),
            Self::PublicAndNonPublic => true,
        }
    }
}

// ── FieldDescriptor ──────────────────────────────────────────────────────────

/// One entry of a record type's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: ValueKind,
    pub visibility: Visibility,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: ValueKind, visibility: Visibility) -> Self {
        Self {
            name,
            kind,
            visibility,
        }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.visibility, self.name, self.kind)
    }
}
