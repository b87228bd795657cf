//! Per-session mapping configuration.

use std::collections::{HashMap, HashSet};

use crate::domain::{FieldValue, VisibilityScope};

/// Exclusions, overrides and visibility scopes for one mapping session.
///
/// Both scopes default to [`VisibilityScope::PublicAndNonPublic`]. A field
/// that is both excluded and overridden is excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapperOptions {
    excluded: HashSet<&'static str>,
    overrides: HashMap<&'static str, FieldValue>,
    source_scope: VisibilityScope,
    destination_scope: VisibilityScope,
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(&mut self, field: &'static str) {
        self.excluded.insert(field);
    }

    /// Store an override, replacing any earlier one for the same field.
    pub fn set_override(&mut self, field: &'static str, value: FieldValue) -> Option<FieldValue> {
        self.overrides.insert(field, value)
    }

    pub fn set_source_scope(&mut self, scope: VisibilityScope) {
        self.source_scope = scope;
    }

    pub fn set_destination_scope(&mut self, scope: VisibilityScope) {
        self.destination_scope = scope;
    }

    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded.contains(field)
    }

    pub fn override_for(&self, field: &str) -> Option<&FieldValue> {
        self.overrides.get(field)
    }

    pub fn excluded(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.excluded.iter().copied()
    }

    pub fn overridden(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.overrides.keys().copied()
    }

    pub const fn source_scope(&self) -> VisibilityScope {
        self.source_scope
    }

    pub const fn destination_scope(&self) -> VisibilityScope {
        self.destination_scope
    }
}
