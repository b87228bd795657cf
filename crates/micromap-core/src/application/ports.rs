//! Driven (output) ports - implemented by infrastructure.
//!
//! A [`FieldSource`] is anything that can hand out values by field name
//! without being a [`Record`](crate::domain::Record) itself: a parsed JSON or
//! TOML document, a plain map. The `micromap-adapters` crate provides the
//! document implementations.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{FieldDescriptor, FieldValue};

/// Port for name-keyed value sources.
///
/// Implemented by:
/// - `HashMap<String, FieldValue>` / `BTreeMap<String, FieldValue>` (in-process)
/// - `micromap_adapters::JsonDocument`
/// - `micromap_adapters::TomlDocument`
#[cfg_attr(test, mockall::automock)]
pub trait FieldSource {
    /// The value held for `field.name`, if any.
    ///
    /// Sources whose format cannot tell e.g. an `i32` from an `i64` use
    /// `field.kind` to pick a representation. When the held value cannot
    /// represent that kind, return it in its natural form; the mapper then
    /// reports the mismatch.
    fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue>;
}

impl FieldSource for HashMap<String, FieldValue> {
    fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue> {
        self.get(field.name).cloned()
    }
}

impl FieldSource for BTreeMap<String, FieldValue> {
    fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue> {
        self.get(field.name).cloned()
    }
}

impl<T: FieldSource + ?Sized> FieldSource for Box<T> {
    fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue> {
        (**self).resolve(field)
    }
}
