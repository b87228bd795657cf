//! The `Record` trait: structural metadata and field access for one type.
//!
//! A record exposes a descriptor table (discovered once per type) plus a
//! read/write accessor keyed by field name. The mapper never inspects a type
//! any other way.
//!
//! Most records are declared with [`record!`](crate::record), which generates
//! the whole impl. Hand-written impls are fine as long as they keep
//! `fields()`, `read_field` and `write_field` consistent with each other.

use crate::domain::{
    error::DomainError,
    field::{FieldDescriptor, VisibilityScope},
    value::FieldValue,
};

pub trait Record {
    /// Name used in diagnostics.
    fn type_name() -> &'static str;

    /// Fields in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Current value of `name`, or `None` if the type has no such field.
    fn read_field(&self, name: &str) -> Option<FieldValue>;

    /// Store `value` into `name`.
    ///
    /// Fails with [`DomainError::IncompatibleAssignment`] when the value's
    /// kind differs from the field's declared kind, and with
    /// [`DomainError::InvalidFieldSelector`] when no such field exists.
    fn write_field(&mut self, name: &str, value: FieldValue) -> Result<(), DomainError>;

    /// Look up a field declared directly on this type.
    fn descriptor(name: &str) -> Result<&'static FieldDescriptor, DomainError> {
        Self::fields()
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| DomainError::InvalidFieldSelector {
                type_name: Self::type_name(),
                selector: name.to_owned(),
            })
    }

    /// Fields admitted by `scope`, in declaration order.
    fn visible_fields(scope: VisibilityScope) -> impl Iterator<Item = &'static FieldDescriptor> {
        Self::fields()
            .iter()
            .filter(move |field| scope.admits(field.visibility))
    }
}
