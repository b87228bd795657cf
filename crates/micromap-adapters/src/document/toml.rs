//! TOML document source.
//!
//! Top-level keys are matched against destination field names. TOML
//! datetimes go through the same parsing as strings, so offset, local and
//! date-only forms all map onto `DateTime`/`Date` fields.

use std::{fs, path::Path};

use toml::{Table, Value};
use tracing::{debug, instrument, warn};

use micromap_core::{
    application::{ApplicationError, FieldSource},
    domain::{FieldDescriptor, FieldValue, ValueKind},
    error::MicromapResult,
};

use super::interpret;

const FORMAT: &str = "TOML";

#[derive(Debug, Clone, PartialEq)]
pub struct TomlDocument {
    root: Table,
}

impl TomlDocument {
    pub fn parse(text: &str) -> MicromapResult<Self> {
        let root = text
            .parse::<Table>()
            .map_err(|e| ApplicationError::DocumentParse {
                format: FORMAT,
                reason: e.to_string(),
            })?;

        Ok(Self { root })
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> MicromapResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::DocumentRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let document = Self::parse(&text)?;
        debug!(keys = document.root.len(), "Loaded TOML document");
        Ok(document)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }
}

impl FieldSource for TomlDocument {
    fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue> {
        let value = self.root.get(field.name)?;
        let resolved = convert(value, field.kind);

        if resolved.is_none() {
            warn!(
                field = field.name,
                found = value.type_str(),
                "TOML value cannot be mapped; field left unchanged"
            );
        }
        resolved
    }
}

/// TOML has no null, so an optional field only ever receives `Some`.
fn convert(value: &Value, kind: ValueKind) -> Option<FieldValue> {
    if let Some(inner) = kind.inner() {
        return convert(value, inner).map(|v| v.into_optional(kind));
    }

    match value {
        Value::String(s) => Some(interpret::text(s, kind)),
        Value::Integer(i) => Some(interpret::signed(*i, kind)),
        Value::Float(f) => Some(interpret::float(*f, kind)),
        Value::Boolean(b) => Some(FieldValue::Bool(*b)),
        Value::Datetime(dt) => Some(interpret::text(&dt.to_string(), kind)),
        Value::Array(items) => interpret::text_list(items.iter().map(Value::as_str)),
        Value::Table(_) => None,
    }
}
