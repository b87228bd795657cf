//! JSON document source.
//!
//! The document root must be an object; its keys are matched against
//! destination field names exactly.
//!
//! ```json
//! {
//!   "first_name": "Test First",
//!   "age_in_years": 33,
//!   "created_on_utc": "2016-08-01T00:00:00Z",
//!   "nicknames": ["One", "Two", "Three"]
//! }
//! ```

use std::{fs, path::Path};

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use micromap_core::{
    application::{ApplicationError, FieldSource},
    domain::{FieldDescriptor, FieldValue, ValueKind},
    error::MicromapResult,
};

use super::interpret;

const FORMAT: &str = "JSON";

#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    root: Map<String, Value>,
}

impl JsonDocument {
    pub fn parse(text: &str) -> MicromapResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| ApplicationError::DocumentParse {
            format: FORMAT,
            reason: e.to_string(),
        })?;

        Self::from_value(value)
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> MicromapResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::DocumentRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let document = Self::parse(&text)?;
        debug!(keys = document.root.len(), "Loaded JSON document");
        Ok(document)
    }

    pub fn from_value(value: Value) -> MicromapResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ApplicationError::DocumentParse {
                format: FORMAT,
                reason: format!("root must be an object, found {}", type_name(&other)),
            }
            .into()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }
}

impl FieldSource for JsonDocument {
    fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue> {
        let value = self.root.get(field.name)?;
        let resolved = convert(value, field.kind);

        if resolved.is_none() && !value.is_null() {
            warn!(
                field = field.name,
                found = type_name(value),
                "JSON value cannot be mapped; field left unchanged"
            );
        }
        resolved
    }
}

fn convert(value: &Value, kind: ValueKind) -> Option<FieldValue> {
    if let Some(inner) = kind.inner() {
        return match value {
            Value::Null => FieldValue::null(kind),
            other => convert(other, inner).map(|v| v.into_optional(kind)),
        };
    }

    match value {
        Value::Null | Value::Object(_) => None,
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::String(s) => Some(interpret::text(s, kind)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(interpret::signed(i, kind))
            } else if let Some(u) = n.as_u64() {
                Some(interpret::unsigned(u, kind))
            } else {
                n.as_f64().map(|f| interpret::float(f, kind))
            }
        }
        Value::Array(items) => interpret::text_list(items.iter().map(Value::as_str)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::{TimeZone, Utc};
    use micromap_core::{
        domain::{MapValue, Visibility},
        error::MicromapError,
    };
    use tempfile::NamedTempFile;

    use super::*;

    fn field(name: &'static str, kind: ValueKind) -> FieldDescriptor {
        FieldDescriptor::new(name, kind, Visibility::Public)
    }

    const CUSTOMER: &str = r#"{
        "first_name": "Test First",
        "age_in_years": 33,
        "is_preferred_member": true,
        "created_on_utc": "2016-08-01T00:00:00Z",
        "nicknames": ["One", "Two", "Three"],
        "address": { "city": "Nowhere" },
        "middle_name": null,
        "mixed": ["a", 1]
    }"#;

    #[test]
    fn resolves_scalars_for_declared_kind() {
        let doc = JsonDocument::parse(CUSTOMER).unwrap();

        assert_eq!(
            doc.resolve(&field("first_name", ValueKind::Text)),
            Some(FieldValue::Text("Test First".into()))
        );
        assert_eq!(
            doc.resolve(&field("age_in_years", ValueKind::Int32)),
            Some(FieldValue::Int32(33))
        );
        assert_eq!(
            doc.resolve(&field("age_in_years", ValueKind::Int64)),
            Some(FieldValue::Int64(33))
        );
        assert_eq!(
            doc.resolve(&field("is_preferred_member", ValueKind::Bool)),
            Some(FieldValue::Bool(true))
        );
        assert_eq!(
            doc.resolve(&field("created_on_utc", ValueKind::DateTime)),
            Some(FieldValue::DateTime(
                Utc.with_ymd_and_hms(2016, 8, 1, 0, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn resolves_string_arrays() {
        let doc = JsonDocument::parse(CUSTOMER).unwrap();

        assert_eq!(
            doc.resolve(&field("nicknames", ValueKind::TextList)),
            Some(FieldValue::TextList(vec![
                "One".into(),
                "Two".into(),
                "Three".into()
            ]))
        );
        assert_eq!(doc.resolve(&field("mixed", ValueKind::TextList)), None);
    }

    #[test]
    fn skips_missing_null_and_nested() {
        let doc = JsonDocument::parse(CUSTOMER).unwrap();

        assert_eq!(doc.resolve(&field("last_name", ValueKind::Text)), None);
        assert_eq!(doc.resolve(&field("middle_name", ValueKind::Text)), None);
        assert_eq!(doc.resolve(&field("address", ValueKind::Text)), None);
    }

    #[test]
    fn null_clears_optional_fields() {
        let kind = <Option<String> as MapValue>::KIND;
        let doc = JsonDocument::parse(CUSTOMER).unwrap();

        assert_eq!(
            doc.resolve(&field("middle_name", kind)),
            Some(FieldValue::Optional(kind, None))
        );
        assert_eq!(
            doc.resolve(&field("first_name", kind)),
            Some(FieldValue::from(Some("Test First".to_string())))
        );
        assert_eq!(doc.resolve(&field("last_name", kind)), None);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let doc = JsonDocument::parse(CUSTOMER).unwrap();
        assert_eq!(doc.resolve(&field("First_Name", ValueKind::Text)), None);
        assert!(doc.keys().any(|k| k == "first_name"));
    }

    #[test]
    fn rejects_non_object_root() {
        let err = JsonDocument::parse("[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            MicromapError::Application(ApplicationError::DocumentParse { format: "JSON", .. })
        ));
        assert!(err.to_string().contains("found array"));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(JsonDocument::parse("{ not json").is_err());
    }

    #[test]
    fn loads_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "first_name": "From File" }"#).unwrap();

        let doc = JsonDocument::from_path(file.path()).unwrap();
        assert_eq!(
            doc.resolve(&field("first_name", ValueKind::Text)),
            Some(FieldValue::Text("From File".into()))
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = JsonDocument::from_path("/absolutely/does/not/exist.json").unwrap_err();
        assert!(matches!(
            err,
            MicromapError::Application(ApplicationError::DocumentRead { .. })
        ));
    }
}
