// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for micromap.
//!
//! This module describes *what* a record looks like to the mapper: its
//! fields, their kinds and visibility, and how a single value is read from or
//! written into one. It knows nothing about mapping sessions.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application layer
//! - **Value semantics**: `FieldValue` and descriptors are plain data
//!
// Public API - what the world sees
pub mod error;
pub mod field;
pub mod record;
pub mod value;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use field::{FieldDescriptor, Visibility, VisibilityScope};
pub use record::Record;
pub use value::{FieldValue, MapValue, ValueKind};

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::record;

    record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Sample {
            pub title: String,
            pub count: i32,
            pub(crate) flagged: bool,
            tags: Vec<String>,
        }
    }

    // ========================================================================
    // Value Tests
    // ========================================================================

    #[test]
    fn field_value_reports_kind() {
        assert_eq!(FieldValue::from("x").kind(), ValueKind::Text);
        assert_eq!(FieldValue::from(7_i32).kind(), ValueKind::Int32);
        assert_eq!(FieldValue::from(7_i64).kind(), ValueKind::Int64);
        assert_eq!(FieldValue::from(vec!["a", "b"]).kind(), ValueKind::TextList);
        assert_eq!(
            FieldValue::from(NaiveDate::from_ymd_opt(2016, 8, 1).unwrap()).kind(),
            ValueKind::Date
        );
    }

    #[test]
    fn map_value_rejects_other_kinds() {
        assert_eq!(i32::from_value(FieldValue::Int32(3)), Ok(3));

        // No widening: an i32 is not an i64.
        let rejected = i64::from_value(FieldValue::Int32(3)).unwrap_err();
        assert_eq!(rejected, FieldValue::Int32(3));

        assert!(String::from_value(FieldValue::Bool(true)).is_err());
    }

    #[test]
    fn value_kind_display() {
        assert_eq!(ValueKind::TextList.to_string(), "string list");
        assert_eq!(ValueKind::UInt64.to_string(), "u64");
        assert!(ValueKind::UInt32.is_integer());
        assert!(!ValueKind::Float64.is_integer());
    }

    #[test]
    fn narrow_primitives_have_their_own_kinds() {
        assert_eq!(FieldValue::from(7_i8).kind(), ValueKind::Int8);
        assert_eq!(FieldValue::from(7_u16).kind(), ValueKind::UInt16);
        assert_eq!(FieldValue::from(1.5_f32).kind(), ValueKind::Float32);
        assert_eq!(FieldValue::from('x').kind(), ValueKind::Char);
        assert!(ValueKind::Int8.is_integer());
        assert!(!ValueKind::Char.is_integer());

        assert_eq!(u8::from_value(FieldValue::UInt8(200)), Ok(200));
        assert!(f64::from_value(FieldValue::Float32(1.5)).is_err());
    }

    #[test]
    fn optional_values_keep_their_kind() {
        let kind = <Option<i32> as MapValue>::KIND;
        assert_eq!(kind.inner(), Some(ValueKind::Int32));
        assert_eq!(kind.to_string(), "optional i32");
        assert_eq!(ValueKind::Int32.inner(), None);

        assert_eq!(FieldValue::from(Some(3_i32)).kind(), kind);
        assert_eq!(FieldValue::from(None::<i32>).kind(), kind);
        assert_eq!(FieldValue::null(kind), Some(FieldValue::Optional(kind, None)));
        assert_eq!(FieldValue::null(ValueKind::Int32), None);

        assert_eq!(
            <Option<i32>>::from_value(FieldValue::from(Some(3_i32))),
            Ok(Some(3))
        );
        assert_eq!(<Option<i32>>::from_value(FieldValue::from(None::<i32>)), Ok(None));
    }

    #[test]
    fn optional_and_plain_kinds_do_not_mix() {
        // A bare value is not an optional one.
        assert_eq!(
            <Option<i32>>::from_value(FieldValue::Int32(3)),
            Err(FieldValue::Int32(3))
        );
        // Nor is an optional value a bare one.
        assert!(i32::from_value(FieldValue::from(Some(3_i32))).is_err());
        // Nor does the inner kind widen.
        assert!(<Option<i64>>::from_value(FieldValue::from(Some(3_i32))).is_err());
    }

    #[test]
    fn into_optional_wraps_only_matching_values() {
        let kind = <Option<String> as MapValue>::KIND;

        assert_eq!(
            FieldValue::from("x").into_optional(kind),
            FieldValue::from(Some("x".to_string()))
        );
        assert_eq!(
            FieldValue::Int32(1).into_optional(kind),
            FieldValue::Int32(1)
        );
        assert_eq!(
            FieldValue::from("x").into_optional(ValueKind::Text),
            FieldValue::from("x")
        );
    }

    #[test]
    fn field_value_serializes_with_kind_tag() {
        let when = Utc.with_ymd_and_hms(2016, 8, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(FieldValue::DateTime(when)).unwrap();

        assert_eq!(json["kind"], "datetime");
        assert_eq!(json["value"], "2016-08-01T00:00:00Z");

        let json = serde_json::to_value(FieldValue::from(None::<String>)).unwrap();
        assert_eq!(json["kind"], "optional");
        assert_eq!(json["value"][0]["optional"]["inner"], "text");
        assert!(json["value"][1].is_null());
    }

    // ========================================================================
    // Visibility Tests
    // ========================================================================

    #[test]
    fn visibility_from_token() {
        assert_eq!(Visibility::from_token("pub"), Visibility::Public);
        assert_eq!(Visibility::from_token(""), Visibility::NonPublic);
        assert_eq!(Visibility::from_token("pub(crate)"), Visibility::NonPublic);
        assert_eq!(Visibility::from_token("pub (super)"), Visibility::NonPublic);
    }

    #[test]
    fn scope_admits() {
        assert!(VisibilityScope::PublicOnly.admits(Visibility::Public));
        assert!(!VisibilityScope::PublicOnly.admits(Visibility::NonPublic));
        assert!(VisibilityScope::PublicAndNonPublic.admits(Visibility::NonPublic));
        assert_eq!(VisibilityScope::default(), VisibilityScope::PublicAndNonPublic);
    }

    // ========================================================================
    // Record Tests
    // ========================================================================

    #[test]
    fn record_fields_keep_declaration_order() {
        let names: Vec<_> = Sample::fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["title", "count", "flagged", "tags"]);
        assert_eq!(Sample::type_name(), "Sample");
    }

    #[test]
    fn record_fields_carry_kind_and_visibility() {
        let fields = Sample::fields();

        assert_eq!(
            fields[0],
            FieldDescriptor::new("title", ValueKind::Text, Visibility::Public)
        );
        assert_eq!(fields[1].kind, ValueKind::Int32);
        assert_eq!(fields[2].visibility, Visibility::NonPublic);
        assert_eq!(fields[3].kind, ValueKind::TextList);
        assert_eq!(fields[3].visibility, Visibility::NonPublic);
    }

    #[test]
    fn record_visible_fields_filters_by_scope() {
        let public: Vec<_> = Sample::visible_fields(VisibilityScope::PublicOnly)
            .map(|f| f.name)
            .collect();
        assert_eq!(public, ["title", "count"]);

        assert_eq!(
            Sample::visible_fields(VisibilityScope::PublicAndNonPublic).count(),
            4
        );
    }

    #[test]
    fn record_read_and_write() {
        let mut sample = Sample::default();
        sample.write_field("title", "hello".into()).unwrap();
        sample.write_field("tags", vec!["x"].into()).unwrap();

        assert_eq!(sample.title, "hello");
        assert_eq!(sample.read_field("tags"), Some(FieldValue::from(vec!["x"])));
        assert_eq!(sample.read_field("missing"), None);
    }

    #[test]
    fn record_write_rejects_mismatched_kind() {
        let mut sample = Sample::default();
        let err = sample.write_field("count", "seven".into()).unwrap_err();

        assert_eq!(
            err,
            DomainError::IncompatibleAssignment {
                type_name: "Sample",
                field: "count".into(),
                expected: ValueKind::Int32,
                found: ValueKind::Text,
            }
        );
        assert_eq!(err.category(), ErrorCategory::Assignment);
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn record_write_rejects_unknown_field() {
        let mut sample = Sample::default();
        let err = sample.write_field("Title", "x".into()).unwrap_err();

        assert!(matches!(err, DomainError::InvalidFieldSelector { .. }));
    }

    #[test]
    fn descriptor_lookup_is_case_sensitive() {
        assert!(Sample::descriptor("count").is_ok());

        let err = Sample::descriptor("Count").unwrap_err();
        assert_eq!(err.to_string(), "'Count' is not a field of Sample");
        assert_eq!(err.category(), ErrorCategory::Selector);
        assert!(!err.suggestions().is_empty());
    }
}
