//! Domain value objects: ValueKind, FieldValue and the MapValue trait.
//!
//! # Design
//!
//! A `FieldValue` is the dynamically-typed carrier that moves between a
//! source record and a destination record. Every value knows its
//! `ValueKind`, and every mappable Rust type declares the kind it accepts.
//! Assignment is legal only when the two kinds are equal: there is no
//! widening, narrowing or parsing here.
//!
//! `Option<T>` fields have their own kind, `optional T`. A `None` travels as
//! an explicit null and overwrites the destination; it is never skipped. An
//! `Option<i32>` value does not fit an `i32` field, nor the other way round.
//!
//! # Adding New Kinds
//!
//! 1. Add the `ValueKind` variant and its `as_str` arm
//! 2. Add the matching `FieldValue` variant and its `kind` arm
//! 3. Add one `map_value!` line for the Rust type
//! 4. Done: records and the mapper pick it up automatically

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

// ── ValueKind ────────────────────────────────────────────────────────────────

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Char,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    DateTime,
    Date,
    TextList,
    /// `Option` of the inner kind.
    Optional { inner: &'static ValueKind },
}

impl ValueKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::UInt8 => "u8",
            Self::UInt16 => "u16",
            Self::UInt32 => "u32",
            Self::UInt64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::DateTime => "datetime",
            Self::Date => "date",
            Self::TextList => "string list",
            Self::Optional { .. } => "optional",
        }
    }

    /// Whether this kind holds a whole number.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
        )
    }

    /// The wrapped kind of an `Optional`, or `None` for every other kind.
    pub const fn inner(self) -> Option<ValueKind> {
        match self {
            Self::Optional { inner } => Some(*inner),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optional { inner } => write!(f, "optional {inner}"),
            other => f.write_str(other.as_str()),
        }
    }
}

// ── FieldValue ───────────────────────────────────────────────────────────────

/// A field value in transit between two records.
///
/// `Optional` carries its full `optional T` kind so that a null still says
/// what it is a null of.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Char(char),
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    TextList(Vec<String>),
    Optional(ValueKind, Option<Box<FieldValue>>),
}

impl FieldValue {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Char(_) => ValueKind::Char,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int8(_) => ValueKind::Int8,
            Self::Int16(_) => ValueKind::Int16,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::UInt8(_) => ValueKind::UInt8,
            Self::UInt16(_) => ValueKind::UInt16,
            Self::UInt32(_) => ValueKind::UInt32,
            Self::UInt64(_) => ValueKind::UInt64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Date(_) => ValueKind::Date,
            Self::TextList(_) => ValueKind::TextList,
            Self::Optional(kind, _) => *kind,
        }
    }

    /// Explicit null for a field declared with `kind`.
    ///
    /// Returns `None` when `kind` is not optional.
    pub fn null(kind: ValueKind) -> Option<Self> {
        kind.inner().map(|_| Self::Optional(kind, None))
    }

    /// Wrap `self` for a field declared with the optional `kind`.
    ///
    /// A value whose kind is not the inner kind of `kind` comes back as is,
    /// so the mismatch surfaces when it is written.
    pub fn into_optional(self, kind: ValueKind) -> Self {
        match kind.inner() {
            Some(inner) if inner == self.kind() => Self::Optional(kind, Some(Box::new(self))),
            _ => self,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::TextList(value.into_iter().map(str::to_owned).collect())
    }
}

// ── MapValue ─────────────────────────────────────────────────────────────────

/// A Rust type that can live in a record field.
///
/// `from_value` hands the value back untouched when its kind does not match,
/// so callers can report what was actually received.
pub trait MapValue: Into<FieldValue> + Sized {
    /// Kind a field of this type is declared with.
    const KIND: ValueKind;

    fn from_value(value: FieldValue) -> Result<Self, FieldValue>;
}

macro_rules! map_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl MapValue for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                fn from_value(value: FieldValue) -> Result<Self, FieldValue> {
                    match value {
                        FieldValue::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

map_value! {
    String => Text,
    char => Char,
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    DateTime<Utc> => DateTime,
    NaiveDate => Date,
    Vec<String> => TextList,
}

impl<T: MapValue> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        Self::Optional(
            <Option<T> as MapValue>::KIND,
            value.map(|inner| Box::new(inner.into())),
        )
    }
}

impl<T: MapValue> MapValue for Option<T> {
    const KIND: ValueKind = ValueKind::Optional { inner: &T::KIND };

    fn from_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value {
            FieldValue::Optional(kind, None) if kind == Self::KIND => Ok(None),
            FieldValue::Optional(kind, Some(inner)) if kind == Self::KIND => T::from_value(*inner)
                .map(Some)
                .map_err(|rejected| FieldValue::Optional(kind, Some(Box::new(rejected)))),
            other => Err(other),
        }
    }
}
