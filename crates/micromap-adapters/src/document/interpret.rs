//! Text and number interpretation shared by the document adapters.
//!
//! Documents have fewer scalar types than records: JSON has no dates and no
//! fixed-width integers, TOML has one integer type. These helpers pick the
//! representation a field asks for and fall back to the natural one.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use micromap_core::domain::{FieldValue, ValueKind};

/// Naive timestamp layouts accepted after RFC 3339 fails; read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn text(raw: &str, kind: ValueKind) -> FieldValue {
    let parsed = match kind {
        ValueKind::DateTime => parse_datetime(raw).map(FieldValue::DateTime),
        ValueKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(FieldValue::Date),
        ValueKind::Char => single_char(raw).map(FieldValue::Char),
        _ => None,
    };

    parsed.unwrap_or_else(|| FieldValue::Text(raw.to_owned()))
}

fn single_char(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Integers up to these magnitudes convert to the float without rounding.
const F64_EXACT: i128 = 1 << f64::MANTISSA_DIGITS;
const F32_EXACT: i128 = 1 << f32::MANTISSA_DIGITS;

/// Fit a document integer to `kind`.
///
/// Integer kinds take the value when it is in range. Float kinds take it only
/// when the float represents it exactly, so `2^53 + 1` never silently turns
/// into `2^53` on its way into an `f64` field.
fn integer(n: i128, kind: ValueKind) -> Option<FieldValue> {
    if kind.is_integer() {
        return match kind {
            ValueKind::Int8 => i8::try_from(n).ok().map(FieldValue::Int8),
            ValueKind::Int16 => i16::try_from(n).ok().map(FieldValue::Int16),
            ValueKind::Int32 => i32::try_from(n).ok().map(FieldValue::Int32),
            ValueKind::Int64 => i64::try_from(n).ok().map(FieldValue::Int64),
            ValueKind::UInt8 => u8::try_from(n).ok().map(FieldValue::UInt8),
            ValueKind::UInt16 => u16::try_from(n).ok().map(FieldValue::UInt16),
            ValueKind::UInt32 => u32::try_from(n).ok().map(FieldValue::UInt32),
            ValueKind::UInt64 => u64::try_from(n).ok().map(FieldValue::UInt64),
            _ => None,
        };
    }

    match kind {
        ValueKind::Float64 if n.abs() <= F64_EXACT => Some(FieldValue::Float64(n as f64)),
        ValueKind::Float32 if n.abs() <= F32_EXACT => Some(FieldValue::Float32(n as f32)),
        _ => None,
    }
}

pub(crate) fn signed(n: i64, kind: ValueKind) -> FieldValue {
    integer(i128::from(n), kind).unwrap_or(FieldValue::Int64(n))
}

pub(crate) fn unsigned(n: u64, kind: ValueKind) -> FieldValue {
    match i64::try_from(n) {
        Ok(n) => signed(n, kind),
        Err(_) => integer(i128::from(n), kind).unwrap_or(FieldValue::UInt64(n)),
    }
}

/// Fit a document float to `kind`.
///
/// `f32` fields round to the nearest `f32`; a finite value beyond the `f32`
/// range stays an `f64`.
pub(crate) fn float(f: f64, kind: ValueKind) -> FieldValue {
    let narrowed = f as f32;
    match kind {
        ValueKind::Float32 if narrowed.is_finite() || !f.is_finite() => {
            FieldValue::Float32(narrowed)
        }
        _ => FieldValue::Float64(f),
    }
}

/// Collect a list of strings, or `None` if any element is not a string.
pub(crate) fn text_list<'a, I>(items: I) -> Option<FieldValue>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    items
        .into_iter()
        .map(|item| item.map(str::to_owned))
        .collect::<Option<Vec<_>>>()
        .map(FieldValue::TextList)
}
