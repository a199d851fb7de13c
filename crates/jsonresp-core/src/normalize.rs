//! Normalization applied to envelope data on assignment.
//!
//! Two rules, top-level entries only:
//! - strings (text or raw bytes) are trimmed of ` \t\n\r\0\x0B`
//! - the trimmed strings `"true"` and `"false"` (exact, case-sensitive)
//!   become booleans
//!
//! Everything else, nested lists and maps included, passes through as is.

use crate::value::{DataMap, Value};

const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

fn is_trim_byte(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\0' | 0x0B)
}

fn trim_bytes(raw: &[u8]) -> &[u8] {
    let start = raw.iter().position(|b| !is_trim_byte(b)).unwrap_or(raw.len());
    let end = raw
        .iter()
        .rposition(|b| !is_trim_byte(b))
        .map_or(start, |i| i + 1);
    &raw[start..end]
}

fn coerce_bool(s: &[u8]) -> Option<bool> {
    match s {
        b"true" => Some(true),
        b"false" => Some(false),
        _ => None,
    }
}

/// Normalize a single data entry.
pub fn normalize_entry(value: Value) -> Value {
    match value {
        Value::Text(s) => {
            let trimmed = s.trim_matches(TRIM_CHARS);
            match coerce_bool(trimmed.as_bytes()) {
                Some(b) => Value::Bool(b),
                None if trimmed.len() == s.len() => Value::Text(s),
                None => Value::Text(trimmed.to_string()),
            }
        }
        Value::Bytes(raw) => {
            let trimmed = trim_bytes(&raw);
            match coerce_bool(trimmed) {
                Some(b) => Value::Bool(b),
                None => Value::Bytes(trimmed.to_vec()),
            }
        }
        other => other,
    }
}

/// Normalize every top-level entry of `data`.
pub fn normalize_data(data: DataMap) -> DataMap {
    data.into_iter()
        .map(|(k, v)| (k, normalize_entry(v)))
        .collect()
}
