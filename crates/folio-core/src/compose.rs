//! Form field coercion
//!
//! Submission forms arrive as text fields. These helpers turn raw strings
//! into the typed, null-defaulted values the record payloads store. They are
//! infallible: malformed input coerces to `None` the same way empty input
//! does, so composition itself can never fail.

use chrono::NaiveDate;

/// Empty or whitespace-only text becomes `None`; anything else is trimmed.
/// Optional text is never stored as `""`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed text, or the default when the field was left empty.
pub fn text_or<'a>(value: &'a str, default: &'a str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_i32(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

pub fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

pub fn parse_i32_or(value: &str, default: i32) -> i32 {
    parse_i32(value).unwrap_or(default)
}

/// Checkbox fields arrive as text; recognize the usual truthy spellings.
pub fn parse_bool_or(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => true,
        "false" | "0" | "off" | "no" => false,
        _ => default,
    }
}

/// ISO `YYYY-MM-DD` date fields; empty or malformed input becomes `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Comma-separated list: split, trim each entry, drop empties. A field with
/// no surviving entries composes to `None`, never an empty vec.
pub fn comma_list(value: &str) -> Option<Vec<String>> {
    let entries: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}
