//! Normalization of loosely-typed upstream fields.
//!
//! Third-party payloads omit fields, send `null`, or send whitespace. Every
//! string that reaches a domain record goes through one of these helpers so the
//! presentation layer only ever sees a trimmed value or a well-known
//! placeholder.

/// Sentinel for a text field no provider could supply.
pub const PLACEHOLDER: &str = "N/A";

/// Returns the trimmed value, or `fallback` when it is missing or blank.
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Returns the trimmed value, or [`PLACEHOLDER`] when it is missing or blank.
pub fn text(value: Option<&str>) -> String {
    text_or(value, PLACEHOLDER)
}

/// Returns the trimmed URL, or an empty string when it is missing or blank.
///
/// URLs use `""` rather than `"N/A"` because the renderer hides empty images.
pub fn url(value: Option<&str>) -> String {
    text_or(value, "")
}

/// Returns `Some(trimmed)` only for non-blank values.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Returns true when `value` is the text placeholder.
pub fn is_placeholder(value: &str) -> bool {
    value == PLACEHOLDER
}
