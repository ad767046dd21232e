//! Reference-marker extraction from raw element content.
//!
//! Hosts annotate element content with a trailing reference block: a
//! `#Reference:` style header followed by `#Field: value` markers, one per
//! line or markup break. The scan runs over the *raw* content -
//! markers often live inside markup that normalization would disturb - and
//! each extracted value is then normalized individually.

use studytrace_core_types::ElementReferences;

use crate::normalize::normalize;

/// Extract the structured reference set from raw content.
///
/// Markers are matched case-insensitively. A value runs from its marker to
/// the next tag or line break. Content without markers yields the empty set;
/// the parser never fails.
pub fn parse_references(raw: &str) -> ElementReferences {
    if raw.is_empty() {
        return ElementReferences::default();
    }

    ElementReferences {
        title: field_value(raw, "#Title:"),
        author: field_value(raw, "#Author:"),
        date: field_value(raw, "#Date:"),
        source: field_value(raw, "#Source:"),
        link: field_value(raw, "#Link:"),
        email: field_value(raw, "#Email:"),
        comment: field_value(raw, "#Comment:"),
    }
}

/// Find `marker` (case-insensitive) and return its cleaned value, if any.
fn field_value(raw: &str, marker: &str) -> Option<String> {
    let haystack = raw.to_ascii_lowercase();
    let needle = marker.to_ascii_lowercase();

    let start = haystack.find(&needle)? + needle.len();
    let rest = &raw[start..];

    let end = rest
        .find(|c| c == '<' || c == '\r' || c == '\n')
        .unwrap_or(rest.len());

    let value = normalize(&rest[..end]);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
