//! Normalization of ordered file and directory names.
//!
//! Documentation trees order their entries with numeric prefixes
//! (`1.getting-started/02.installation.md`). The prefixes are stripped before
//! names become sections or URL path segments.

use std::path::Path;

/// Removes a leading `<digits>.` ordering prefix from a name.
///
/// Names without such a prefix are returned unchanged.
pub fn strip_numeric_prefix(name: &str) -> &str {
    let Some((prefix, rest)) = name.split_once('.') else {
        return name;
    };
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) && !rest.is_empty() {
        rest
    } else {
        name
    }
}

/// Converts a file name into a URL path segment: prefix stripped, extension removed.
pub fn file_segment(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    strip_numeric_prefix(stem).to_string()
}
