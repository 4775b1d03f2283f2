//! Byte-level cleanup shared by the readers.

use encoding_rs::WINDOWS_1252;

/// Decode one field.
///
/// County extracts are mostly UTF-8 but some ship Windows-1252 accented
/// names; those bytes are decoded instead of rejected. A leading byte-order
/// mark is dropped.
pub fn decode_field(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Trim a header, drop byte-order marks, collapse interior whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
