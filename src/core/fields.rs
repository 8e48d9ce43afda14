//! Tolerant field-name matching across heterogeneous spreadsheet headers.
//! Every export names its columns a little differently ("Check-In",
//! "check in time", "CHECKIN"), so headers and candidate variants are
//! compared after normalization.

use crate::ingest::{Cell, RawRow};
use std::collections::HashMap;

/// Normalize a header name: lowercase, trim, periods/underscores become
/// spaces, other non-alphanumeric characters are dropped, whitespace runs
/// collapse to a single space.
pub fn norm_key(key: &str) -> String {
    let lowered = key.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for ch in lowered.chars() {
        if ch == '.' || ch == '_' || ch.is_whitespace() {
            out.push(' ');
        } else if ch.is_ascii_alphanumeric() {
            out.push(ch);
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pick the best matching field from a row given candidate header variants,
/// in caller-supplied priority order.
///
/// A map from normalized header to original header is consulted first; if
/// no variant hits, a full rescan compares every header against every
/// variant (covers duplicate headers that collided in the map).
pub fn best_field<'a>(row: &'a RawRow, variants: &[&str]) -> Option<&'a Cell> {
    let mut norm_map: HashMap<String, &str> = HashMap::new();
    for header in row.headers() {
        // Last duplicate wins.
        norm_map.insert(norm_key(header), header);
    }

    for variant in variants {
        if let Some(original) = norm_map.get(&norm_key(variant)) {
            return row.get(original);
        }
    }

    for header in row.headers() {
        let nh = norm_key(header);
        if variants.iter().any(|v| norm_key(v) == nh) {
            return row.get(header);
        }
    }

    None
}

/// Like [`best_field`], but treats blank cells as missing and returns the
/// trimmed display text.
pub fn best_field_text(row: &RawRow, variants: &[&str]) -> Option<String> {
    best_field(row, variants).and_then(|cell| {
        let text = cell.as_text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
