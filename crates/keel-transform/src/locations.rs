use crate::scope::{is_location_keyword, matching_paren, split_top_level};
use keel_core::types::TypeToken;

/// Insert `memory` after reference-like parameter types in a constructor or
/// function header. Entries that already carry an explicit data location are
/// left alone, which makes the pass idempotent. The parameter list is
/// reassembled with normalized `, ` separators.
pub fn insert_param_locations(header: &str) -> String {
    if !header.starts_with("constructor") && !header.starts_with("function ") {
        return header.to_string();
    }
    let Some(open) = header.find('(') else {
        return header.to_string();
    };
    let Some(close) = matching_paren(header, open) else {
        return header.to_string();
    };

    let entries: Vec<String> = split_top_level(&header[open + 1..close])
        .iter()
        .map(|entry| qualify_entry(entry, false))
        .filter(|entry| !entry.is_empty())
        .collect();

    format!(
        "{}{}{}",
        &header[..open + 1],
        entries.join(", "),
        &header[close..]
    )
}

/// Insert `memory` after reference-like types in the `returns (...)` clause.
///
/// A nested tuple group in the return list is not representable in the target
/// grammar, so one level of parenthesized nesting is flattened into separate
/// entries before qualification.
pub fn insert_return_locations(header: &str) -> String {
    let Some(ret) = header.find("returns") else {
        return header.to_string();
    };
    let Some(open) = header[ret..].find('(').map(|pos| ret + pos) else {
        return header.to_string();
    };
    let Some(close) = matching_paren(header, open) else {
        return header.to_string();
    };

    let mut flattened = Vec::new();
    for entry in split_top_level(&header[open + 1..close]) {
        let entry = entry.trim();
        if entry.len() >= 2 && entry.starts_with('(') && entry.ends_with(')') {
            for sub in entry[1..entry.len() - 1].split(',') {
                if !sub.trim().is_empty() {
                    flattened.push(sub.to_string());
                }
            }
        } else if !entry.is_empty() {
            flattened.push(entry.to_string());
        }
    }

    let entries: Vec<String> = flattened
        .iter()
        .map(|entry| qualify_entry(entry, true))
        .filter(|entry| !entry.is_empty())
        .collect();

    format!(
        "{}{}{}",
        &header[..open + 1],
        entries.join(", "),
        &header[close..]
    )
}

/// Qualify one list entry: leading type token, then `memory` when the type is
/// reference-like. `bare_type` entries (return lists) may have no following
/// identifier; parameter entries without one are left untouched.
fn qualify_entry(entry: &str, bare_type: bool) -> String {
    let entry = entry.trim();
    if entry.is_empty() || has_location_keyword(entry) {
        return entry.to_string();
    }

    let (type_token, rest) = match entry.split_once(char::is_whitespace) {
        Some((ty, rest)) => (ty, rest.trim()),
        None if bare_type => (entry, ""),
        None => return entry.to_string(),
    };

    if !TypeToken::decompose(type_token).is_reference_like() {
        return entry.to_string();
    }
    if rest.is_empty() {
        format!("{} memory", type_token)
    } else {
        format!("{} memory {}", type_token, rest)
    }
}

fn has_location_keyword(entry: &str) -> bool {
    entry.split_whitespace().any(is_location_keyword)
}
