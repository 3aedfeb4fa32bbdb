use crate::locals;
use indexmap::IndexMap;
use keel_core::types::{rename_primitives, TypeToken};

/// Identifier-to-type bindings for one function or constructor.
///
/// Seeded from the header's parameter list, extended by `let` declarations as
/// the body scan moves forward. A later declaration with the same name
/// overwrites the binding for the rest of the scan; there is no block-level
/// shadowing. Discarded when the enclosing function has been emitted.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: IndexMap<String, TypeToken>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a scope from a constructor or function header.
    ///
    /// Both `type name` and `name: type` parameter forms are accepted, and an
    /// intervening data-location keyword is skipped. Entries that carry no
    /// name contribute nothing.
    pub fn from_header(header: &str) -> Self {
        let mut scope = Scope::new();
        let trimmed = header.trim_start();
        if !trimmed.starts_with("function ") && !trimmed.starts_with("constructor") {
            return scope;
        }
        let Some(open) = header.find('(') else {
            return scope;
        };
        let Some(close) = matching_paren(header, open) else {
            return scope;
        };
        for entry in split_top_level(&header[open + 1..close]) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            if let Some((name, ty)) = parse_parameter(entry) {
                scope.insert(name, ty);
            }
        }
        scope
    }

    pub fn insert(&mut self, name: impl Into<String>, ty: TypeToken) {
        self.bindings.insert(name.into(), ty);
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeToken> {
        self.bindings.get(name)
    }

    /// Record the binding introduced by a `let` declaration line, if any.
    /// Called on the raw line before any rewriting, so later lines in the same
    /// body see the updated scope.
    pub fn record_let(&mut self, line: &str) {
        if let Some((name, ty)) = locals::parse_let_binding(line) {
            self.insert(name, ty);
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Parse one parameter entry into (name, type).
fn parse_parameter(entry: &str) -> Option<(String, TypeToken)> {
    if let Some(colon) = entry.find(':') {
        let name = entry[..colon].trim();
        let ty = entry[colon + 1..].trim();
        if name.is_empty() || ty.is_empty() {
            return None;
        }
        return Some((
            name.to_string(),
            TypeToken::decompose(&rename_primitives(ty)),
        ));
    }

    let mut words = entry.split_whitespace();
    let ty = words.next()?;
    let mut name = words.next()?;
    if is_location_keyword(name) {
        name = words.next()?;
    }
    Some((
        name.to_string(),
        TypeToken::decompose(&rename_primitives(ty)),
    ))
}

pub(crate) fn is_location_keyword(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "memory" | "calldata" | "storage"
    )
}

/// Split a list on commas that sit at parenthesis depth zero, so tuple groups
/// are never split internally.
pub(crate) fn split_top_level(list: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in list.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Byte index of the parenthesis matching the one at `open`, tracking nesting.
pub(crate) fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0i32;
    for (idx, byte) in bytes.iter().enumerate().skip(open) {
        match *byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
