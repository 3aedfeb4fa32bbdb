use keel_core::{Mutability, Visibility};

/// Accessors whose presence means the function reads its environment: caller,
/// transaction, and block metadata, the contract's own address and balance,
/// and remaining gas.
const ENVIRONMENT_TOKENS: &[&str] = &["msg.", "tx.", "block.", "address(", "gasleft(", "this."];

/// Accumulates state/environment access facts over one function body scan.
///
/// Fed each rewritten body line in order; once the scan is complete,
/// [`MutabilityTracker::verdict`] collapses the facts into the annotation the
/// header should carry. Function-local: one tracker per function, discarded
/// after emission.
#[derive(Debug, Default)]
pub struct MutabilityTracker {
    writes_state: bool,
    reads_state: bool,
    uses_environment: bool,
}

impl MutabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the facts one rewritten body line contributes.
    pub fn observe(&mut self, line: &str, state_names: &[&str]) {
        if ENVIRONMENT_TOKENS.iter().any(|token| line.contains(token)) {
            self.uses_environment = true;
        }
        if line.contains("emit ") {
            self.writes_state = true;
        }
        for name in state_names {
            let Some(pos) = find_identifier(line, name) else {
                continue;
            };
            if has_write_operator(&line[pos + name.len()..]) {
                self.writes_state = true;
            } else {
                self.reads_state = true;
            }
        }
    }

    pub fn verdict(&self) -> Mutability {
        if self.writes_state {
            Mutability::NonPayable
        } else if self.reads_state || self.uses_environment {
            Mutability::View
        } else {
            Mutability::Pure
        }
    }
}

/// Annotate a function header with visibility and the derived mutability.
///
/// Constructors are never annotated (the caller skips them). Visibility
/// defaults to `public` when the header names none; `view`/`pure` is inserted
/// after the visibility keyword unless the header already carries either, and
/// mutating functions stay unannotated. Headers that are not function
/// declarations pass through.
pub fn annotate_header(header: &str, verdict: Mutability) -> String {
    if !header.trim_start().starts_with("function ") {
        return header.to_string();
    }

    // `private` functions never come out of Keel source, so it is not probed
    let visibilities = [Visibility::Public, Visibility::External, Visibility::Internal];
    let has_visibility = visibilities
        .iter()
        .any(|vis| find_identifier(header, vis.keyword()).is_some());
    let has_mutability = find_identifier(header, "view").is_some()
        || find_identifier(header, "pure").is_some();

    let mutability_kw = match verdict.keyword() {
        Some(kw) if !has_mutability => Some(kw),
        _ => None,
    };

    let params_end = header
        .find('(')
        .and_then(|open| crate::scope::matching_paren(header, open))
        .map(|close| close + 1)
        .unwrap_or(header.len());

    let mut annotated = header.to_string();
    if !has_visibility {
        let mut insertion = format!(" {}", Visibility::Public.keyword());
        if let Some(kw) = mutability_kw {
            insertion.push(' ');
            insertion.push_str(kw);
        }
        annotated.insert_str(params_end, &insertion);
    } else if let Some(kw) = mutability_kw {
        let after_visibility = visibilities
            .iter()
            .filter_map(|vis| {
                find_identifier(header, vis.keyword()).map(|pos| pos + vis.keyword().len())
            })
            .next()
            .unwrap_or(params_end);
        annotated.insert_str(after_visibility, &format!(" {}", kw));
    }
    annotated
}

/// First occurrence of `name` in `line` at identifier boundaries.
fn find_identifier(line: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let bytes = line.as_bytes();
    let mut from = 0;
    while let Some(found) = line[from..].find(name) {
        let start = from + found;
        let end = start + name.len();
        let bounded_left =
            start == 0 || (!bytes[start - 1].is_ascii_alphanumeric() && bytes[start - 1] != b'_');
        let bounded_right =
            end == bytes.len() || (!bytes[end].is_ascii_alphanumeric() && bytes[end] != b'_');
        if bounded_left && bounded_right {
            return Some(start);
        }
        from = start + 1;
    }
    None
}

/// Does the remainder of the line after a state-variable occurrence contain a
/// mutation: plain or compound assignment, increment, or decrement? Comparison
/// operators (`==`, `!=`, `<=`, `>=`) and mapping arrows (`=>`) do not count.
fn has_write_operator(tail: &str) -> bool {
    let bytes = tail.as_bytes();
    for idx in 0..bytes.len() {
        match bytes[idx] {
            b'=' => {
                let prev = idx.checked_sub(1).map(|p| bytes[p]);
                let next = bytes.get(idx + 1).copied();
                if matches!(prev, Some(b'=' | b'!' | b'<' | b'>')) {
                    continue;
                }
                if matches!(next, Some(b'=' | b'>')) {
                    continue;
                }
                // plain and compound assignments both land here
                return true;
            }
            byte @ (b'+' | b'-') => {
                if bytes.get(idx + 1).copied() == Some(byte) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
