use serde::{Deserialize, Serialize};
use std::fmt;

/// Keel's fixed-width integer aliases and their Solidity names.
const PRIMITIVE_RENAMES: &[(&str, &str)] = &[
    ("i32", "int32"),
    ("u32", "uint32"),
    ("i64", "int64"),
    ("u64", "uint64"),
    ("i128", "int128"),
    ("u128", "uint128"),
    ("i256", "int256"),
    ("u256", "uint256"),
];

/// Map a single Keel primitive alias to its Solidity name, if it is one.
pub fn rename_primitive(token: &str) -> Option<&'static str> {
    PRIMITIVE_RENAMES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, solidity)| *solidity)
}

/// Replace every Keel primitive alias in a line with its Solidity name.
///
/// Replacement happens only at identifier boundaries, so `u256` inside
/// `value_u2560` or a string literal identifier-run is left alone. Already
/// mapped names contain no alias as a whole identifier, which makes this
/// idempotent.
pub fn rename_primitives(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut ident = String::new();

    let flush = |ident: &mut String, out: &mut String| {
        if !ident.is_empty() {
            match rename_primitive(ident) {
                Some(solidity) => out.push_str(solidity),
                None => out.push_str(ident),
            }
            ident.clear();
        }
    };

    for ch in line.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            ident.push(ch);
        } else {
            flush(&mut ident, &mut out);
            out.push(ch);
        }
    }
    flush(&mut ident, &mut out);
    out
}

/// A decomposed type token: lower-cased base name plus array dimension count.
///
/// Two tokens are equal iff base and dims match; `uint256[]` and `uint256[3]`
/// both decompose to one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeToken {
    pub base: String,
    pub dims: usize,
}

impl TypeToken {
    pub fn new(base: impl Into<String>, dims: usize) -> Self {
        Self {
            base: base.into().to_ascii_lowercase(),
            dims,
        }
    }

    /// Decompose a raw type token into base name and array dimensions.
    ///
    /// Anything after the first whitespace (a trailing variable name, a data
    /// location) is discarded, bracket groups are counted and stripped, and the
    /// remainder is lower-cased. Malformed input degrades to best-effort
    /// extraction; this never fails.
    pub fn decompose(raw: &str) -> Self {
        let token = raw.trim();
        let token = token
            .split_whitespace()
            .next()
            .unwrap_or("");
        let dims = token.matches('[').count();
        let base = match token.find('[') {
            Some(pos) => &token[..pos],
            None => token,
        };
        TypeToken::new(base, dims)
    }

    /// Reference-like types need an explicit data location in Solidity:
    /// dynamically-sized strings and byte sequences, and arrays of any kind.
    /// Fixed-size `bytesN` tokens are value types and do not qualify.
    pub fn is_reference_like(&self) -> bool {
        self.dims > 0 || self.base == "string" || self.base == "bytes"
    }

    pub fn is_string(&self) -> bool {
        self.base == "string"
    }

    pub fn is_bytes(&self) -> bool {
        self.base == "bytes"
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, "[]".repeat(self.dims))
    }
}
