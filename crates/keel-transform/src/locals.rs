use keel_core::types::{rename_primitives, TypeToken};

/// Pieces of a `let <name>: <type> [= <expr>];` line.
struct LetParts<'a> {
    indent: &'a str,
    name: &'a str,
    type_text: String,
    initializer: Option<&'a str>,
}

fn parse_let_parts(line: &str) -> Option<LetParts<'_>> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let rest = trimmed.strip_prefix("let ")?;
    let rest = rest.trim_start();

    let name_end = identifier_end(rest)?;
    let name = &rest[..name_end];
    let rest = rest[name_end..].trim_start();
    let rest = rest.strip_prefix(':')?;

    let stop = rest.find(['=', ';']).unwrap_or(rest.len());
    let type_text = rest[..stop].trim();
    if type_text.is_empty() {
        return None;
    }
    let type_text = rename_primitives(type_text);

    let initializer = rest[stop..].strip_prefix('=').map(|tail| {
        let tail = tail.trim();
        tail.strip_suffix(';').map(str::trim_end).unwrap_or(tail)
    });

    Some(LetParts {
        indent,
        name,
        type_text,
        initializer,
    })
}

/// Length of a leading identifier (`[A-Za-z_][A-Za-z0-9_]*`), if present.
pub(crate) fn identifier_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let first = *bytes.first()?;
    if !first.is_ascii_alphabetic() && first != b'_' {
        return None;
    }
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_alphanumeric() && *b != b'_')
        .unwrap_or(bytes.len());
    Some(end)
}

/// Extract the binding a `let` declaration introduces, with primitive aliases
/// already mapped. Used to grow the scope before the line itself is rewritten.
pub fn parse_let_binding(line: &str) -> Option<(String, TypeToken)> {
    let parts = parse_let_parts(line)?;
    Some((
        parts.name.to_string(),
        TypeToken::decompose(&parts.type_text),
    ))
}

/// Lower `let <name>: <type> = <expr>;` into a Solidity declaration.
///
/// The type is mapped, reference-like types get a `memory` location, and a
/// string-literal initializer for a plain `bytes` binding is wrapped in
/// `bytes(...)`. Lines that do not match the full declaration shape are
/// returned unchanged.
pub fn lower_let_declaration(line: &str) -> String {
    let Some(parts) = parse_let_parts(line) else {
        return line.to_string();
    };
    let Some(initializer) = parts.initializer else {
        return line.to_string();
    };
    if !line.trim_end().ends_with(';') {
        return line.to_string();
    }

    let token = TypeToken::decompose(&parts.type_text);
    let location = if token.is_reference_like() {
        " memory"
    } else {
        ""
    };

    let mut expr = initializer.to_string();
    if token.is_bytes() && token.dims == 0 && is_string_literal(initializer) {
        expr = format!("bytes({})", initializer);
    }

    format!(
        "{}{}{} {} = {};",
        parts.indent, parts.type_text, location, parts.name, expr
    )
}

pub(crate) fn is_string_literal(expr: &str) -> bool {
    let t = expr.trim();
    t.len() >= 2 && t.starts_with('"') && t.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::types::TypeToken;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_binding_extraction() {
        assert_eq!(
            parse_let_binding("    let total: u256 = 0;"),
            Some(("total".to_string(), TypeToken::new("uint256", 0)))
        );
        assert_eq!(
            parse_let_binding("let names: string[] = things;"),
            Some(("names".to_string(), TypeToken::new("string", 1)))
        );
        assert_eq!(parse_let_binding("total = 0;"), None);
    }

    #[test]
    fn test_lower_value_declaration() {
        assert_eq!(
            lower_let_declaration("    let total: u256 = a + b;"),
            "    uint256 total = a + b;"
        );
    }

    #[test]
    fn test_lower_reference_declaration_gets_memory() {
        assert_eq!(
            lower_let_declaration("let xs: u256[] = make();"),
            "uint256[] memory xs = make();"
        );
        assert_eq!(
            lower_let_declaration("let label: string = other;"),
            "string memory label = other;"
        );
    }

    #[test]
    fn test_lower_bytes_literal_initializer() {
        assert_eq!(
            lower_let_declaration("let payload: bytes = \"ab\";"),
            "bytes memory payload = bytes(\"ab\");"
        );
        // bytes32 is a value type: no memory, no wrapping
        assert_eq!(
            lower_let_declaration("let h: bytes32 = digest;"),
            "bytes32 h = digest;"
        );
    }

    #[test]
    fn test_non_matching_lines_pass_through() {
        assert_eq!(lower_let_declaration("return x;"), "return x;");
        assert_eq!(lower_let_declaration("let broken = 1;"), "let broken = 1;");
        assert_eq!(lower_let_declaration(""), "");
    }
}
