use crate::locals::{identifier_end, is_string_literal};
use crate::scope::{matching_paren, Scope};

/// Rewrite every `len(<expr>)` call in a line into the Solidity length idiom.
///
/// String-like operands need a byte reinterpretation first (`bytes(e).length`);
/// arrays and byte sequences read `.length` directly. A quoted literal is
/// always string-like; otherwise the operand's leading identifier is resolved
/// through the scope. Identifiers that cannot be resolved are treated as
/// non-string-like. A `len(` with no matching close parenthesis is left alone.
pub fn rewrite_len_calls(line: &str, scope: &Scope) -> String {
    let mut out = String::with_capacity(line.len() + 16);
    let mut i = 0;

    while i < line.len() {
        if line[i..].starts_with("len(") && !preceded_by_identifier(line.as_bytes(), i) {
            if let Some(close) = matching_paren(line, i + 3) {
                let inner = line[i + 4..close].trim();
                if is_string_literal(inner) || is_string_valued(inner, scope) {
                    out.push_str("bytes(");
                    out.push_str(inner);
                    out.push_str(").length");
                } else {
                    out.push_str(inner);
                    out.push_str(".length");
                }
                i = close + 1;
                continue;
            }
        }
        let step = line[i..].chars().next().map(char::len_utf8).unwrap_or(1);
        out.push_str(&line[i..i + step]);
        i += step;
    }
    out
}

fn preceded_by_identifier(bytes: &[u8], pos: usize) -> bool {
    pos > 0 && (bytes[pos - 1].is_ascii_alphanumeric() || bytes[pos - 1] == b'_')
}

/// Does this expression evaluate to a string, as far as the scope can tell?
///
/// Handles `ident`, `ident[...]`, `ident[...][...]`: the expression is a
/// string only when the identifier's declared base is `string` and the index
/// chain reaches down to (or past) the declared array dimensionality.
fn is_string_valued(expr: &str, scope: &Scope) -> bool {
    let expr = expr.trim();
    let base = match expr.find('[') {
        Some(pos) => expr[..pos].trim(),
        None => expr,
    };
    let Some(token) = scope.lookup(base) else {
        return false;
    };
    if !token.is_string() {
        return false;
    }
    if token.dims == 0 {
        return true;
    }
    let chain = expr.matches('[').count();
    chain >= token.dims
}

/// Rewrite `<ident> = "<literal>";` into `<ident> = bytes("<literal>");` when
/// the identifier's scope type is plain `bytes`. Every other assignment is
/// untouched; fixed-size `bytesN` values take the literal directly.
pub fn rewrite_bytes_literal_assignment(line: &str, scope: &Scope) -> String {
    let Some((indent, name, literal)) = parse_literal_assignment(line) else {
        return line.to_string();
    };
    let Some(token) = scope.lookup(name) else {
        return line.to_string();
    };
    if !token.is_bytes() || token.dims != 0 {
        return line.to_string();
    }
    format!("{}{} = bytes({});", indent, name, literal)
}

/// Match the exact shape `<ident> = "<literal>";` (no embedded quotes).
fn parse_literal_assignment(line: &str) -> Option<(&str, &str, &str)> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    let name_end = identifier_end(trimmed)?;
    let name = &trimmed[..name_end];

    let mut pos = name_end + ws_len(&trimmed[name_end..]);
    if trimmed.as_bytes().get(pos) != Some(&b'=') {
        return None;
    }
    pos += 1;
    if trimmed.as_bytes().get(pos) == Some(&b'=') {
        return None;
    }
    pos += ws_len(&trimmed[pos..]);
    if trimmed.as_bytes().get(pos) != Some(&b'"') {
        return None;
    }
    let open = pos;
    let close = open + 1 + trimmed[open + 1..].find('"')?;
    let literal = &trimmed[open..=close];
    if trimmed[close + 1..].trim() != ";" {
        return None;
    }
    Some((indent, name, literal))
}

fn ws_len(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
