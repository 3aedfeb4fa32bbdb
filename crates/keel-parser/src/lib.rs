/*! Scan Keel source into its module structure.
 *
 * Keel is line-oriented, so no grammar is needed here: a single forward pass
 * collects the optional `blockchain` name declaration, the state block, event
 * declarations, and each constructor/function header with its brace-delimited
 * body. Lines the scanner does not recognize are simply not structural; the
 * rewrite engine sees function bodies exactly as written.
 */

use keel_core::{FunctionDecl, SourceModule, StateVariable};

/// Scan one Keel source file into a [`SourceModule`].
///
/// `fallback_name` (normally the file stem) names the module unless the source
/// carries an explicit `blockchain <Name> {` declaration. Scanning is total:
/// malformed input yields a best-effort module, never an error.
pub fn scan_module(source: &str, fallback_name: &str) -> SourceModule {
    let lines: Vec<&str> = source.lines().collect();

    let name = lines
        .iter()
        .find_map(|line| blockchain_name(line))
        .map(str::to_string)
        .unwrap_or_else(|| sanitize_module_name(fallback_name));

    let mut module = SourceModule::new(name);
    let mut in_state = false;
    let mut i = 0;

    while i < lines.len() {
        let raw = lines[i];
        let line = raw.trim();
        i += 1;

        if line.is_empty() || line.starts_with("blockchain ") {
            continue;
        }
        if line == "state {" {
            in_state = true;
            continue;
        }
        if in_state {
            if line == "}" {
                in_state = false;
            } else {
                // a declaration without an extractable name is still emitted;
                // it just cannot participate in mutability classification
                module.state.push(StateVariable {
                    name: state_variable_name(line).unwrap_or_default(),
                    decl: line.to_string(),
                });
            }
            continue;
        }
        if line.starts_with("event ") {
            module.events.push(line.to_string());
            continue;
        }
        if line.starts_with("constructor") || line.starts_with("function ") {
            let indent = &raw[..raw.len() - raw.trim_start().len()];
            let mut decl = FunctionDecl::new(line, line.starts_with("constructor"));
            let mut depth = brace_delta(line).max(0);
            while depth > 0 && i < lines.len() {
                let body_line = lines[i];
                i += 1;
                depth += brace_delta(body_line);
                // body lines are kept relative to their declaration
                let body_line = body_line.strip_prefix(indent).unwrap_or(body_line);
                decl.body.push(body_line.to_string());
            }
            module.functions.push(decl);
        }
    }

    module
}

/// Net brace depth change contributed by one line.
fn brace_delta(line: &str) -> i32 {
    line.chars().fold(0, |acc, ch| match ch {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Extract the contract name from a `blockchain <Name> {` declaration.
fn blockchain_name(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("blockchain ")?;
    let rest = rest.trim_start();
    let end = rest
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    let name = &rest[..end];
    let first = name.chars().next()?;
    if !first.is_ascii_alphabetic() && first != '_' {
        return None;
    }
    if rest[end..].trim_start().starts_with('{') {
        Some(name)
    } else {
        None
    }
}

/// Extract the variable name from a state declaration: the trailing identifier
/// before the terminator. Works for `uint256 totalSupply;` as well as
/// `mapping(address => uint256) balances;`. Visibility keywords are never
/// variable names.
fn state_variable_name(line: &str) -> Option<String> {
    let decl = match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    };
    let decl = decl.trim().trim_end_matches(';').trim_end();

    let name: String = decl
        .chars()
        .rev()
        .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if name.is_empty() {
        return None;
    }
    match name.as_str() {
        "public" | "private" | "internal" | "external" => None,
        _ => Some(name),
    }
}

/// Reduce a file stem to a valid module identifier.
pub fn sanitize_module_name(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() {
        "module".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blockchain_name_detection() {
        assert_eq!(blockchain_name("blockchain Token {"), Some("Token"));
        assert_eq!(blockchain_name("  blockchain My_Coin2{"), Some("My_Coin2"));
        assert_eq!(blockchain_name("blockchain 2Bad {"), None);
        assert_eq!(blockchain_name("state {"), None);
    }

    #[test]
    fn test_state_variable_name_extraction() {
        assert_eq!(
            state_variable_name("uint256 totalSupply;"),
            Some("totalSupply".to_string())
        );
        assert_eq!(
            state_variable_name("mapping(address => uint256) balances; // holdings"),
            Some("balances".to_string())
        );
        assert_eq!(state_variable_name("uint256 supply public;"), None);
        assert_eq!(state_variable_name(";"), None);
    }

    #[test]
    fn test_sanitize_module_name() {
        assert_eq!(sanitize_module_name("basic-token.v2"), "basic_token_v2");
        assert_eq!(sanitize_module_name(""), "module");
    }
}
