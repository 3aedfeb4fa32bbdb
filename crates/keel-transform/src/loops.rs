use crate::locals::identifier_end;

/// Desugar a counted-iteration line into Solidity's three-clause loop.
///
/// Recognizes exactly `for <var> in range(<args>) {` spanning the whole line,
/// where `<args>` is one to three comma-separated bounds: `(end)`,
/// `(start, end)`, or `(start, end, step)`. Start defaults to 0 and step to 1.
/// A step with a leading `-` makes the loop descend (`>` / `-=`); a leading
/// `-` on any bound makes the loop variable signed (`int256`), otherwise it is
/// `uint256`. Anything else is returned unchanged — no partial rewrites.
pub fn desugar_range_loop(line: &str) -> String {
    match try_desugar(line) {
        Some(rewritten) => rewritten,
        None => line.to_string(),
    }
}

fn try_desugar(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    let rest = trimmed.strip_prefix("for ")?;
    let rest = rest.trim_start();
    let var_end = identifier_end(rest)?;
    let var = &rest[..var_end];

    let rest = rest[var_end..].trim_start();
    let rest = rest.strip_prefix("in")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("range")?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('(')?;

    // Bounds are literals or identifiers; a nested ')' never belongs to them.
    let close = rest.find(')')?;
    let args = &rest[..close];
    if rest[close + 1..].trim() != "{" {
        return None;
    }

    let parts: Vec<&str> = args
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    let (start, end, step) = match parts.as_slice() {
        [end] => ("0", *end, "1"),
        [start, end] => (*start, *end, "1"),
        [start, end, step] => (*start, *end, *step),
        _ => return None,
    };

    let descending = step.starts_with('-');
    let signed = descending || start.starts_with('-') || end.starts_with('-');
    let var_type = if signed { "int256" } else { "uint256" };

    let (cmp, update, magnitude) = if descending {
        (">", "-=", step.trim_start_matches('-'))
    } else {
        ("<", "+=", step)
    };

    Some(format!(
        "{}for ({} {} = {}; {} {} {}; {} {} {}) {{",
        indent, var_type, var, start, var, cmp, end, var, update, magnitude
    ))
}
