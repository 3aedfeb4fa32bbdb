/// Wrap bare `if` / `else if` conditions in parentheses.
///
/// `if x > 0 {` becomes `if (x > 0) {`; a condition that already starts with
/// `(` is left alone, as is every `else {` line. The `else if` form is tried
/// first so the inner `if` is not matched on its own.
pub fn parenthesize_conditions(line: &str) -> String {
    let wrapped = wrap_condition(line, "else if ");
    if wrapped != line {
        return wrapped;
    }
    wrap_condition(line, "if ")
}

fn wrap_condition(line: &str, keyword: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let Some(rest) = trimmed.strip_prefix(keyword) else {
        return line.to_string();
    };
    let condition_start = rest.trim_start();
    if condition_start.starts_with('(') {
        return line.to_string();
    }
    let Some(brace) = condition_start.find('{') else {
        return line.to_string();
    };
    let condition = condition_start[..brace].trim();
    let tail = &condition_start[brace..];
    format!("{}{}({}) {}", indent, keyword, condition, tail)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::parenthesize_conditions;

    #[test]
    fn test_bare_if_condition_is_wrapped() {
        assert_eq!(
            parenthesize_conditions("    if x > 0 {"),
            "    if (x > 0) {"
        );
    }

    #[test]
    fn test_bare_else_if_condition_is_wrapped() {
        assert_eq!(
            parenthesize_conditions("    else if a == b {"),
            "    else if (a == b) {"
        );
    }

    #[test]
    fn test_cuddled_else_if_is_not_a_line_start() {
        // only lines beginning with the keyword are rewritten
        assert_eq!(
            parenthesize_conditions("} else if a == b {"),
            "} else if a == b {"
        );
    }

    #[test]
    fn test_parenthesized_conditions_are_untouched() {
        assert_eq!(parenthesize_conditions("if (x > 0) {"), "if (x > 0) {");
        assert_eq!(
            parenthesize_conditions("else if (a == b) {"),
            "else if (a == b) {"
        );
    }

    #[test]
    fn test_else_lines_are_never_altered() {
        assert_eq!(parenthesize_conditions("} else {"), "} else {");
        assert_eq!(parenthesize_conditions("else {"), "else {");
    }

    #[test]
    fn test_missing_brace_passes_through() {
        assert_eq!(parenthesize_conditions("if x > 0"), "if x > 0");
    }
}
