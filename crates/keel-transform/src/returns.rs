use crate::scope::matching_paren;

/// Flatten one level of tuple nesting in a `return (...)` statement.
///
/// `return ((a, b), c);` becomes `return (a, b, c);`. Only parenthesis pairs
/// at relative depth one inside the return list are removed; deeper nesting is
/// left as written, matching what the target grammar tolerates for multi-value
/// returns. Lines without a `return` or without a parenthesized list pass
/// through unchanged.
pub fn flatten_return_tuples(line: &str) -> String {
    let Some(ret) = line.find("return") else {
        return line.to_string();
    };
    let Some(open) = line[ret..].find('(').map(|pos| ret + pos) else {
        return line.to_string();
    };
    let Some(close) = matching_paren(line, open) else {
        return line.to_string();
    };

    let inner = &line[open + 1..close];
    let mut flat = String::with_capacity(inner.len());
    let mut depth = 0i32;
    for ch in inner.chars() {
        match ch {
            '(' => {
                depth += 1;
                if depth == 1 {
                    continue;
                }
            }
            ')' => {
                if depth == 1 {
                    depth = 0;
                    continue;
                }
                depth -= 1;
            }
            _ => {}
        }
        flat.push(ch);
    }

    format!("{}{}{}", &line[..open + 1], flat, &line[close..])
}
