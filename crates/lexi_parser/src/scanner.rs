//! Balanced-brace scanning with string-literal awareness.
//!
//! A small explicit state machine instead of nested-brace regexes: braces
//! inside quoted JSON strings (including after escaped quotes) must not
//! count toward nesting depth.

/// Find the exclusive end index of the balanced object starting at `start`.
///
/// `text[start..]` must begin with `{`. Returns `None` when the braces never
/// balance; the scan visits each character once, so unbalanced or
/// pathological input terminates without progress loops.
pub(crate) fn balanced_object_end(text: &str, start: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                // Without an opening brace first, the span is not an object.
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}
