// src/core/html.rs

/// Drop `<tag …>` spans and collapse the whitespace left behind.
/// `"<b>Late</b>  by 10 min"` → `"Late by 10 min"`
///
/// Only a `<` followed by a tag-start character (letter, `/`, `!`, `?`) and a
/// closing `>` opens a tag. Stray `<` / `>` (already entity-decoded text such as
/// `"Delay < 10 min"`) stay as they are.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match tag_len(after) {
            Some(len) => rest = &after[len + 1..],
            None => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    super::sanitize::normalize_ws(&out)
}

/// Byte length of a tag body up to (not including) its `>`.
fn tag_len(after_open: &str) -> Option<usize> {
    let first = after_open.chars().next()?;
    if !(first.is_ascii_alphabetic() || matches!(first, '/' | '!' | '?')) {
        return None;
    }
    let close = after_open.find('>')?;
    // another `<` before the `>` means this one was never closed
    if after_open[..close].contains('<') { None } else { Some(close) }
}
