// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// URL path segment for a station: spaces in the name become '-', code is upper-cased.
/// Each space maps to one '-'; runs are not collapsed.
pub fn slugify(name: &str, code: &str) -> String {
    join!(&name.trim().replace(' ', "-"), "-", &code.trim().to_uppercase())
}

/// Notice tooltips carry their own markup inside the attribute value.
/// Only `&quot;` is decoded; other entities are left as written.
pub fn clean_notice(raw: &str) -> String {
    super::html::strip_tags(raw).replace("&quot;", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Howrah Jn", "HWH"), "Howrah-Jn-HWH");
        assert_eq!(slugify("  Chittaranjan ", " crj "), "Chittaranjan-CRJ");
        assert_eq!(slugify("New  Delhi", "ndls"), "New--Delhi-NDLS");
    }

    #[test]
    fn clean_notice_strips_markup_and_quotes() {
        assert_eq!(
            clean_notice("<b>Cancelled</b> on &quot;21 May&quot;"),
            "Cancelled on \"21 May\""
        );
    }

    #[test]
    fn clean_notice_leaves_other_entities() {
        assert_eq!(clean_notice("Pantry &amp; bedroll&nbsp;only"), "Pantry &amp; bedroll&nbsp;only");
        assert_eq!(clean_notice("Delay < 10 min, speed > 100"), "Delay < 10 min, speed > 100");
    }

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws(" a \n\t b  "), "a b");
    }
}
