//! Minimal escaping for the text writer.

/// Escape a string for use inside a double-quoted attribute value.
pub(crate) fn push_escaped_attr(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

/// Escape a string for use as element text content.
pub(crate) fn push_escaped_text(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_escaping_covers_both_quote_styles() {
        let mut out = String::new();
        push_escaped_attr(&mut out, r#"a<b>&"c"'d'"#);
        assert_eq!(out, "a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;");
    }

    #[test]
    fn text_escaping_leaves_quotes_alone() {
        let mut out = String::new();
        push_escaped_text(&mut out, r#"a<b>&"c"'d'"#);
        assert_eq!(out, r#"a&lt;b&gt;&amp;"c"'d'"#);
    }
}
