//! Escaping for LaTeX and HTML embedding
//!
//! Both escapers work in a single pass over the input, so a replacement is
//! never re-examined. Callers escape each raw field once, at the point where
//! it is embedded.

/// LaTeX substitutions for the characters that are special in running text
const LATEX_TABLE: [(char, &str); 7] = [
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
];

fn latex_replacement(c: char) -> Option<&'static str> {
    LATEX_TABLE
        .iter()
        .find(|(special, _)| *special == c)
        .map(|(_, escaped)| *escaped)
}

/// Escape `& % $ # _ ~ ^` for LaTeX.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match latex_replacement(c) {
            Some(escaped) => result.push_str(escaped),
            None => result.push(c),
        }
    }
    result
}

/// Reverse [`escape_latex`].
///
/// Only the exact sequences produced by the escaper are recognized; any other
/// backslash is left alone.
pub fn unescape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '\\' {
            for (special, escaped) in LATEX_TABLE {
                if let Some(tail) = rest.strip_prefix(escaped) {
                    result.push(special);
                    rest = tail;
                    continue 'outer;
                }
            }
        }
        result.push(c);
        rest = &rest[c.len_utf8()..];
    }

    result
}

/// Escape text for HTML element content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_latex_specials() {
        assert_eq!(escape_latex("10% of $5"), r"10\% of \$5");
        assert_eq!(escape_latex("A & B #1"), r"A \& B \#1");
        assert_eq!(escape_latex("snake_case"), r"snake\_case");
        assert_eq!(
            escape_latex("~^"),
            r"\textasciitilde{}\textasciicircum{}"
        );
    }

    #[test]
    fn test_escape_latex_leaves_plain_text() {
        assert_eq!(escape_latex("Plain Title: Über"), "Plain Title: Über");
        assert_eq!(escape_latex(r"\alpha"), r"\alpha");
    }

    #[test]
    fn test_unescape_latex() {
        assert_eq!(unescape_latex(r"\&\%\$\#\_"), "&%$#_");
        assert_eq!(unescape_latex(r"x\textasciitilde{}y"), "x~y");
        assert_eq!(unescape_latex(r"\alpha \\ end"), r"\alpha \\ end");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_escape_html_is_single_pass() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
