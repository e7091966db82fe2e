//! Escaping rules of the badge service's path syntax
//!
//! In a static badge path `-` separates label, message and color, and `_`
//! stands for a space. Literal dashes and underscores are therefore doubled
//! before spaces are turned into underscores, and the result is
//! percent-encoded so it cannot break the URL structure.

use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC,
};

/// Everything except the characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters that would end or restructure a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escape user text for a static badge path segment
///
/// ```
/// use readme_icons::badge::escape_segment;
///
/// assert_eq!(escape_segment("build-status"), "build--status");
/// assert_eq!(escape_segment("snake_case"), "snake__case");
/// assert_eq!(escape_segment("C++ & Go"), "C%2B%2B_%26_Go");
/// ```
pub fn escape_segment(text: &str) -> String {
    let escaped = text.replace('-', "--").replace('_', "__").replace(' ', "_");
    utf8_percent_encode(&escaped, COMPONENT).to_string()
}

/// Reverse [`escape_segment`]
///
/// Exact for any text that did not itself contain `--` or `__` runs next to
/// spaces; the service reads paths the same way.
pub fn unescape_segment(segment: &str) -> String {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let mut out = String::with_capacity(decoded.len());
    let mut chars = decoded.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '-' | '_' if chars.peek() == Some(&c) => {
                chars.next();
                out.push(c);
            }
            '_' => out.push(' '),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode an identifier used verbatim as a path segment
///
/// Unlike [`escape_segment`] dashes and underscores pass through untouched;
/// only characters that would break the path are encoded.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Strip one leading `#` (and surrounding whitespace) from a color
pub fn normalize_color(color: &str) -> &str {
    let trimmed = color.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_dashes_underscores_spaces() {
        assert_eq!(escape_segment("a-b"), "a--b");
        assert_eq!(escape_segment("a_b"), "a__b");
        assert_eq!(escape_segment("a b"), "a_b");
        assert_eq!(escape_segment("a - b_c"), "a_--_b__c");
    }

    #[test]
    fn test_escape_structural_characters() {
        assert_eq!(escape_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(escape_segment("100%"), "100%25");
        assert_eq!(escape_segment("v1.0!"), "v1.0!");
        assert_eq!(escape_segment("ünï"), "%C3%BCn%C3%AF");
    }

    #[test]
    fn test_escape_removes_raw_separators() {
        let escaped = escape_segment("C++ & Go");
        for forbidden in [' ', '-', '&', '+'] {
            assert!(!escaped.contains(forbidden), "{escaped} contains {forbidden:?}");
        }
    }

    #[test]
    fn test_round_trip() {
        for text in ["C++ & Go", "build-status", "snake_case name", "a/b", "plain", "x - y"] {
            assert_eq!(unescape_segment(&escape_segment(text)), text);
        }
    }

    #[test]
    fn test_encode_path_segment_keeps_identifiers() {
        assert_eq!(encode_path_segment("my_repo-name.rs"), "my_repo-name.rs");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("what?"), "what%3F");
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#FF0000"), "FF0000");
        assert_eq!(normalize_color("FF0000"), "FF0000");
        assert_eq!(normalize_color(" #abc "), "abc");
        assert_eq!(normalize_color("white"), "white");
        assert_eq!(normalize_color(""), "");
    }
}
