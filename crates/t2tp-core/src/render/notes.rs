//! Unwrapping of the store's notes envelope.
//!
//! Notes are stored as `<note xml:space="preserve">…</note>`. The envelope is
//! removed by length, 27 characters in front and 7 behind, and the content
//! is split into lines. Anchor markup is reduced to its bare URL.

use once_cell::sync::Lazy;
use regex::Regex;

const ENVELOPE_PREFIX_CHARS: usize = 27;
const ENVELOPE_SUFFIX_CHARS: usize = 7;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]*)">.*?</a>"#).expect("valid link regex"));

/// Strips the envelope, returning `None` when nothing remains inside it.
pub fn unwrap_envelope(raw: &str) -> Option<&str> {
    let count = raw.chars().count();
    if count <= ENVELOPE_PREFIX_CHARS + ENVELOPE_SUFFIX_CHARS {
        return None;
    }

    let start = byte_offset(raw, ENVELOPE_PREFIX_CHARS);
    let end = byte_offset(raw, count - ENVELOPE_SUFFIX_CHARS);
    Some(&raw[start..end])
}

/// Replaces every `<a href="URL">text</a>` with `URL`.
pub fn strip_links(line: &str) -> String {
    LINK_RE.replace_all(line, "$1").into_owned()
}

/// Lines of a notes field, ready to be indented.
pub fn note_lines(raw: &str) -> Vec<String> {
    match unwrap_envelope(raw) {
        Some(content) => content.split('\n').map(strip_links).collect(),
        None => Vec::new(),
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(content: &str) -> String {
        format!(r#"<note xml:space="preserve">{content}</note>"#)
    }

    #[test]
    fn test_unwraps_envelope() {
        assert_eq!(unwrap_envelope(&wrap("buy oat milk")), Some("buy oat milk"));
    }

    #[test]
    fn test_envelope_without_content() {
        assert_eq!(unwrap_envelope(&wrap("")), None);
        assert_eq!(unwrap_envelope("short"), None);
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(unwrap_envelope(&wrap("Grüße ✓")), Some("Grüße ✓"));
    }

    #[test]
    fn test_splits_lines() {
        assert_eq!(note_lines(&wrap("first\nsecond")), vec!["first", "second"]);
    }

    #[test]
    fn test_links_become_urls() {
        let line = r#"see <a href="https://example.com/a">the docs</a> and <a href="https://example.com/b">more</a>."#;
        assert_eq!(
            strip_links(line),
            "see https://example.com/a and https://example.com/b."
        );
    }

    #[test]
    fn test_other_markup_untouched() {
        assert_eq!(strip_links("a < b <b>bold</b>"), "a < b <b>bold</b>");
    }
}
