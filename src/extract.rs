//! Link extraction
//!
//! Finds the first http(s) link in free chat text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme prefix followed by a run of non-whitespace
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Return the first link in `text`, if any.
///
/// Only the scheme and the absence of whitespace are checked; trailing
/// punctuation stays part of the match.
pub fn first_link(text: &str) -> Option<&str> {
    LINK.find(text).map(|m| m.as_str())
}

/// Convenience for optional message text
pub fn first_link_in(text: Option<&str>) -> Option<&str> {
    text.and_then(first_link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_https_link() {
        let text = "analyze this image: https://example.com/image.jpg";
        assert_eq!(first_link(text), Some("https://example.com/image.jpg"));
    }

    #[test]
    fn test_finds_http_link() {
        assert_eq!(
            first_link("check http://example.com now"),
            Some("http://example.com")
        );
    }

    #[test]
    fn test_first_of_many() {
        let text = "a https://one.example/a b https://two.example/b";
        assert_eq!(first_link(text), Some("https://one.example/a"));
    }

    #[test]
    fn test_no_link() {
        assert_eq!(first_link("is this image AI generated?"), None);
        assert_eq!(first_link("ftp://example.com/file"), None);
        assert_eq!(first_link("https:// spaced"), None);
        assert_eq!(first_link(""), None);
    }

    #[test]
    fn test_keeps_trailing_punctuation() {
        assert_eq!(
            first_link("see (https://example.com/x)."),
            Some("https://example.com/x).")
        );
    }

    #[test]
    fn test_stops_at_any_whitespace() {
        assert_eq!(
            first_link("https://example.com/a\tb\nc"),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn test_link_mid_word() {
        // No word boundary is required before the scheme
        assert_eq!(first_link("xhttps://a.b"), Some("https://a.b"));
    }

    #[test]
    fn test_idempotent() {
        let text = "two https://a.example https://b.example";
        assert_eq!(first_link(text), first_link(text));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(first_link_in(None), None);
        assert_eq!(first_link_in(Some("https://x.y")), Some("https://x.y"));
    }
}
