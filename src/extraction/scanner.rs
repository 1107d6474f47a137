use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::{markers, patterns};
use crate::core::types::LinkMatch;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(patterns::URL).expect("Failed to compile URL pattern"));

// Reuse the marker searcher instance across calls
static MARKER_FINDER: Lazy<memmem::Finder<'static>> =
    Lazy::new(|| memmem::Finder::new(markers::POST_SEGMENT));

/// Scan a document for URL-like substrings.
///
/// Matches are leftmost and non-overlapping; each match extends greedily
/// until the first whitespace, `<`, `>`, `"` or `'` character, or end of
/// text, and the scan resumes immediately after the match end. Matches are
/// returned in order of occurrence, duplicates included.
pub fn scan_links(text: &str) -> Vec<LinkMatch> {
    URL_REGEX
        .find_iter(text)
        .map(|m| LinkMatch::new(m.as_str().to_string(), m.start()))
        .collect()
}

/// Whether a URL contains the post marker segment anywhere.
///
/// Case-sensitive, unanchored substring containment.
pub fn contains_marker(url: &str) -> bool {
    MARKER_FINDER.find(url.as_bytes()).is_some()
}

/// Keep the matches containing the post marker, preserving relative order.
pub fn filter_post_links(links: &[LinkMatch]) -> Vec<LinkMatch> {
    links
        .iter()
        .filter(|link| contains_marker(link.url()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn urls(links: &[LinkMatch]) -> Vec<&str> {
        links.iter().map(|l| l.url()).collect()
    }

    #[test]
    fn test_scan_links() {
        let text = "Check this: https://example.com/posts/42 and http://other.com/about";
        let actual = scan_links(text);

        assert_eq!(
            urls(&actual),
            vec!["https://example.com/posts/42", "http://other.com/about"]
        );
    }

    #[test]
    fn test_scan_links__records_offsets_in_document_order() {
        let text = "a https://one.example b https://two.example";
        let actual = scan_links(text);

        assert_eq!(actual[0].offset(), 2);
        assert_eq!(actual[1].offset(), 24);
        assert!(actual[0] < actual[1]);
    }

    #[test]
    fn test_scan_links__www_prefix() {
        let text = "see www.site.com/posts/1 for details";
        let actual = scan_links(text);

        assert_eq!(urls(&actual), vec!["www.site.com/posts/1"]);
    }

    #[test]
    fn test_scan_links__www_prefix_is_not_word_anchored() {
        // A "www." run inside a longer word still matches from the prefix
        let actual = scan_links("awww.example");

        assert_eq!(urls(&actual), vec!["www.example"]);
    }

    #[test]
    fn test_scan_links__terminates_at_boundary_characters() {
        let cases = vec![
            ("<https://a.com/x>", "https://a.com/x"),
            ("\"https://a.com/x\"", "https://a.com/x"),
            ("'https://a.com/x'", "https://a.com/x"),
            ("https://a.com/x next", "https://a.com/x"),
            ("https://a.com/x\tnext", "https://a.com/x"),
            ("https://a.com/x\nnext", "https://a.com/x"),
        ];

        for (text, expected) in cases {
            let actual = scan_links(text);
            assert_eq!(urls(&actual), vec![expected], "input: {text:?}");
        }
    }

    #[test]
    fn test_scan_links__greedy_through_trailing_punctuation() {
        // Punctuation outside the exclusion set stays in the match
        let actual = scan_links("read https://a.com/posts/1, then stop");

        assert_eq!(urls(&actual), vec!["https://a.com/posts/1,"]);
    }

    #[test]
    fn test_scan_links__bare_scheme_is_not_a_match() {
        // "https://" needs at least one following non-excluded character
        assert!(scan_links("https:// and nothing").is_empty());
        assert!(scan_links("www.").is_empty());
    }

    #[test]
    fn test_scan_links__keeps_duplicates() {
        let text = "https://a.com/posts/1 https://a.com/posts/1";
        let actual = scan_links(text);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].url(), actual[1].url());
        assert_ne!(actual[0].offset(), actual[1].offset());
    }

    #[test]
    fn test_scan_links__no_links() {
        assert!(scan_links("No links here.").is_empty());
        assert!(scan_links("").is_empty());
    }

    #[test]
    fn test_contains_marker() {
        assert!(contains_marker("https://example.com/posts/42"));
        assert!(!contains_marker("https://example.com/about"));
        // Case-sensitive
        assert!(!contains_marker("https://example.com/Posts/42"));
        // Unanchored
        assert!(contains_marker("www.site.com/blog/posts/9?x=1"));
    }

    #[test]
    fn test_filter_post_links__preserves_order_and_duplicates() {
        let links = scan_links(
            "https://a.com/posts/2 http://b.com/about www.c.com/posts/1 https://a.com/posts/2",
        );
        let actual = filter_post_links(&links);

        assert_eq!(
            urls(&actual),
            vec![
                "https://a.com/posts/2",
                "www.c.com/posts/1",
                "https://a.com/posts/2"
            ]
        );
    }

    #[test]
    fn test_filter_post_links__empty_input() {
        assert!(filter_post_links(&[]).is_empty());
    }
}
