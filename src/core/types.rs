use std::cmp::Ordering;

/// A URL-like substring found in a document.
///
/// Tracks the byte offset of the match's first character so that match
/// order is preserved through filtering and reporting. The offset never
/// appears in the output file.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct LinkMatch {
    /// The matched substring, verbatim
    url: String,
    /// Byte offset of the match start within the document
    offset: usize,
}

impl Ord for LinkMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl PartialOrd for LinkMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl LinkMatch {
    pub fn new(url: String, offset: usize) -> Self {
        Self { url, offset }
    }

    /// Get the matched URL as a string slice.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the byte offset of the match start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consume the match, returning the URL string.
    pub fn into_url(self) -> String {
        self.url
    }
}

/// Counts produced by one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Number of URL-like substrings found
    pub total: usize,
    /// Number of found substrings containing the marker segment
    pub filtered: usize,
}

impl ExtractSummary {
    pub fn new(total: usize, filtered: usize) -> Self {
        debug_assert!(filtered <= total);
        Self { total, filtered }
    }
}
