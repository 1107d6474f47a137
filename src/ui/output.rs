// Console status reporting for linksift

use crate::core::constants::markers;
use crate::core::types::ExtractSummary;

use std::path::Path;

/// Format the single success status line.
pub fn status_line(summary: &ExtractSummary, output: &Path) -> String {
    format!(
        "Found {} links, {} of them contain '{}'. Saved to file {}",
        summary.total,
        summary.filtered,
        markers::POST_SEGMENT,
        output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_line() {
        let summary = ExtractSummary::new(2, 1);
        let path = PathBuf::from("links.txt");

        assert_eq!(
            status_line(&summary, &path),
            "Found 2 links, 1 of them contain '/posts/'. Saved to file links.txt"
        );
    }

    #[test]
    fn test_status_line_zero_counts() {
        let summary = ExtractSummary::new(0, 0);
        let path = PathBuf::from("out/empty.txt");

        let line = status_line(&summary, &path);
        assert!(line.starts_with("Found 0 links, 0 of them contain '/posts/'"));
        assert!(line.ends_with("out/empty.txt"));
    }
}
