//! linksift - extract post links from text files
//!
//! Scans a text document for URL-like substrings and writes the subset
//! containing the `/posts/` path segment to an output file, one link per
//! line, in order of appearance.

pub mod core;
pub mod extraction;
pub mod reporting;
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::error::{LinkSiftError, Result};
pub use crate::core::types::{ExtractSummary, LinkMatch};
pub use crate::extraction::{ExtractLinks, Extractor};
