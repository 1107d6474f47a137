use log::debug;

use crate::core::error::{LinkSiftError, Result};
use crate::core::types::{ExtractSummary, LinkMatch};
use crate::extraction::scanner;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Extraction pipeline over a single document.
pub trait ExtractLinks {
    /// Read `input`, scan it for URL-like substrings, and write the ones
    /// containing the post marker to `output`, one per line, in order of
    /// appearance. Returns the total and filtered match counts.
    fn extract(&self, input: &Path, output: &Path) -> Result<ExtractSummary>;
}

#[derive(Default, Debug)]
pub struct Extractor {}

impl ExtractLinks for Extractor {
    fn extract(&self, input: &Path, output: &Path) -> Result<ExtractSummary> {
        let text = fs::read_to_string(input).map_err(|source| LinkSiftError::FileRead {
            path: input.display().to_string(),
            source,
        })?;
        debug!("Read {} bytes from {}", text.len(), input.display());

        // The input handle is closed at this point; the scan and the write
        // below only touch the in-memory document.
        let links = scanner::scan_links(&text);
        let post_links = scanner::filter_post_links(&links);
        debug!(
            "Matched {} URL(s), {} with marker",
            links.len(),
            post_links.len()
        );

        Self::write_links(output, &post_links)?;

        Ok(ExtractSummary::new(links.len(), post_links.len()))
    }
}

impl Extractor {
    fn write_links(output: &Path, links: &[LinkMatch]) -> Result<()> {
        let file = File::create(output).map_err(|e| Self::write_error(output, e))?;
        let mut writer = BufWriter::new(file);

        for link in links {
            writeln!(writer, "{}", link.url()).map_err(|e| Self::write_error(output, e))?;
        }

        writer.flush().map_err(|e| Self::write_error(output, e))
    }

    fn write_error(output: &Path, source: std::io::Error) -> LinkSiftError {
        LinkSiftError::FileWrite {
            path: output.display().to_string(),
            source,
        }
    }
}
