// Command-line interface definitions and parsing for linksift

use clap::Parser;
use clap::error::ErrorKind;

use crate::core::constants::exit_codes;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text file to scan for links
    pub input: PathBuf,

    /// File the matching links are written to
    pub output: PathBuf,
}

/// One-line usage string shown on argument errors.
pub fn usage() -> String {
    format!(
        "Usage: {} <input_file> <output_file>",
        env!("CARGO_PKG_NAME")
    )
}

/// Parse command line arguments.
///
/// A wrong argument count prints the usage line to stdout and exits with
/// status 1 before any file is touched. Help and version requests keep
/// clap's normal behavior.
pub fn parse_or_usage() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(_) => {
            println!("{}", usage());
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
