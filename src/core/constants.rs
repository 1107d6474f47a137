/// Application-wide constants to avoid magic values throughout the codebase.
/// Marker constants used to select links
pub mod markers {
    /// Path segment a link must contain to be kept.
    ///
    /// Fixed on purpose: the command-line surface takes exactly two
    /// positional arguments and no flags.
    pub const POST_SEGMENT: &str = "/posts/";
}

/// Pattern constants for the document scan
pub mod patterns {
    /// URL-like substrings: an `http://`/`https://` or `www.` prefix
    /// followed by a maximal run of characters excluding whitespace,
    /// angle brackets and quote characters.
    pub const URL: &str = r#"https?://[^\s<>"']+|www\.[^\s<>"']+"#;
}

/// Process exit codes
pub mod exit_codes {
    /// Successful completion
    pub const SUCCESS: i32 = 0;
    /// Usage error or fatal runtime error
    pub const FAILURE: i32 = 1;
}
