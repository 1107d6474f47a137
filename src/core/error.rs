use std::fmt;

/// Error types for linksift operations
#[derive(Debug)]
pub enum LinkSiftError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Input file could not be read or decoded
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Output file could not be created or written
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}

impl fmt::Display for LinkSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkSiftError::Io(err) => write!(f, "IO error: {err}"),
            LinkSiftError::FileRead { path, source } => {
                write!(f, "Failed to read '{path}': {source}")
            }
            LinkSiftError::FileWrite { path, source } => {
                write!(f, "Failed to write '{path}': {source}")
            }
        }
    }
}

impl std::error::Error for LinkSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkSiftError::Io(err) => Some(err),
            LinkSiftError::FileRead { source, .. } => Some(source),
            LinkSiftError::FileWrite { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for LinkSiftError {
    fn from(err: std::io::Error) -> Self {
        LinkSiftError::Io(err)
    }
}

/// Type alias for Results using LinkSiftError
pub type Result<T> = std::result::Result<T, LinkSiftError>;
