//! Custom error types for the blockdoc-reader crate.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BlockdocError {
    /// The source file could not be opened or its header could not be probed.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line failed mid-stream (truncated or corrupt gzip data, invalid UTF-8, ...).
    /// Any partially accumulated document is discarded.
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A keyless line appeared before any key in its document and the
    /// configured policy rejects such lines.
    #[error("Line {line} continues a value but no key has been declared yet: {content:?}")]
    OrphanContinuation { line: usize, content: String },

    /// An option value could not be parsed.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// A convenience `Result` type alias using the crate's `BlockdocError` type.
pub type Result<T> = std::result::Result<T, BlockdocError>;
