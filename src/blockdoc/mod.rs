//! Core document reader module

pub mod codec;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;

use std::path::Path;

use codec::compression::SourceStream;
use iter::Documents;
use reader::SourceReader;
use types::error::Result;
use types::options::ParseOptions;

/// Opens a document file (plain or gzip) with default options.
///
/// Returns a lazy iterator; each item is one document or the error that
/// ended iteration.
///
/// # Errors
/// Fails immediately if the file cannot be opened.
pub fn open_documents(path: impl AsRef<Path>) -> Result<Documents<SourceStream>> {
    open_documents_with(path, ParseOptions::default())
}

/// Same as [`open_documents`] with explicit [`ParseOptions`].
pub fn open_documents_with(
    path: impl AsRef<Path>,
    options: ParseOptions,
) -> Result<Documents<SourceStream>> {
    Ok(SourceReader::open(path)?.into_documents(options))
}

/// Parses documents from in-memory text.
///
/// Stops at the first error, unlike the iterators, which move on to the
/// next block after an
/// [`OrphanContinuation`](types::error::BlockdocError::OrphanContinuation).
pub fn parse_str(text: &str, options: ParseOptions) -> Result<Vec<types::models::Document>> {
    format::blocks::split_blocks(text.lines(), options).collect()
}
