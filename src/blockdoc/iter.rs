//! Pull-based iteration over the documents of a text stream.
//!
//! # Example
//! ```no_run
//! # use blockdoc_reader::open_documents;
//! for doc in open_documents("records.txt.gz").unwrap() {
//!     let doc = doc.unwrap();
//!     println!("{:?}", doc.get("title"));
//! }
//! ```

use std::io::BufRead;

use log::debug;

use super::format::blocks::BlockSplitter;
use super::format::document::assemble;
use super::types::error::{BlockdocError, Result};
use super::types::models::{ClassifiedLine, Document, SourceFormat};
use super::types::options::ParseOptions;

/// Iterator over the documents of a buffered text stream.
///
/// Lines are read only as far as needed to complete the next document. The
/// iterator owns its reader, so dropping it (after exhaustion, an error, or
/// early) releases the underlying file handle.
///
/// After a read error the iterator yields that error once and then ends;
/// the partially accumulated document is discarded.
///
/// An [`OrphanContinuation`](BlockdocError::OrphanContinuation) error only
/// fails its own block: the lines of that block are consumed and the next
/// call continues with the following block. Callers that want to stop at the
/// first error, like [`parse_str()`](crate::parse_str), must do so themselves.
///
/// Created by [`open_documents()`](crate::open_documents) or [`Documents::new()`].
pub struct Documents<R> {
    reader: R,
    splitter: BlockSplitter,
    options: ParseOptions,
    format: Option<SourceFormat>,
    buf: String,
    emitted: usize,
    done: bool,
}

impl<R: BufRead> Documents<R> {
    /// Parses documents from an already opened stream. No decompression is
    /// performed; use [`open_documents()`](crate::open_documents) for files.
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Self {
            reader,
            splitter: BlockSplitter::new(),
            options,
            format: None,
            buf: String::new(),
            emitted: 0,
            done: false,
        }
    }

    pub(crate) fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// The decoding mode chosen when the source was opened, or `None` for
    /// streams handed in by the caller.
    pub fn source_format(&self) -> Option<SourceFormat> {
        self.format
    }

    /// Number of physical lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.splitter.line_no()
    }

    fn finish_block(&mut self, block: Vec<ClassifiedLine>) -> Result<Document> {
        let doc = assemble(&block, &self.options)?;
        self.emitted += 1;
        debug!(
            "Document {} assembled: {} field(s) ending at line {}",
            self.emitted,
            doc.len(),
            self.splitter.line_no()
        );
        Ok(doc)
    }
}

impl<R: BufRead> Iterator for Documents<R> {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    debug!(
                        "End of input after {} line(s), {} document(s) so far",
                        self.splitter.line_no(),
                        self.emitted
                    );
                    let block = self.splitter.finish()?;
                    return Some(self.finish_block(block));
                }
                Ok(_) => {
                    if let Some(block) = self.splitter.push_line(&self.buf) {
                        return Some(self.finish_block(block));
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    self.splitter.discard();
                    return Some(Err(BlockdocError::Read {
                        line: self.splitter.line_no() + 1,
                        source: e,
                    }));
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Documents<R> {}
