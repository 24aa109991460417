//! # blockdoc-reader
//!
//! A reader for files made of blank-line separated documents of `key: value`
//! fields, where a value may continue over following lines that carry no key.
//! Input may be plain text or gzip-compressed; the format is detected from
//! the file header.
//!
//! ```text
//! # comment lines are ignored
//! title: Hello
//! body: line one
//! line two
//!
//! title: Second
//! ```
pub mod blockdoc;

// Re-export the main types for convenience
pub use blockdoc::{
    open_documents, open_documents_with, parse_str,
    codec::compression::SourceStream,
    format::blocks::split_blocks,
    iter::Documents,
    reader::SourceReader,
    types::{
        error::{BlockdocError, Result},
        models::{ClassifiedLine, Document, SourceFormat},
        options::{OrphanPolicy, ParseOptions},
    },
};
