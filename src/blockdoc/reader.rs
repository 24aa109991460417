//! File access: opening a document file and resolving its encoding.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::codec::compression::{self, SourceStream};
use super::iter::Documents;
use super::types::error::{BlockdocError, Result};
use super::types::models::SourceFormat;
use super::types::options::ParseOptions;

/// An opened document file whose encoding has been resolved.
///
/// Opening probes the first bytes of the file: gzip input is decompressed,
/// anything else is read as plain text. Open failures are returned as-is and
/// never trigger a fallback.
pub struct SourceReader {
    path: PathBuf,
    format: SourceFormat,
    stream: SourceStream,
}

impl SourceReader {
    /// Opens `path` and detects its encoding.
    ///
    /// # Errors
    /// Returns [`BlockdocError::Open`] if the file cannot be opened or its
    /// first bytes cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening document file: {}", path.display());

        let open_err = |source| BlockdocError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        let (format, stream) = compression::open_stream(file).map_err(open_err)?;
        debug!("{} detected as {} text", path.display(), format);

        Ok(Self {
            path: path.to_path_buf(),
            format,
            stream,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Hands the stream to a document iterator. The file is closed when the
    /// iterator is dropped.
    pub fn into_documents(self, options: ParseOptions) -> Documents<SourceStream> {
        Documents::new(self.stream, options).with_format(self.format)
    }
}
