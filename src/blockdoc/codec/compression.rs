//! Compression detection and decoding for document sources.
//!
//! Sources are either gzip-compressed or plain text. The format is decided
//! by the first two bytes of the stream (the gzip magic `1f 8b`) rather than
//! by attempting a decode and falling back on failure.

use std::io::{self, BufRead, BufReader, Cursor, Read};

use flate2::read::MultiGzDecoder;
use log::trace;

use crate::blockdoc::types::models::SourceFormat;

/// Leading bytes of every gzip member (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A buffered line source over either decoding mode.
pub type SourceStream = Box<dyn BufRead + Send>;

/// Classifies a stream prefix.
pub fn detect_format(prefix: &[u8]) -> SourceFormat {
    if prefix.starts_with(&GZIP_MAGIC) {
        SourceFormat::Gzip
    } else {
        SourceFormat::Plain
    }
}

/// Reads up to `buf.len()` bytes, stopping early only at end of input.
///
/// A single `read` may legally return fewer bytes than requested, so the
/// probe loops until the buffer is full or the source is exhausted.
fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Probes the start of `reader` and wraps it in the matching decoder.
///
/// The probed bytes are chained back in front of the stream, so nothing is
/// lost for either mode. Only errors from reading the probe itself are
/// returned here; decompression errors surface later, while lines are read.
pub fn open_stream<R>(mut reader: R) -> io::Result<(SourceFormat, SourceStream)>
where
    R: Read + Send + 'static,
{
    let mut magic = [0u8; GZIP_MAGIC.len()];
    let n = read_prefix(&mut reader, &mut magic)?;
    let format = detect_format(&magic[..n]);
    trace!("Probed {} header byte(s): {:02x?} -> {}", n, &magic[..n], format);

    let restored = Cursor::new(magic[..n].to_vec()).chain(reader);
    let stream: SourceStream = match format {
        SourceFormat::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(restored))),
        SourceFormat::Plain => Box::new(BufReader::new(restored)),
    };
    Ok((format, stream))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn read_all(mut stream: SourceStream) -> String {
        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn detects_gzip_magic() {
        assert_eq!(detect_format(&[0x1f, 0x8b, 0x08]), SourceFormat::Gzip);
        assert_eq!(detect_format(b"title: x"), SourceFormat::Plain);
        assert_eq!(detect_format(&[0x1f]), SourceFormat::Plain);
        assert_eq!(detect_format(&[]), SourceFormat::Plain);
    }

    #[test]
    fn plain_stream_keeps_probed_bytes() {
        let (format, stream) = open_stream(Cursor::new(b"ab: c\n".to_vec())).unwrap();
        assert_eq!(format, SourceFormat::Plain);
        assert_eq!(read_all(stream), "ab: c\n");
    }

    #[test]
    fn gzip_stream_is_decoded() {
        let (format, stream) = open_stream(Cursor::new(gzip(b"key: value\n"))).unwrap();
        assert_eq!(format, SourceFormat::Gzip);
        assert_eq!(read_all(stream), "key: value\n");
    }

    #[test]
    fn concatenated_gzip_members_are_read_in_full() {
        let mut data = gzip(b"a: 1\n\n");
        data.extend(gzip(b"b: 2\n"));
        let (_, stream) = open_stream(Cursor::new(data)).unwrap();
        assert_eq!(read_all(stream), "a: 1\n\nb: 2\n");
    }

    #[test]
    fn one_byte_source_is_plain() {
        let (format, stream) = open_stream(Cursor::new(b"x".to_vec())).unwrap();
        assert_eq!(format, SourceFormat::Plain);
        assert_eq!(read_all(stream), "x");
    }
}
