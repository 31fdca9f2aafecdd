//! Blob loading from stdin or a file.

use std::fs::File;
use std::io::{self, Read};

use common::protocol::BlobSource;
use common::DecryptError;
use tracing::debug;

/// Read the encoded blob text from `source`.
///
/// Bytes that are not valid UTF-8 are dropped and surrounding whitespace is
/// trimmed. Both sources go through the same decoding so piping a blob or
/// passing its path yields identical text.
///
/// # Errors
///
/// Returns [`DecryptError::SourceRead`] if the file cannot be opened or either
/// source cannot be read.
pub fn read_blob(source: &BlobSource) -> Result<String, DecryptError> {
    match source {
        BlobSource::Stdin => read_text(io::stdin().lock(), source),
        BlobSource::File(path) => {
            let file = File::open(path).map_err(|e| read_error(source, e))?;
            read_text(file, source)
        }
    }
}

/// Read all of `reader` as relaxed UTF-8 and trim it.
pub fn read_text<R: Read>(mut reader: R, source: &BlobSource) -> Result<String, DecryptError> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| read_error(source, e))?;
    debug!(source = %source.describe(), bytes = raw.len(), "blob read");

    let text: String = raw.utf8_chunks().map(|chunk| chunk.valid()).collect();
    Ok(text.trim().to_owned())
}

fn read_error(source: &BlobSource, e: io::Error) -> DecryptError {
    DecryptError::SourceRead {
        origin: source.describe(),
        source: e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trims_surrounding_whitespace() {
        let text = read_text(&b"  \n abc-_123 \r\n"[..], &BlobSource::Stdin).unwrap();
        assert_eq!(text, "abc-_123");
    }

    #[test]
    fn drops_invalid_utf8() {
        let text = read_text(&b"ab\xFFcd\xC3"[..], &BlobSource::Stdin).unwrap();
        assert_eq!(text, "abcd");
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "QUJD").unwrap();

        let source = BlobSource::File(file.path().to_path_buf());
        assert_eq!(read_blob(&source).unwrap(), "QUJD");
    }

    #[test]
    fn missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = BlobSource::File(dir.path().join("absent.blob"));
        let err = read_blob(&source).unwrap_err();
        assert!(matches!(err, DecryptError::SourceRead { .. }));
        assert!(err.to_string().contains("absent.blob"));
    }

    #[test]
    fn file_and_reader_agree() {
        let body = b"\xEF\xBB\xBFQUJD\xFE\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body).unwrap();

        let from_file = read_blob(&BlobSource::File(file.path().to_path_buf())).unwrap();
        let from_reader = read_text(&body[..], &BlobSource::Stdin).unwrap();
        assert_eq!(from_file, from_reader);
    }
}
