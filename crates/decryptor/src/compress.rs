//! Gzip decompression of the unpadded plaintext.

use std::io::Read;

use common::DecryptError;
use flate2::bufread::GzDecoder;

/// Inflate a gzip stream fully into memory.
///
/// Concatenated gzip members are decoded back to back, and NUL bytes between
/// or after members are skipped. An empty input is an empty payload rather
/// than an error.
///
/// # Errors
///
/// Returns [`DecryptError::Decompression`] on a bad header, a corrupt deflate
/// stream, a CRC/length mismatch, or truncation.
pub fn gunzip(compressed: &[u8]) -> Result<Vec<u8>, DecryptError> {
    let mut payload = Vec::new();
    let mut rest = compressed;

    while !rest.is_empty() {
        let mut member = GzDecoder::new(rest);
        member
            .read_to_end(&mut payload)
            .map_err(DecryptError::Decompression)?;
        rest = skip_nul_padding(member.into_inner());
    }
    Ok(payload)
}

fn skip_nul_padding(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Gzip `payload`; only the tests need the forward direction.
#[cfg(test)]
pub(crate) fn gzip(payload: &[u8]) -> Vec<u8> {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).unwrap();
    encoder.finish().unwrap()
}
