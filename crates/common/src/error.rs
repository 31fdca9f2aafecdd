//! Common error types shared across crates.

use std::fmt;

use thiserror::Error;

use crate::protocol::{BLOCK_LEN, IV_LEN, MAX_PAD_LEN};

/// Pipeline stage at which a [`DecryptError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Decode,
    Structure,
    Padding,
    Decompress,
}

impl Stage {
    /// Short name used in diagnostics and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Read => "read",
            Stage::Decode => "decode",
            Stage::Structure => "structure",
            Stage::Padding => "padding",
            Stage::Decompress => "decompress",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level decryption error type.
///
/// Every variant is fatal: the pipeline stops at the first error and produces
/// no output. Variants map to pipeline stages:
/// - [`DecryptError::SourceRead`] → [`Stage::Read`]
/// - [`DecryptError::Encoding`] → [`Stage::Decode`]
/// - [`DecryptError::Structural`] → [`Stage::Structure`]
/// - [`DecryptError::PaddingLength`], [`DecryptError::PaddingBytes`] → [`Stage::Padding`]
/// - [`DecryptError::Decompression`] → [`Stage::Decompress`]
#[derive(Debug, Error)]
pub enum DecryptError {
    /// The blob source could not be opened or read.
    #[error("cannot read blob from {origin}: {source}")]
    SourceRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The normalized blob text is not valid base64.
    #[error("blob is not valid base64: {0}")]
    Encoding(String),

    /// The decoded bytes do not form `IV || ciphertext` with a block-aligned, non-empty ciphertext.
    #[error(
        "decoded blob is {len} bytes; expected a {IV_LEN}-byte IV followed by a non-empty multiple of {BLOCK_LEN} bytes"
    )]
    Structural { len: usize },

    /// The final plaintext byte is not a padding length in `1..=16`.
    #[error(
        "invalid PKCS7 padding length {pad_len} (expected 1..={MAX_PAD_LEN}); wrong registration token or corrupted blob"
    )]
    PaddingLength { pad_len: u8 },

    /// Strict padding only: the trailing bytes are not all equal to the padding length.
    #[error("PKCS7 padding bytes do not all equal {pad_len}; wrong registration token or corrupted blob")]
    PaddingBytes { pad_len: u8 },

    /// The unpadded plaintext is not a valid gzip stream.
    #[error("gzip decompression failed: {0}; wrong registration token or corrupted blob")]
    Decompression(#[source] std::io::Error),
}

impl DecryptError {
    /// Returns the pipeline stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            DecryptError::SourceRead { .. } => Stage::Read,
            DecryptError::Encoding(_) => Stage::Decode,
            DecryptError::Structural { .. } => Stage::Structure,
            DecryptError::PaddingLength { .. } | DecryptError::PaddingBytes { .. } => {
                Stage::Padding
            }
            DecryptError::Decompression(_) => Stage::Decompress,
        }
    }
}
