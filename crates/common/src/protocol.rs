//! Wire format of installer configuration blobs.
//!
//! ```text
//! base64url( IV[16] || AES-256-CBC(key, IV, PKCS7(gzip(payload))) )
//! key = SHA-256(UTF-8 registration token)
//! ```
//!
//! The producer may strip base64 `=` padding and use either the URL-safe or
//! the standard alphabet.

use std::path::PathBuf;

use crate::error::DecryptError;

/// Byte length of the AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES block.
pub const BLOCK_LEN: usize = 16;

/// Byte length of the CBC initialisation vector that prefixes every blob.
pub const IV_LEN: usize = BLOCK_LEN;

/// Largest PKCS7 padding length for a 16-byte block cipher.
pub const MAX_PAD_LEN: u8 = BLOCK_LEN as u8;

/// Source argument that selects standard input instead of a file.
pub const STDIN_MARKER: &str = "-";

/// Where the encoded blob text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobSource {
    Stdin,
    File(PathBuf),
}

impl BlobSource {
    /// Interpret a command-line source designator.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            BlobSource::Stdin
        } else {
            BlobSource::File(PathBuf::from(arg))
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            BlobSource::Stdin => "stdin".into(),
            BlobSource::File(path) => path.display().to_string(),
        }
    }
}

/// A decoded blob split into its IV and ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    /// CBC initialisation vector.
    pub iv: [u8; IV_LEN],
    /// Block-aligned, non-empty ciphertext.
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Split decoded bytes into IV and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`DecryptError::Structural`] if fewer than [`IV_LEN`] bytes are
    /// present or the remainder is empty or not a multiple of [`BLOCK_LEN`].
    pub fn from_bytes(raw: &[u8]) -> Result<Self, DecryptError> {
        if raw.len() < IV_LEN {
            return Err(DecryptError::Structural { len: raw.len() });
        }
        let (iv_bytes, ciphertext) = raw.split_at(IV_LEN);
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(DecryptError::Structural { len: raw.len() });
        }

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(iv_bytes);

        Ok(Self {
            iv,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_from_arg() {
        assert_eq!(BlobSource::from_arg("-"), BlobSource::Stdin);
        assert_eq!(
            BlobSource::from_arg("blob.txt"),
            BlobSource::File(PathBuf::from("blob.txt"))
        );
        // Only the bare marker means stdin.
        assert_eq!(
            BlobSource::from_arg("--"),
            BlobSource::File(PathBuf::from("--"))
        );
    }

    #[test]
    fn source_describe() {
        assert_eq!(BlobSource::Stdin.describe(), "stdin");
        assert_eq!(BlobSource::from_arg("a/b.txt").describe(), "a/b.txt");
    }

    #[test]
    fn split_iv_and_ciphertext() {
        let raw: Vec<u8> = (0u8..48).collect();
        let blob = EncryptedBlob::from_bytes(&raw).unwrap();
        assert_eq!(blob.iv.to_vec(), (0u8..16).collect::<Vec<_>>());
        assert_eq!(blob.ciphertext, (16u8..48).collect::<Vec<_>>());
    }

    #[test]
    fn rejects_short_input() {
        assert!(matches!(
            EncryptedBlob::from_bytes(&[0u8; 15]),
            Err(DecryptError::Structural { len: 15 })
        ));
    }

    #[test]
    fn rejects_iv_without_ciphertext() {
        assert!(matches!(
            EncryptedBlob::from_bytes(&[0u8; IV_LEN]),
            Err(DecryptError::Structural { len: 16 })
        ));
    }

    #[test]
    fn rejects_unaligned_ciphertext() {
        assert!(EncryptedBlob::from_bytes(&[0u8; IV_LEN + 17]).is_err());
        assert!(EncryptedBlob::from_bytes(&[0u8; IV_LEN + 15]).is_err());
        assert!(EncryptedBlob::from_bytes(&[0u8; IV_LEN + 32]).is_ok());
    }
}
