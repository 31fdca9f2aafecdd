//! The decode pipeline: base64url → AES-256-CBC → PKCS7 → gzip.
//!
//! Every stage either hands its output to the next one or aborts the whole
//! run with a [`DecryptError`]; nothing is retried and nothing partial is
//! returned. Stage events are logged at `debug` with byte counts only.

use common::protocol::EncryptedBlob;
use common::DecryptError;
use tracing::debug;

use crate::compress::gunzip;
use crate::crypto::{decrypt_cbc, derive_key, strip_padding, PaddingPolicy};
use crate::encoding::decode_blob;

/// Recover the original payload bytes from `blob_text` using `token`.
///
/// # Errors
///
/// Returns the [`DecryptError`] of the first stage that fails.
pub fn decrypt_blob(
    blob_text: &str,
    token: &str,
    policy: PaddingPolicy,
) -> Result<Vec<u8>, DecryptError> {
    let key = derive_key(token);

    let raw = decode_blob(blob_text)?;
    debug!(bytes = raw.len(), "blob decoded");

    let blob = EncryptedBlob::from_bytes(&raw)?;
    let padded = decrypt_cbc(&blob, key.as_bytes());
    debug!(bytes = padded.len(), "ciphertext decrypted");

    let unpadded = strip_padding(&padded, policy)?;
    debug!(bytes = unpadded.len(), ?policy, "padding removed");

    let payload = gunzip(unpadded)?;
    debug!(bytes = payload.len(), "payload decompressed");

    Ok(payload)
}

/// Produce a blob the way the installer backend does; only the tests need it.
#[cfg(test)]
pub(crate) fn seal(payload: &[u8], token: &str, iv: &[u8; common::protocol::IV_LEN]) -> String {
    seal_padded(&pkcs7(&crate::compress::gzip(payload)), token, iv)
}

/// Encrypt an already-padded plaintext into blob text.
#[cfg(test)]
pub(crate) fn seal_padded(
    padded: &[u8],
    token: &str,
    iv: &[u8; common::protocol::IV_LEN],
) -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    let ciphertext = crate::crypto::cipher::encrypt_cbc(padded, derive_key(token).as_bytes(), iv);
    let mut raw = iv.to_vec();
    raw.extend(ciphertext);
    URL_SAFE_NO_PAD.encode(raw)
}

#[cfg(test)]
pub(crate) fn pkcs7(data: &[u8]) -> Vec<u8> {
    let pad_len = 16 - data.len() % 16;
    let mut padded = data.to_vec();
    padded.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    padded
}
