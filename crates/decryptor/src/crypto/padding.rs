//! PKCS7 padding removal.
//!
//! The producer pads with standard PKCS7, but historically the decoder only
//! checked the numeric range of the final byte. [`PaddingPolicy::RangeOnly`]
//! keeps that behaviour; [`PaddingPolicy::Strict`] additionally requires every
//! padding byte to equal the padding length.

use common::protocol::MAX_PAD_LEN;
use common::DecryptError;

/// How thoroughly the padding is validated before it is stripped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Only require the final byte to be in `1..=16`.
    #[default]
    RangeOnly,
    /// Also require the last `pad_len` bytes to all equal `pad_len`.
    Strict,
}

/// Strip PKCS7 padding from `plaintext` and return the unpadded prefix.
///
/// # Errors
///
/// Returns [`DecryptError::PaddingLength`] if the final byte is outside
/// `1..=16` or larger than the plaintext itself, and
/// [`DecryptError::PaddingBytes`] under [`PaddingPolicy::Strict`] when the
/// trailing bytes disagree.
pub fn strip_padding(plaintext: &[u8], policy: PaddingPolicy) -> Result<&[u8], DecryptError> {
    let Some(&pad_len) = plaintext.last() else {
        return Err(DecryptError::PaddingLength { pad_len: 0 });
    };
    if !(1..=MAX_PAD_LEN).contains(&pad_len) || usize::from(pad_len) > plaintext.len() {
        return Err(DecryptError::PaddingLength { pad_len });
    }

    let (body, padding) = plaintext.split_at(plaintext.len() - usize::from(pad_len));
    if policy == PaddingPolicy::Strict && padding.iter().any(|&b| b != pad_len) {
        return Err(DecryptError::PaddingBytes { pad_len });
    }

    Ok(body)
}
