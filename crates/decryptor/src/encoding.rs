//! Base64url normalization and decoding of the blob text.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use common::DecryptError;

/// Standard alphabet, canonical `=` padding required, non-zero trailing bits tolerated.
const BLOB_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Map the URL-safe alphabet onto the standard one and restore `=` padding.
///
/// Lengths of 2 or 3 mod 4 gain `==` or `=`. A length of 1 mod 4 can never be
/// valid base64 and is left for the decoder to reject. The alphabet itself is
/// not validated here.
pub fn normalize_base64url(text: &str) -> String {
    let mut normalized: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    match normalized.len() % 4 {
        2 => normalized.push_str("=="),
        3 => normalized.push('='),
        _ => {}
    }
    normalized
}

/// Decode blob text (URL-safe or standard alphabet, padded or not) into raw bytes.
///
/// ASCII whitespace anywhere in the text is dropped first so line-wrapped
/// blobs decode the same as single-line ones.
///
/// # Errors
///
/// Returns [`DecryptError::Encoding`] if the normalized text is not valid base64.
pub fn decode_blob(text: &str) -> Result<Vec<u8>, DecryptError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BLOB_ENGINE
        .decode(normalize_base64url(&compact))
        .map_err(|e| DecryptError::Encoding(e.to_string()))
}
