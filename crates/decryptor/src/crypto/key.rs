//! [`DerivedKey`]: the AES-256 key derived from a registration token.

use common::protocol::KEY_LEN;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Fixed-size key buffer that holds exactly [`KEY_LEN`] bytes.
///
/// The bytes are wiped when this type is dropped, so key material lives in
/// RAM only for the duration of a single decryption.
pub struct DerivedKey(Zeroizing<[u8; KEY_LEN]>);

impl DerivedKey {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive the blob key as `SHA-256(token)`.
///
/// The token is hashed verbatim as UTF-8: no trimming, salt, or iteration.
pub fn derive_key(token: &str) -> DerivedKey {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize_into((&mut *key).into());
    DerivedKey(key)
}
