//! AES-256-CBC decryption of a whole blob held in memory.

use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use common::protocol::{EncryptedBlob, BLOCK_LEN, KEY_LEN};

/// Decrypt `blob.ciphertext` with AES-256 in CBC mode, chaining from `blob.iv`.
///
/// The returned plaintext still carries its PKCS7 padding and has the same
/// length as the ciphertext. [`EncryptedBlob`] guarantees the ciphertext is
/// block aligned, so this step cannot fail; a wrong key simply produces
/// garbage.
pub fn decrypt_cbc(blob: &EncryptedBlob, key: &[u8; KEY_LEN]) -> Vec<u8> {
    let cipher = Aes256Dec::new(key.into());
    let mut plaintext = Vec::with_capacity(blob.ciphertext.len());
    let mut previous: [u8; BLOCK_LEN] = blob.iv;

    for chunk in blob.ciphertext.chunks_exact(BLOCK_LEN) {
        let mut block = AesBlock::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);

        let mut out = [0u8; BLOCK_LEN];
        xor_blocks(block.as_slice(), &previous, &mut out);
        plaintext.extend_from_slice(&out);

        previous.copy_from_slice(chunk);
    }

    plaintext
}

/// XORs two 16-byte blocks into `output`.
#[inline(always)]
fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8; BLOCK_LEN]) {
    for (i, out) in output.iter_mut().enumerate() {
        *out = block_a[i] ^ block_b[i];
    }
}

/// Encrypt already-padded plaintext; only the tests need the forward direction.
#[cfg(test)]
pub(crate) fn encrypt_cbc(padded: &[u8], key: &[u8; KEY_LEN], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    use aes::cipher::BlockEncrypt;
    use aes::Aes256Enc;

    assert_eq!(padded.len() % BLOCK_LEN, 0, "plaintext must be block aligned");
    let cipher = Aes256Enc::new(key.into());
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut previous = *iv;

    for chunk in padded.chunks_exact(BLOCK_LEN) {
        let mut mixed = [0u8; BLOCK_LEN];
        xor_blocks(chunk, &previous, &mut mixed);
        let mut block = AesBlock::from(mixed);
        cipher.encrypt_block(&mut block);
        ciphertext.extend_from_slice(block.as_slice());
        previous.copy_from_slice(block.as_slice());
    }

    ciphertext
}
