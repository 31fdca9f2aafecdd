//! AES-256-CBC blob decryption primitives.
//!
//! This module is free of I/O. It provides key derivation from a registration
//! token, CBC decryption of an [`EncryptedBlob`](common::protocol::EncryptedBlob),
//! and PKCS7 padding removal.
//!
//! CBC gives no authentication. A wrong token yields garbage plaintext, which
//! is only caught indirectly by the padding check and by gzip framing.

pub mod cipher;
pub mod key;
pub mod padding;

pub use cipher::decrypt_cbc;
pub use key::derive_key;
pub use padding::{strip_padding, PaddingPolicy};
