//! Common types, wire-format definitions, and errors shared across the installer blob decryptor crates.

pub mod error;
pub mod protocol;

pub use error::{DecryptError, Stage};
