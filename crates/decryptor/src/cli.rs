//! Command-line interface.

use clap::Parser;
use common::protocol::BlobSource;

use crate::crypto::PaddingPolicy;

/// Decrypt an installer configuration blob with a registration token.
///
/// The blob is `base64url(IV || AES-256-CBC(SHA-256(token), IV, PKCS7(gzip(payload))))`.
/// The decrypted payload is written to stdout.
#[derive(Debug, Parser)]
#[command(name = "decrypt-installer", version)]
pub struct Cli {
    /// Path of the file holding the blob text, or `-` to read it from stdin.
    #[arg(value_name = "BLOB_SOURCE")]
    pub source: String,

    /// Registration token the blob key is derived from (used verbatim).
    #[arg(value_name = "REG_TOKEN", allow_hyphen_values = true)]
    pub token: String,

    /// Require every PKCS7 padding byte to equal the padding length.
    #[arg(long)]
    pub strict_padding: bool,
}

impl Cli {
    /// Parse `std::env::args`, exiting with status 1 on usage errors.
    ///
    /// `--help` and `--version` still print and exit with status 0.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if e.use_stderr() => {
                let _ = e.print();
                std::process::exit(1);
            }
            Err(e) => e.exit(),
        }
    }

    pub fn blob_source(&self) -> BlobSource {
        BlobSource::from_arg(&self.source)
    }

    pub fn padding_policy(&self) -> PaddingPolicy {
        if self.strict_padding {
            PaddingPolicy::Strict
        } else {
            PaddingPolicy::RangeOnly
        }
    }
}
