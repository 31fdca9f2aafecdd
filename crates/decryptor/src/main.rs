//! `decrypt-installer` — binary entry point.
//!
//! Startup sequence:
//! 1. Parse the command line.
//! 2. Load and validate [`Config`] from environment variables.
//! 3. Initialise structured logging on stderr.
//! 4. Read the blob text from stdin or a file.
//! 5. Run the decode pipeline and write the payload to stdout.

mod cli;
mod compress;
mod config;
mod crypto;
mod encoding;
mod pipeline;
mod render;
mod source;
mod telemetry;

use std::io;

use anyhow::{Context, Result};
use common::protocol::BlobSource;
use common::DecryptError;
use tracing::{debug, warn};

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Command line
    // -----------------------------------------------------------------------
    let cli = Cli::parse_or_exit();

    // -----------------------------------------------------------------------
    // 2. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 3. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level, cfg.log_format)?;
    debug!(version = env!("CARGO_PKG_VERSION"), "decrypt-installer starting");

    // -----------------------------------------------------------------------
    // 4. Blob
    // -----------------------------------------------------------------------
    let source = cli.blob_source();
    let blob = source::read_blob(&source).map_err(|e| stage_failure(e, &source))?;

    // -----------------------------------------------------------------------
    // 5. Decode + render
    // -----------------------------------------------------------------------
    let payload = pipeline::decrypt_blob(&blob, &cli.token, cli.padding_policy())
        .map_err(|e| stage_failure(e, &source))?;
    debug!(bytes = payload.len(), "writing payload");

    render::write_payload(&mut io::stdout().lock(), &payload)
        .context("failed to write payload to stdout")?;

    Ok(())
}

/// Log the failed stage and wrap the error with the blob origin.
fn stage_failure(e: DecryptError, source: &BlobSource) -> anyhow::Error {
    let stage = e.stage();
    warn!(%stage, "pipeline aborted");
    anyhow::Error::new(e).context(format!(
        "{stage} stage failed for blob from {}",
        source.describe()
    ))
}
