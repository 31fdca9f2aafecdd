//! Rendering of the decompressed payload as text.

use std::borrow::Cow;
use std::io::{self, Write};

/// Decode `payload` as UTF-8, substituting U+FFFD for invalid sequences.
pub fn render(payload: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(payload)
}

/// Write the rendered payload followed by a newline, then flush.
///
/// # Errors
///
/// Returns any I/O error from `out` (for example a closed pipe).
pub fn write_payload<W: Write>(out: &mut W, payload: &[u8]) -> io::Result<()> {
    writeln!(out, "{}", render(payload))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_unchanged() {
        assert_eq!(render("héllo wörld".as_bytes()), "héllo wörld");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(render(b"ok\xFFok"), "ok\u{FFFD}ok");
        assert_eq!(render(b"\xC3"), "\u{FFFD}");
    }

    #[test]
    fn write_appends_newline() {
        let mut out = Vec::new();
        write_payload(&mut out, b"hello world").unwrap();
        assert_eq!(out, b"hello world\n");
    }

    #[test]
    fn write_empty_payload() {
        let mut out = Vec::new();
        write_payload(&mut out, b"").unwrap();
        assert_eq!(out, b"\n");
    }
}
