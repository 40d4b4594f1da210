//! Where the text to scan comes from.

use anyhow::Context;
use std::io::Read;

/// Positional text, or everything readable from `stdin` when none was given.
///
/// Bytes are returned as-is; UTF-8 validation happens in the core crate so
/// that bad input surfaces as `GeoTextError::InvalidInput`.
pub fn read_input<R: Read>(text: Option<String>, mut stdin: R) -> anyhow::Result<Vec<u8>> {
    match text {
        Some(t) => Ok(t.into_bytes()),
        None => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
