//! Gzip front-end: the whole stream is inflated into memory before scanning.

use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error::{Error, Result};

pub fn is_gzip(data: &[u8]) -> bool {
    matches!(data, [0x1F, 0x8B, ..])
}

/// Inflate a gzip stream. Concatenated members are decoded in sequence.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    if !is_gzip(compressed) {
        return Err(Error::NotGzip);
    }

    let mut decoder = MultiGzDecoder::new(compressed);
    let mut tar = Vec::new();
    decoder
        .read_to_end(&mut tar)
        .map_err(|source| Error::Decompress { source })?;
    Ok(tar)
}
