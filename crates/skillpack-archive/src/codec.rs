//! Fixed-width ASCII fields of a tar header block.
//!
//! Reads are clamped to the block, so a short or truncated block degrades to
//! empty fields instead of panicking.

/// Borrow `len` bytes at `offset`, clamped to the end of `block`.
fn field(block: &[u8], offset: usize, len: usize) -> &[u8] {
    let start = offset.min(block.len());
    let end = offset.saturating_add(len).min(block.len());
    &block[start..end]
}

/// Read a string field, truncated at the first NUL byte.
///
/// Non UTF-8 bytes are replaced rather than rejected.
pub fn read_string(block: &[u8], offset: usize, len: usize) -> String {
    let raw = field(block, offset, len);
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Read an octal number field.
///
/// Writers pad these with spaces or NULs and some leave them blank, so an
/// empty or unparseable field reads as zero.
pub fn read_octal(block: &[u8], offset: usize, len: usize) -> u64 {
    let text = read_string(block, offset, len);
    u64::from_str_radix(text.trim(), 8).unwrap_or(0)
}
