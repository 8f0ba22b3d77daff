//! End-of-archive detection.

use crate::header::BLOCK_SIZE;

const WORD: usize = size_of::<usize>();

/// Whether every byte of `block` is zero.
///
/// Compares a machine word at a time, then the remainder byte by byte.
pub fn is_zero_block(block: &[u8]) -> bool {
    let mut words = block.chunks_exact(WORD);
    let all_words_zero = words.by_ref().all(|chunk| {
        let mut word = [0u8; WORD];
        word.copy_from_slice(chunk);
        usize::from_ne_bytes(word) == 0
    });
    all_words_zero && words.remainder().iter().all(|&b| b == 0)
}

/// Whether the block at `offset` and the one after it are both zero.
///
/// A missing second block counts as zero.
pub fn is_end_of_archive(buf: &[u8], offset: usize) -> bool {
    let block = block_at(buf, offset);
    if block.is_empty() || !is_zero_block(block) {
        return false;
    }
    is_zero_block(block_at(buf, offset.saturating_add(BLOCK_SIZE)))
}

/// The block at `offset`, clamped to the buffer.
pub(crate) fn block_at(buf: &[u8], offset: usize) -> &[u8] {
    let start = offset.min(buf.len());
    let end = offset.saturating_add(BLOCK_SIZE).min(buf.len());
    &buf[start..end]
}
