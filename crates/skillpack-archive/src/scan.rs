//! Cursor over a decompressed tar buffer.

use crate::block::{block_at, is_end_of_archive};
use crate::entry::ArchiveEntry;
use crate::header::{BLOCK_SIZE, padded_size, parse_header};

/// One step of the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scanned<'a> {
    /// A valid header and its payload. The payload is clamped to the buffer,
    /// so a truncated final entry yields only the bytes that exist.
    Entry {
        entry: ArchiveEntry,
        data: &'a [u8],
    },
    /// A block at `offset` that is not a header; it was skipped.
    Invalid { offset: usize },
}

/// Walks a tar buffer block by block.
///
/// The cursor is always block aligned: a header advances it by one block and
/// its payload by the size rounded up to a whole block. Iteration ends at two
/// consecutive zero blocks or when the buffer is exhausted.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    buf: &'a [u8],
    offset: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            finished: false,
        }
    }

    /// Current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Only the valid entries, without their payloads.
    pub fn entries(self) -> impl Iterator<Item = ArchiveEntry> + 'a {
        self.filter_map(|scanned| match scanned {
            Scanned::Entry { entry, .. } => Some(entry),
            Scanned::Invalid { .. } => None,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Scanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.offset >= self.buf.len() {
            return None;
        }
        if is_end_of_archive(self.buf, self.offset) {
            self.finished = true;
            return None;
        }

        let header_offset = self.offset;
        let Some(entry) = parse_header(block_at(self.buf, header_offset)) else {
            self.offset = header_offset.saturating_add(BLOCK_SIZE);
            return Some(Scanned::Invalid {
                offset: header_offset,
            });
        };

        let data_start = header_offset.saturating_add(BLOCK_SIZE);
        let size = usize::try_from(entry.size).unwrap_or(usize::MAX);
        let data_end = data_start.saturating_add(size);
        let data = &self.buf[data_start.min(self.buf.len())..data_end.min(self.buf.len())];

        self.offset = data_start.saturating_add(padded_size(size));
        Some(Scanned::Entry { entry, data })
    }
}
