//! USTAR header block layout and parsing.

use crate::codec::{read_octal, read_string};
use crate::entry::{ArchiveEntry, EntryKind};

pub const BLOCK_SIZE: usize = 512;

pub const NAME_OFFSET: usize = 0;
pub const NAME_LEN: usize = 100;
pub const SIZE_OFFSET: usize = 124;
pub const SIZE_LEN: usize = 12;
pub const TYPEFLAG_OFFSET: usize = 156;
pub const LINKNAME_OFFSET: usize = 157;
pub const LINKNAME_LEN: usize = 100;
pub const MAGIC_OFFSET: usize = 257;
pub const MAGIC_LEN: usize = 6;
pub const PREFIX_OFFSET: usize = 345;
pub const PREFIX_LEN: usize = 155;

const MAGIC: &str = "ustar";

const TYPE_DIRECTORY: u8 = b'5';
const TYPE_SYMLINK: u8 = b'2';

/// Parse one header block.
///
/// Returns `None` when the block is not a USTAR header: the magic field does
/// not start with `ustar` or the name is empty. Numeric fields that fail to
/// parse read as zero, and unknown type flags are treated as regular files.
pub fn parse_header(block: &[u8]) -> Option<ArchiveEntry> {
    let magic = read_string(block, MAGIC_OFFSET, MAGIC_LEN);
    if !magic.starts_with(MAGIC) {
        return None;
    }

    let name = read_string(block, NAME_OFFSET, NAME_LEN);
    let prefix = read_string(block, PREFIX_OFFSET, PREFIX_LEN);
    let name = if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    };
    if name.is_empty() {
        return None;
    }

    let size = read_octal(block, SIZE_OFFSET, SIZE_LEN);
    let typeflag = block.get(TYPEFLAG_OFFSET).copied().unwrap_or(0);

    let kind = match typeflag {
        TYPE_DIRECTORY => EntryKind::Directory,
        TYPE_SYMLINK => EntryKind::Symlink {
            target: read_string(block, LINKNAME_OFFSET, LINKNAME_LEN),
        },
        // '0', the legacy NUL flag and anything unrecognised.
        _ => EntryKind::File,
    };

    Some(ArchiveEntry::new(name, size, kind))
}

/// Payload length rounded up to the next block boundary.
pub fn padded_size(size: usize) -> usize {
    size.div_ceil(BLOCK_SIZE).saturating_mul(BLOCK_SIZE)
}
