//! Hand-built USTAR blocks for unit tests.

use crate::header::{
    BLOCK_SIZE, LINKNAME_OFFSET, MAGIC_OFFSET, NAME_OFFSET, PREFIX_OFFSET, SIZE_OFFSET,
    TYPEFLAG_OFFSET,
};

pub(crate) fn ustar_block(prefix: &str, name: &str, size: u64, typeflag: u8, link: &str) -> Vec<u8> {
    let mut block = vec![0u8; BLOCK_SIZE];
    block[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name.as_bytes());
    let size = format!("{size:011o}\0");
    block[SIZE_OFFSET..SIZE_OFFSET + 12].copy_from_slice(size.as_bytes());
    block[TYPEFLAG_OFFSET] = typeflag;
    block[LINKNAME_OFFSET..LINKNAME_OFFSET + link.len()].copy_from_slice(link.as_bytes());
    block[MAGIC_OFFSET..MAGIC_OFFSET + 6].copy_from_slice(b"ustar\0");
    block[PREFIX_OFFSET..PREFIX_OFFSET + prefix.len()].copy_from_slice(prefix.as_bytes());
    block
}

pub(crate) fn file_block(name: &str, size: u64) -> Vec<u8> {
    ustar_block("", name, size, b'0', "")
}

/// Header, padded payload and the two-block terminator.
pub(crate) fn archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut tar = Vec::new();
    for (name, data) in entries {
        tar.extend(file_block(name, data.len() as u64));
        tar.extend_from_slice(data);
        let padding = (BLOCK_SIZE - data.len() % BLOCK_SIZE) % BLOCK_SIZE;
        tar.resize(tar.len() + padding, 0);
    }
    tar.resize(tar.len() + 2 * BLOCK_SIZE, 0);
    tar
}
