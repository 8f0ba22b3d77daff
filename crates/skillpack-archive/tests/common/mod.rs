//! Archive fixtures built byte by byte, so tests can produce names that
//! well-behaved tar writers refuse to emit.

#![allow(dead_code)]

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

const BLOCK: usize = 512;

#[derive(Default)]
pub struct ArchiveBuilder {
    tar: Vec<u8>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, content: &[u8]) -> Self {
        self.push_header("", name, content.len(), b'0', "");
        self.push_payload(content);
        self
    }

    pub fn file_with_prefix(mut self, prefix: &str, name: &str, content: &[u8]) -> Self {
        self.push_header(prefix, name, content.len(), b'0', "");
        self.push_payload(content);
        self
    }

    pub fn file_with_typeflag(mut self, name: &str, content: &[u8], typeflag: u8) -> Self {
        self.push_header("", name, content.len(), typeflag, "");
        self.push_payload(content);
        self
    }

    pub fn dir(mut self, name: &str) -> Self {
        self.push_header("", name, 0, b'5', "");
        self
    }

    pub fn symlink(mut self, name: &str, target: &str) -> Self {
        self.push_header("", name, 0, b'2', target);
        self
    }

    pub fn raw_block(mut self, block: [u8; BLOCK]) -> Self {
        self.tar.extend_from_slice(&block);
        self
    }

    /// The tar stream terminated by two zero blocks.
    pub fn tar(mut self) -> Vec<u8> {
        self.tar.resize(self.tar.len() + 2 * BLOCK, 0);
        self.tar
    }

    pub fn tar_gz(self) -> Vec<u8> {
        gzip(&self.tar())
    }

    fn push_header(&mut self, prefix: &str, name: &str, size: usize, typeflag: u8, link: &str) {
        let mut block = [0u8; BLOCK];
        put(&mut block, 0, name.as_bytes());
        put(&mut block, 100, b"0000644\0");
        put(&mut block, 108, b"0000000\0");
        put(&mut block, 116, b"0000000\0");
        put(&mut block, 124, format!("{size:011o}\0").as_bytes());
        put(&mut block, 136, b"00000000000\0");
        block[156] = typeflag;
        put(&mut block, 157, link.as_bytes());
        put(&mut block, 257, b"ustar\0");
        put(&mut block, 263, b"00");
        put(&mut block, 345, prefix.as_bytes());

        block[148..156].fill(b' ');
        let checksum: u32 = block.iter().map(|&b| u32::from(b)).sum();
        put(&mut block, 148, format!("{checksum:06o}\0 ").as_bytes());

        self.tar.extend_from_slice(&block);
    }

    fn push_payload(&mut self, content: &[u8]) {
        self.tar.extend_from_slice(content);
        let padding = (BLOCK - content.len() % BLOCK) % BLOCK;
        self.tar.resize(self.tar.len() + padding, 0);
    }
}

fn put(block: &mut [u8; BLOCK], offset: usize, bytes: &[u8]) {
    block[offset..offset + bytes.len()].copy_from_slice(bytes);
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}
