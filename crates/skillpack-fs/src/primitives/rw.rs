use std::fs;
use std::io::Write;
use std::path::Path;

use crate::primitives::ensure_dir;
use crate::{Error, Result};

/// Write `content` to `path`, creating the parent directory chain first.
///
/// An existing file at `path` is truncated and replaced.
pub fn write_file(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut file = fs::File::create(path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Read back a file written by [`write_file`], for callers inspecting an
/// extracted or staged tree.
///
/// Failures carry the offending path as [`Error::Read`].
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}
