use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Create `path` and any missing ancestors.
///
/// Succeeds when the directory already exists, so concurrent writers that
/// share an ancestor never race each other into an error.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}
