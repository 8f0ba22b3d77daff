use std::io;
use std::path::PathBuf;

/// Fatal extraction failures.
///
/// Malformed headers, unknown entry types and rejected paths are not errors;
/// they are skipped during the scan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input is not gzip-compressed")]
    NotGzip,

    #[error("failed to decompress archive: {source}")]
    Decompress { source: io::Error },

    #[error("failed to prepare destination '{path}': {source}")]
    Destination { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Fs(#[from] skillpack_fs::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
