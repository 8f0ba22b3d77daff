use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::primitives::ensure_dir;
use crate::{Error, Result};

/// A staging directory that is moved onto its destination on commit.
///
/// The staging directory lives next to the destination so the final move is
/// a same-filesystem rename. Dropping an uncommitted workspace removes it.
pub struct Workspace {
    staging: TempDir,
    destination: PathBuf,
}

impl Workspace {
    pub fn new(destination: impl AsRef<Path>) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_dir(&parent)?;

        let staging = tempfile::Builder::new()
            .prefix(".skillpack-")
            .tempdir_in(&parent)
            .map_err(|e| Error::CreateDir {
                path: parent.clone(),
                source: e,
            })?;
        // Temporary directories are created owner-only; the committed tree
        // should carry ordinary directory permissions.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o755)).map_err(
                |e| Error::CreateDir {
                    path: staging.path().to_path_buf(),
                    source: e,
                },
            )?;
        }
        tracing::trace!(staging = %staging.path().display(), "created staging directory");

        Ok(Self {
            staging,
            destination,
        })
    }

    pub fn path(&self) -> &Path {
        self.staging.path()
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Move the staged tree onto the destination.
    ///
    /// The destination must be absent or an empty directory.
    pub fn commit(self) -> Result<PathBuf> {
        let Self {
            staging,
            destination,
        } = self;

        fs::rename(staging.path(), &destination).map_err(|e| Error::Commit {
            from: staging.path().to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;
        tracing::debug!(destination = %destination.display(), "committed staged extraction");

        // The staging path no longer exists; dropping the handle is a no-op.
        drop(staging);
        Ok(destination)
    }
}
