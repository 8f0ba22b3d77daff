use std::path::Path;

use skillpack_fs::Workspace;

use crate::error::Result;
use crate::extract::extract;
use crate::options::ExtractOptions;

/// An extraction staged beside its destination, awaiting commit.
pub struct WorkspaceExtraction {
    workspace: Workspace,
    paths: Vec<String>,
}

impl WorkspaceExtraction {
    /// Move the staged tree onto the destination and return the written paths.
    pub fn commit(self) -> Result<Vec<String>> {
        self.workspace.commit()?;
        Ok(self.paths)
    }

    pub fn abort(self) {
        drop(self.workspace);
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn staging_path(&self) -> &Path {
        self.workspace.path()
    }
}

/// Extract into a staging directory next to `destination`.
///
/// Nothing appears at `destination` until [`WorkspaceExtraction::commit`];
/// a failed or aborted extraction leaves it untouched. The destination must
/// be absent or an empty directory at commit time.
pub fn extract_to_workspace(
    compressed: &[u8],
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<WorkspaceExtraction> {
    let workspace = Workspace::new(destination.as_ref())?;
    let paths = extract(compressed, workspace.path(), options)?;
    Ok(WorkspaceExtraction { workspace, paths })
}
