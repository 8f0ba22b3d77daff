use std::sync::Arc;

use crate::entry::ArchiveEntry;

/// Predicate deciding whether an entry is extracted. Sees the stripped name.
pub type EntryFilter = Arc<dyn Fn(&ArchiveEntry) -> bool + Send + Sync>;

pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

#[derive(Clone, Default)]
pub struct ExtractOptions {
    pub strip_components: usize,
    pub filter: Option<EntryFilter>,
    pub on_progress: Option<ProgressCallback>,
}

/// Reported after every entry written to disk.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    /// Scan position in the decompressed archive, past the entry's payload.
    pub bytes_processed: u64,
    /// Length of the decompressed archive.
    pub total_bytes: u64,
    /// Relative name of the entry just written.
    pub current_file: String,
}

impl ExtractOptions {
    pub fn strip_components(mut self, n: usize) -> Self {
        self.strip_components = n;
        self
    }

    pub fn filter(mut self, filter: EntryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn filter_fn(self, filter: impl Fn(&ArchiveEntry) -> bool + Send + Sync + 'static) -> Self {
        self.filter(Arc::new(filter))
    }

    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    /// Whether `entry` passes the configured filter. No filter accepts all.
    pub fn accepts(&self, entry: &ArchiveEntry) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(entry))
    }
}

impl std::fmt::Debug for ExtractOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractOptions")
            .field("strip_components", &self.strip_components)
            .field("filter", &self.filter.is_some())
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

impl Progress {
    pub fn percentage(&self) -> f32 {
        if self.total_bytes == 0 {
            0.0
        } else {
            (self.bytes_processed.min(self.total_bytes) as f32 / self.total_bytes as f32) * 100.0
        }
    }
}
