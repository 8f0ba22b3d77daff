/// One logical item decoded from a tar header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Forward-slash separated relative path, `prefix/name` when the header
    /// carries a prefix.
    pub name: String,
    /// Declared payload length in bytes.
    pub size: u64,
    pub kind: EntryKind,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, size: u64, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            size,
            kind,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    pub fn is_symlink(&self) -> bool {
        matches!(self.kind, EntryKind::Symlink { .. })
    }

    pub fn link_target(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Symlink { target } => Some(target),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink { target: String },
}
