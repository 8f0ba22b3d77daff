//! Per-entry path policy: component stripping, filtering and zip-slip
//! containment.
//!
//! Rejection is expressed as `None`. Hostile archives are expected input, so
//! nothing here reports an error.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::entry::ArchiveEntry;
use crate::options::ExtractOptions;

/// An accepted entry and the location it will be written to.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    /// The entry with its name already stripped.
    pub entry: ArchiveEntry,
    /// Absolute target inside the destination root.
    pub resolved: PathBuf,
}

/// Run the full policy for one entry against a canonical `root`.
///
/// Order: strip components, apply the filter to the stripped entry, reject
/// absolute names, then check the resolved target stays inside `root`.
pub fn sanitize_entry(
    entry: ArchiveEntry,
    root: &Path,
    options: &ExtractOptions,
) -> Option<SanitizedPath> {
    let name = strip_components(&entry.name, options.strip_components)?;
    let entry = entry.with_name(name);

    if !options.accepts(&entry) {
        return None;
    }

    let resolved = resolve_in_root(&entry.name, root)?;
    Some(SanitizedPath { entry, resolved })
}

/// Canonical form of the destination root. The directory must exist.
pub fn canonical_root(destination: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(destination)
}

/// Drop the first `count` `/`-separated components of `name`.
///
/// Every segment counts, including `.` and empty ones, the way
/// `tar --strip-components` does, so `./repo/a.txt` stripped by one is
/// `repo/a.txt`. Returns `None` when no non-empty segment would remain.
pub fn strip_components(name: &str, count: usize) -> Option<String> {
    if count == 0 {
        return Some(name.to_string());
    }

    let remaining: Vec<&str> = name.split('/').skip(count).collect();
    if remaining.iter().all(|part| part.is_empty()) {
        return None;
    }
    Some(remaining.join("/"))
}

/// Resolve a relative entry name under `root`, or `None` if it would land
/// outside it.
///
/// `root` must already be canonical (see [`canonical_root`]). The candidate
/// is normalized lexically, then its deepest existing ancestor is
/// canonicalized so symlinks already present under the root are followed
/// before the containment check.
pub fn resolve_in_root(name: &str, root: &Path) -> Option<PathBuf> {
    let relative = Path::new(name);
    if relative.is_absolute() || relative.has_root() {
        return None;
    }
    if relative
        .components()
        .any(|c| matches!(c, Component::Prefix(_)))
    {
        return None;
    }

    let candidate = resolve_existing(&normalize_path(&root.join(relative)));
    is_within(&candidate, root).then_some(candidate)
}

/// `candidate` equals `root` or lies beneath it. Comparison is per path
/// component, so `/dest-other` is not inside `/dest`.
fn is_within(candidate: &Path, root: &Path) -> bool {
    candidate == root || candidate.starts_with(root)
}

/// Resolve `.` and `..` without touching the filesystem. `..` never climbs
/// above the path's root.
fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::CurDir => {}
            Component::Normal(part) => result.push(part),
            Component::RootDir | Component::Prefix(_) => result.push(component.as_os_str()),
        }
    }

    result
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
fn resolve_existing(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut tail = Vec::new();

    loop {
        if let Ok(resolved) = fs::canonicalize(existing) {
            return tail
                .iter()
                .rev()
                .fold(resolved, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name);
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}
