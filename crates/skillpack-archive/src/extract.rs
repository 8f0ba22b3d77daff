//! Extraction of gzip-compressed USTAR archives.
//!
//! The compressed input is inflated into memory once, then scanned entry by
//! entry. Each entry is stripped, filtered and confined to the destination
//! root before anything touches the filesystem. Entries that fail any of
//! those checks are skipped without a trace; only I/O failures abort.

use std::io::Read;
use std::path::Path;

use crate::entry::{ArchiveEntry, EntryKind};
use crate::error::{Error, Result};
use crate::format;
use crate::options::{ExtractOptions, Progress};
use crate::sanitize::{SanitizedPath, canonical_root, sanitize_entry};
use crate::scan::{Scanned, Scanner};

/// Extract a `.tar.gz` byte buffer into `destination`.
///
/// The destination is created if missing. Returns the relative names of
/// every directory and file written, in archive order. Symlinks and rejected
/// entries are never included.
pub fn extract(
    compressed: &[u8],
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    let tar = format::decompress(compressed)?;
    tracing::debug!(
        compressed = compressed.len(),
        decompressed = tar.len(),
        "decompressed archive"
    );
    extract_tar(&tar, destination, options)
}

/// Read the whole compressed source, then [`extract`] it.
pub fn extract_from_reader<R: Read>(
    mut reader: R,
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    let mut compressed = Vec::new();
    reader.read_to_end(&mut compressed)?;
    extract(&compressed, destination, options)
}

/// Extract an already decompressed tar buffer into `destination`.
pub fn extract_tar(
    tar: &[u8],
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    let destination = destination.as_ref();
    skillpack_fs::ensure_dir(destination)?;
    let root = canonical_root(destination).map_err(|source| Error::Destination {
        path: destination.to_path_buf(),
        source,
    })?;
    tracing::debug!(destination = %root.display(), bytes = tar.len(), "extracting archive");

    let mut written = Vec::new();
    let mut scanner = Scanner::new(tar);

    while let Some(scanned) = scanner.next() {
        let (entry, data) = match scanned {
            Scanned::Entry { entry, data } => (entry, data),
            Scanned::Invalid { offset } => {
                tracing::trace!(offset, "skipping non-header block");
                continue;
            }
        };

        let Some(sanitized) = sanitize_entry(entry, &root, options) else {
            continue;
        };
        if !write_entry(&sanitized, &root, data)? {
            continue;
        }

        report_progress(options, scanner.offset(), tar.len(), &sanitized.entry.name);
        written.push(sanitized.entry.name);
    }

    tracing::debug!(written = written.len(), "extraction finished");
    Ok(written)
}

/// Decode every valid entry without writing anything.
///
/// Names are reported as stored in the archive: unstripped and unfiltered.
pub fn list(compressed: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let tar = format::decompress(compressed)?;
    Ok(Scanner::new(&tar).entries().collect())
}

/// Returns whether anything was written for the entry.
fn write_entry(sanitized: &SanitizedPath, root: &Path, data: &[u8]) -> Result<bool> {
    let SanitizedPath { entry, resolved } = sanitized;

    match entry.kind {
        EntryKind::Directory => {
            skillpack_fs::ensure_dir(resolved)?;
            tracing::trace!(name = %entry.name, "created directory");
            Ok(true)
        }
        // A file can never replace the destination root itself.
        EntryKind::File if resolved == root => Ok(false),
        EntryKind::File => {
            skillpack_fs::write_file(resolved, data)?;
            tracing::trace!(name = %entry.name, size = data.len(), "wrote file");
            Ok(true)
        }
        // Parsed, never materialized.
        EntryKind::Symlink { .. } => Ok(false),
    }
}

fn report_progress(options: &ExtractOptions, processed: usize, total: usize, name: &str) {
    if let Some(callback) = &options.on_progress {
        callback(Progress {
            bytes_processed: processed.min(total) as u64,
            total_bytes: total as u64,
            current_file: name.to_string(),
        });
    }
}
