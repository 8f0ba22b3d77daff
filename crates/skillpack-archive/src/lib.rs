//! Gzip-compressed USTAR archive decoding with zip-slip safe extraction.
//!
//! # Architecture
//!
//! - `codec.rs` - Fixed-width string and octal header fields
//! - `header.rs` - Header block layout and parsing
//! - `block.rs` - Zero-block and end-of-archive detection
//! - `scan.rs` - Block-aligned cursor over the decompressed archive
//! - `sanitize.rs` - Component stripping, filtering and root containment
//! - `extract.rs` - Extraction entry points
//! - `format.rs` - Gzip detection and decompression
//! - `workspace.rs` - Staged extraction with commit

pub use entry::{ArchiveEntry, EntryKind};
pub use error::{Error, Result};
pub use extract::{extract, extract_from_reader, extract_tar, list};
pub use options::{EntryFilter, ExtractOptions, Progress, ProgressCallback};
pub use sanitize::SanitizedPath;
pub use scan::{Scanned, Scanner};
pub use workspace::{WorkspaceExtraction, extract_to_workspace};

pub mod block;
pub mod codec;
pub mod entry;
mod error;
pub mod extract;
pub mod format;
pub mod header;
pub mod options;
pub mod sanitize;
pub mod scan;
mod workspace;

#[cfg(test)]
mod testutil;
