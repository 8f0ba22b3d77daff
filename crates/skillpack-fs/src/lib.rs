//! Filesystem primitives used while unpacking skill archives.
//!
//! - `primitives/` - idempotent directory creation and file writes
//! - `workspace.rs` - staging directory with commit-by-rename

mod error;
pub mod primitives;
mod workspace;

pub use error::{Error, Result};
pub use primitives::{ensure_dir, read_file, write_file};
pub use workspace::Workspace;
