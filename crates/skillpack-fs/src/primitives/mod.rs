pub mod dir;
pub mod rw;

pub use dir::ensure_dir;
pub use rw::{read_file, write_file};
