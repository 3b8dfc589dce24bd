//! Filesystem layer for stanza-manager
//!
//! Provides the persistence side of a stanza edit: BOM-tolerant text reads,
//! atomic temp-file-then-rename writes, and timestamped backup copies. The
//! editing core never touches the filesystem directly; it goes through this
//! crate so a torn write can never leave a half-edited file behind.

pub mod backup;
pub mod error;
pub mod io;

pub use backup::create_backup;
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
