//! Timestamped backup copies
//!
//! A backup is a plain sibling copy of the target file stamped with the UTC
//! creation time, taken immediately before an atomic replace so the original
//! contents can be recovered after a bad edit.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{Error, Result};

/// Create a timestamped backup copy of `path` next to the original.
///
/// Returns the path of the backup file, named `<file>.<UTC timestamp>.bak`.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!(
        "{}.{}.bak",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        stamp
    );
    let backup_path = path.with_file_name(backup_name);

    fs::copy(path, &backup_path).map_err(|e| Error::io(path, e))?;

    tracing::debug!(
        original = %path.display(),
        backup = %backup_path.display(),
        "backup created"
    );

    Ok(backup_path)
}
