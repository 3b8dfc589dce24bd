//! The apply engine.
//!
//! Runs one edit request end to end: validate, read the current file, compute
//! the edit in memory, then persist through `stanza-fs`. Nothing is written
//! (and no backup is taken) unless the computed `changed` flag is true and
//! check mode is off; the replace itself is atomic, so a failure on the write
//! path leaves the original file untouched.

use std::path::PathBuf;

use tracing::debug;

use crate::diff::FileDiff;
use crate::edit::{edit_lines, split_lines};
use crate::mutate::Message;
use crate::request::EditRequest;
use crate::{Error, Result};

/// Caller-side switches that are not part of the edit request itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Compute and report, but never touch the filesystem.
    pub check_mode: bool,
    /// Capture the full before/after texts in the outcome.
    pub capture_diff: bool,
}

/// What one apply run did.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub changed: bool,
    pub message: Message,
    /// Path of the backup copy, when one was taken.
    pub backup_path: Option<PathBuf>,
    /// Before/after texts, when requested via [`ApplyOptions::capture_diff`].
    pub diff: Option<FileDiff>,
}

/// Apply an edit request against its target file.
pub fn apply(req: &EditRequest, opts: ApplyOptions) -> Result<Outcome> {
    req.validate()?;

    let exists = req.path.exists();
    if !exists && !req.create {
        return Err(Error::MissingDestination {
            path: req.path.clone(),
        });
    }

    let before = if exists {
        stanza_fs::read_text(&req.path)?
    } else {
        String::new()
    };

    let edit = edit_lines(&split_lines(&before), req);
    let after = edit.text();

    debug!(
        path = %req.path.display(),
        changed = edit.changed,
        message = %edit.message,
        "edit computed"
    );

    let mut backup_path = None;
    if edit.changed && !opts.check_mode {
        if req.backup && exists {
            backup_path = Some(stanza_fs::create_backup(&req.path)?);
        }
        stanza_fs::write_text(&req.path, &after)?;
    }

    Ok(Outcome {
        changed: edit.changed,
        message: edit.message,
        backup_path,
        diff: opts.capture_diff.then_some(FileDiff { before, after }),
    })
}
