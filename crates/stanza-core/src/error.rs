//! Error types for stanza-core

use std::path::PathBuf;

/// Result type for stanza-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying a stanza edit
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] stanza_fs::Error),

    #[error("Destination {path} does not exist")]
    MissingDestination { path: PathBuf },

    #[error("a value is required when state is 'present' unless bare attrs are allowed")]
    ValueRequired,
}
