//! Edit request types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The requested end state for an attribute or stanza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// The attribute values (or the stanza) must exist.
    #[default]
    Present,
    /// The attribute values (or the stanza) must not exist.
    Absent,
}

/// A single stanza-file edit, independent of how it reaches the filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    /// Path to the stanza file; may not exist yet.
    pub path: PathBuf,
    /// Target stanza name. `None` targets the preamble before the first stanza.
    pub stanza: Option<String>,
    /// Attribute name. `None` means a whole-stanza add/remove.
    pub attr: Option<String>,
    /// Requested values, deduplicated preserving first occurrence.
    pub values: Vec<String>,
    pub state: State,
    /// Reconcile all occurrences of the attribute to exactly the requested
    /// values, instead of only adding/removing the named ones.
    pub exclusive: bool,
    /// Permit a bare `attr` line without `=` and value.
    pub allow_no_value: bool,
    /// Write `attr=value` instead of `attr = value`.
    pub no_extra_spaces: bool,
    /// Create the file (and parent directories) when missing.
    pub create: bool,
    /// Take a timestamped backup copy before replacing the file.
    pub backup: bool,
}

impl EditRequest {
    /// A request with the module defaults: present, exclusive, create.
    pub fn new(path: impl Into<PathBuf>, stanza: Option<String>) -> Self {
        Self {
            path: path.into(),
            stanza,
            attr: None,
            values: Vec::new(),
            state: State::Present,
            exclusive: true,
            allow_no_value: false,
            no_extra_spaces: false,
            create: true,
            backup: false,
        }
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attr = Some(attr.into());
        self
    }

    /// Set the requested values, deduplicating while preserving first
    /// occurrence order.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = dedup_values(values.into_iter().map(Into::into));
        self
    }

    pub fn state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Check the request is self-consistent before any file is touched.
    ///
    /// `Present` with no values requires `allow_no_value`.
    pub fn validate(&self) -> Result<()> {
        if self.state == State::Present && self.values.is_empty() && !self.allow_no_value {
            return Err(Error::ValueRequired);
        }
        Ok(())
    }
}

/// Deduplicate values preserving first-occurrence order.
pub fn dedup_values(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}
