//! Stanza location and line mutation for stanza-manager.
//!
//! Idempotently edits a single named stanza (a bracket-delimited section such
//! as `[drinks]`) inside a line-oriented configuration file: adding,
//! replacing, or removing `attr = value` entries or a whole stanza, while
//! every untouched line survives byte for byte. Running the same request
//! twice produces no further change.
//!
//! The crate is layered leaves-first:
//!
//! - [`classify`]: pure matchers deciding whether a line encodes an
//!   attribute, in active or commented-out form.
//! - [`locate`]: partitions a file into before / stanza body / after.
//! - [`mutate`]: the state/exclusivity policy engine over a stanza body.
//! - [`edit`]: the in-memory pipeline combining the three.
//! - [`engine`]: applies an edit against a real file through `stanza-fs`.

pub mod classify;
pub mod diff;
pub mod edit;
pub mod engine;
pub mod error;
pub mod locate;
pub mod mutate;
pub mod request;

pub use diff::FileDiff;
pub use edit::{EditOutcome, edit_lines, split_lines};
pub use engine::{ApplyOptions, Outcome, apply};
pub use error::{Error, Result};
pub use mutate::Message;
pub use request::{EditRequest, State};
