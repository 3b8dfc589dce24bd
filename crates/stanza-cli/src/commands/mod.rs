//! Command implementations for stanza-cli

pub mod edit;

pub use edit::run_edit;
