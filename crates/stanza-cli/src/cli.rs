//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// stanza - tweak individual settings in stanza-style configuration files
#[derive(Parser, Debug)]
#[command(name = "stanza")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Ensure attribute values (or a whole stanza) are present
    ///
    /// Examples:
    ///   stanza set -p /etc/conf -s drinks -a fav -V lemonade
    ///   stanza set -p /etc/conf -s drinks -a beverage -V coke -V pepsi
    ///   stanza set -p /etc/conf -s drinks            # add the header only
    Set {
        #[command(flatten)]
        target: Target,

        /// Only add the given values; other values of the attribute are kept
        #[arg(long)]
        non_exclusive: bool,

        /// Permit a bare attr line without '=' and value
        #[arg(long)]
        allow_no_value: bool,

        /// Write 'attr=value' without spaces around '='
        #[arg(long)]
        no_extra_spaces: bool,

        /// Fail when the file does not exist instead of creating it
        #[arg(long)]
        no_create: bool,

        /// Take a timestamped backup before replacing the file
        #[arg(long)]
        backup: bool,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Ensure attribute values (or a whole stanza) are absent
    ///
    /// Examples:
    ///   stanza remove -p /etc/conf -s drinks -a fav       # drop all values
    ///   stanza remove -p /etc/conf -s drinks -a fav -V cola --non-exclusive
    ///   stanza remove -p /etc/conf -s drinks              # drop the stanza
    Remove {
        #[command(flatten)]
        target: Target,

        /// Only remove the given values; other values of the attribute are kept
        #[arg(long)]
        non_exclusive: bool,

        /// Take a timestamped backup before replacing the file
        #[arg(long)]
        backup: bool,

        #[command(flatten)]
        output: OutputOpts,
    },
}

/// What to edit
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Path to the stanza file
    #[arg(short, long)]
    pub path: PathBuf,

    /// Stanza name; omit to target the preamble before the first stanza
    #[arg(short, long)]
    pub stanza: Option<String>,

    /// Attribute name; omit for whole-stanza operations
    #[arg(short, long)]
    pub attr: Option<String>,

    /// Attribute value; repeat the flag for multiple values
    #[arg(short = 'V', long = "value")]
    pub values: Vec<String>,
}

/// How to report the result
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OutputOpts {
    /// Preview the change without applying it
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff of the change
    #[arg(long)]
    pub diff: bool,

    /// Output the result as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
