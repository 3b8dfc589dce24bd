//! stanza-manager CLI
//!
//! The command-line interface for editing stanza-style configuration files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;
use stanza_core::{EditRequest, State};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Set {
            target,
            non_exclusive,
            allow_no_value,
            no_extra_spaces,
            no_create,
            backup,
            output,
        } => {
            let mut req = EditRequest::new(target.path, target.stanza).values(target.values);
            req.attr = target.attr;
            req.exclusive = !non_exclusive;
            req.allow_no_value = allow_no_value;
            req.no_extra_spaces = no_extra_spaces;
            req.create = !no_create;
            req.backup = backup;
            commands::run_edit(&req, &output)
        }
        Commands::Remove {
            target,
            non_exclusive,
            backup,
            output,
        } => {
            let mut req = EditRequest::new(target.path, target.stanza)
                .values(target.values)
                .state(State::Absent);
            req.attr = target.attr;
            req.exclusive = !non_exclusive;
            req.backup = backup;
            commands::run_edit(&req, &output)
        }
    }
}
