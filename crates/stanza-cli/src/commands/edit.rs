//! The edit command: apply one request and report the result.

use colored::Colorize;
use serde_json::json;

use stanza_core::{ApplyOptions, EditRequest, apply};

use crate::cli::OutputOpts;
use crate::error::{CliError, Result};

/// Apply `req` against its target file and report to stdout.
pub fn run_edit(req: &EditRequest, output: &OutputOpts) -> Result<()> {
    if req.attr.is_none() && !req.values.is_empty() {
        return Err(CliError::user("--value requires --attr"));
    }

    let opts = ApplyOptions {
        check_mode: output.dry_run,
        capture_diff: output.diff,
    };
    let outcome = apply(req, opts)?;

    if output.json {
        let mut doc = json!({
            "changed": outcome.changed,
            "msg": outcome.message.to_string(),
            "path": &req.path,
        });
        if let Some(backup) = &outcome.backup_path {
            doc["backup_file"] = json!(backup);
        }
        if let Some(diff) = &outcome.diff {
            doc["diff"] = json!({ "before": diff.before, "after": diff.after });
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if let Some(diff) = &outcome.diff {
        let rendered = diff.render_unified();
        if !rendered.is_empty() {
            print!("{rendered}");
        }
    }

    let status = if outcome.changed {
        "changed".yellow().bold()
    } else {
        "ok".green().bold()
    };
    println!("{} {} ({})", status, req.path.display(), outcome.message);

    if let Some(backup) = &outcome.backup_path {
        println!("backup written to {}", backup.display());
    }
    if output.dry_run && outcome.changed {
        println!("{}", "dry run: no changes written".dimmed());
    }

    Ok(())
}
