//! Stanza location.
//!
//! Splits a file's line sequence into the region before the target stanza,
//! the stanza body itself, and everything after it. The scan runs over a
//! guarded view of the sequence bracketed by two synthetic lines (a header
//! that cannot collide with a real stanza name on top, an unterminated `[`
//! token at the bottom) so the boundary walk needs no first/last special
//! cases. The guards never appear in the returned regions.

use crate::classify::line_content;

/// Stanza name used for the synthetic top guard and for preamble targeting.
/// Long enough that no real configuration stanza collides with it.
pub(crate) const GUARD_STANZA_NAME: &str = "f54c39d0e1a7b82c6d4f90e3a5b17c28d96f0a4b";

/// A file partitioned around one stanza.
///
/// `before + body + after` reconstructs the input sequence exactly. When the
/// stanza exists, `body` starts at its header line and `header_rows` is 1;
/// for the preamble (no stanza requested) `body` has no header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub before: Vec<String>,
    pub body: Vec<String>,
    pub after: Vec<String>,
    /// False only when a named stanza was not found in the file.
    pub found: bool,
    /// Number of leading header lines in `body` (0 or 1).
    pub header_rows: usize,
}

/// Append a terminator to a final unterminated line.
///
/// Returns true when the sequence was modified; this alone is a reportable
/// change. An empty sequence stays empty.
pub fn normalize_trailing_newline(lines: &mut [String]) -> bool {
    if let Some(last) = lines.last_mut()
        && !last.ends_with('\n')
    {
        last.push('\n');
        return true;
    }
    false
}

/// Partition `lines` around the named stanza, or around the top-of-file
/// preamble when `stanza` is `None`.
pub fn partition(lines: &[String], stanza: Option<&str>) -> Partition {
    let target = stanza.unwrap_or(GUARD_STANZA_NAME);
    let header = format!("[{target}]");
    let top_guard = format!("[{GUARD_STANZA_NAME}]");

    let guarded: Vec<&str> = std::iter::once(top_guard.as_str())
        .chain(lines.iter().map(String::as_str))
        .chain(std::iter::once("["))
        .collect();

    let mut within = false;
    let mut start = 0usize;
    let mut end = 0usize;
    for (index, line) in guarded.iter().enumerate() {
        if line_content(line) == header {
            within = true;
            start = index;
        } else if line.starts_with('[') && within {
            end = index;
            break;
        }
    }

    if !within {
        return Partition {
            before: Vec::new(),
            body: Vec::new(),
            after: lines.to_vec(),
            found: false,
            header_rows: 0,
        };
    }

    // Translate guarded indices back onto the real sequence; start == 0 only
    // when the synthetic header matched, i.e. the preamble case.
    let body_start = start.saturating_sub(1);
    let body_end = end - 1;
    Partition {
        before: lines[..body_start].to_vec(),
        body: lines[body_start..body_end].to_vec(),
        after: lines[body_end..].to_vec(),
        found: true,
        header_rows: usize::from(start > 0),
    }
}
