//! The in-memory edit pipeline.
//!
//! Ties the locator and mutator together: normalize the trailing terminator,
//! partition around the target stanza, mutate the body, reassemble, and
//! append a brand-new stanza at end of file when the target was missing and
//! the requested state is present.

use crate::locate::{normalize_trailing_newline, partition};
use crate::mutate::{Message, assignment_line, bare_line, header_line, mutate_body};
use crate::request::{EditRequest, State, dedup_values};

/// Result of one in-memory edit pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The full updated line sequence, terminators included.
    pub lines: Vec<String>,
    /// True iff any line was rewritten, inserted, or deleted, or the trailing
    /// terminator was normalized.
    pub changed: bool,
    pub message: Message,
}

impl EditOutcome {
    /// The updated file contents as one string.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Split text into lines, each keeping its own terminator.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}

/// Apply one edit request to a line sequence.
pub fn edit_lines(lines: &[String], req: &EditRequest) -> EditOutcome {
    let mut lines = lines.to_vec();
    let mut changed = normalize_trailing_newline(&mut lines);
    let values = dedup_values(req.values.iter().cloned());

    let p = partition(&lines, req.stanza.as_deref());
    let found = p.found;
    let (body, body_changed, mut message) = if found {
        mutate_body(p.body, p.header_rows, req, &values)
    } else {
        (p.body, false, Message::Ok)
    };
    changed |= body_changed;

    let mut out = p.before;
    out.extend(body);
    out.extend(p.after);

    if !found
        && req.state == State::Present
        && let Some(name) = req.stanza.as_deref()
    {
        out.push(header_line(name));
        message = Message::StanzaAndAttrAdded;
        match req.attr.as_deref() {
            Some(attr) if !values.is_empty() => {
                for value in &values {
                    out.push(assignment_line(attr, value, req.no_extra_spaces));
                }
            }
            Some(attr) if req.allow_no_value => out.push(bare_line(attr)),
            _ => message = Message::OnlyStanzaAdded,
        }
        changed = true;
    }

    EditOutcome {
        lines: out,
        changed,
        message,
    }
}
