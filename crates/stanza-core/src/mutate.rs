//! Stanza body mutation.
//!
//! The state/exclusivity policy engine: given a stanza's body lines and an
//! edit request, produce the updated body, whether anything changed, and a
//! summary message. The policy is an ordered pipeline of steps sharing one
//! `(body, pending, ledger)` state; later steps only touch lines no earlier
//! step has rewritten.

use std::fmt;

use crate::classify::{AttrMatcher, is_blank_or_comment};
use crate::request::{EditRequest, State};

/// Summary of the most specific action a mutation pass took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Ok,
    AttrChanged,
    AttrAdded,
    StanzaRemoved,
    StanzaAndAttrAdded,
    OnlyStanzaAdded,
}

impl Message {
    pub fn as_str(&self) -> &'static str {
        match self {
            Message::Ok => "OK",
            Message::AttrChanged => "attr changed",
            Message::AttrAdded => "attr added",
            Message::StanzaRemoved => "stanza removed",
            Message::StanzaAndAttrAdded => "stanza and attr added",
            Message::OnlyStanzaAdded => "only stanza added",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn assignment_line(attr: &str, value: &str, no_extra_spaces: bool) -> String {
    if no_extra_spaces {
        format!("{attr}={value}\n")
    } else {
        format!("{attr} = {value}\n")
    }
}

pub(crate) fn bare_line(attr: &str) -> String {
    format!("{attr}\n")
}

pub(crate) fn header_line(stanza: &str) -> String {
    format!("[{stanza}]\n")
}

/// One mutation pass over a stanza body.
///
/// `header_rows` lines at the top of `body` (the stanza header, when present)
/// are protected from deletion. `values` must already be deduplicated.
pub(crate) fn mutate_body(
    body: Vec<String>,
    header_rows: usize,
    req: &EditRequest,
    values: &[String],
) -> (Vec<String>, bool, Message) {
    let ledger = vec![false; body.len()];
    let mut pass = Pass {
        body,
        ledger,
        pending: values.to_vec(),
        header_rows,
        req,
        changed: false,
        message: Message::Ok,
        bare_written: false,
    };

    if let Some(attr) = req.attr.as_deref() {
        let matcher = AttrMatcher::new(attr);
        match req.state {
            State::Present => {
                pass.rewrite_value_matches(attr, &matcher);
                if req.exclusive && !req.allow_no_value {
                    pass.reconcile_exclusive(attr, &matcher);
                }
                pass.insert_pending(attr, values.is_empty());
            }
            State::Absent => pass.delete_attr(&matcher),
        }
    } else if req.state == State::Absent {
        pass.drop_body();
    }

    (pass.body, pass.changed, pass.message)
}

/// Shared state of one mutation pass.
struct Pass<'a> {
    body: Vec<String>,
    /// Marks body lines already rewritten this pass, so no line is matched
    /// twice.
    ledger: Vec<bool>,
    /// Requested values not yet placed on a line.
    pending: Vec<String>,
    header_rows: usize,
    req: &'a EditRequest,
    changed: bool,
    message: Message,
    /// A bare attr line was (re)written in the rewrite step.
    bare_written: bool,
}

impl Pass<'_> {
    /// Replace a body line, recording whether its text actually changed.
    fn rewrite(&mut self, index: usize, newline: String) {
        let line_changed = self.body[index] != newline;
        if line_changed {
            self.changed = true;
            self.message = Message::AttrChanged;
        }
        self.body[index] = newline;
        self.ledger[index] = true;
    }

    /// Step 1: rewrite matching lines whose captured value is requested to
    /// the canonical form, consuming values first-match-wins in line order.
    ///
    /// Candidates are detected with the comment-tolerant matcher, but a
    /// commented-out line is never edited or consumed; a bare rewrite under
    /// `allow_no_value` happens at most once and ends the step.
    fn rewrite_value_matches(&mut self, attr: &str, matcher: &AttrMatcher) {
        for index in 0..self.body.len() {
            let Some(m) = matcher.matches(&self.body[index]) else {
                continue;
            };
            if matcher.matches_active(&self.body[index]).is_none() {
                continue;
            }
            if let Some(pos) = self.pending.iter().position(|v| *v == m.value) {
                let newline = if m.value.is_empty() && self.req.allow_no_value {
                    self.bare_written = true;
                    bare_line(attr)
                } else {
                    assignment_line(attr, &m.value, self.req.no_extra_spaces)
                };
                self.rewrite(index, newline);
                self.pending.remove(pos);
            } else if self.pending.is_empty() && self.req.allow_no_value && m.value.is_empty() {
                self.rewrite(index, bare_line(attr));
                self.bare_written = true;
                break;
            }
        }
    }

    /// Step 2: under exclusive reconciliation, give remaining values to
    /// untouched valueless active lines in body order, then delete every
    /// remaining untouched active occurrence bottom-up.
    fn reconcile_exclusive(&mut self, attr: &str, matcher: &AttrMatcher) {
        if !self.pending.is_empty() {
            for index in 0..self.body.len() {
                if self.ledger[index] {
                    continue;
                }
                let reusable = matcher
                    .matches_active(&self.body[index])
                    .is_some_and(|m| m.value.is_empty());
                if !reusable {
                    continue;
                }
                let value = self.pending.remove(0);
                self.rewrite(
                    index,
                    assignment_line(attr, &value, self.req.no_extra_spaces),
                );
                if self.pending.is_empty() {
                    break;
                }
            }
        }

        for index in (self.header_rows..self.body.len()).rev() {
            if !self.ledger[index] && matcher.matches_active(&self.body[index]).is_some() {
                self.body.remove(index);
                self.ledger.remove(index);
                self.changed = true;
                self.message = Message::AttrChanged;
            }
        }
    }

    /// Step 3: insert still-pending values after the last non-blank,
    /// non-comment body line, preserving the requested order. For an
    /// originally valueless request under `allow_no_value`, ensure one bare
    /// attr line unless the rewrite step already produced it.
    fn insert_pending(&mut self, attr: &str, request_was_valueless: bool) {
        if self.pending.is_empty() && !(request_was_valueless && self.req.allow_no_value) {
            return;
        }

        let mut at = self.insertion_index();
        if !self.pending.is_empty() {
            for value in std::mem::take(&mut self.pending) {
                self.body
                    .insert(at, assignment_line(attr, &value, self.req.no_extra_spaces));
                self.ledger.insert(at, true);
                at += 1;
                self.changed = true;
                self.message = Message::AttrAdded;
            }
        } else if self.req.allow_no_value && !self.bare_written {
            self.body.insert(at, bare_line(attr));
            self.ledger.insert(at, true);
            self.changed = true;
            self.message = Message::AttrAdded;
        }
    }

    /// Search backward from the end of the body for the last line that is
    /// neither blank nor a full-line comment; new entries go right after it,
    /// keeping any trailing comment/blank tail below the insertion point.
    fn insertion_index(&self) -> usize {
        for index in (self.header_rows..self.body.len()).rev() {
            if !is_blank_or_comment(&self.body[index]) {
                return index + 1;
            }
        }
        self.header_rows
    }

    /// Steps 4/4': delete active occurrences of the attribute: all of them
    /// under exclusive, only the requested values otherwise.
    fn delete_attr(&mut self, matcher: &AttrMatcher) {
        if !self.req.exclusive && self.pending.is_empty() {
            return;
        }
        let exclusive = self.req.exclusive;
        let pending = std::mem::take(&mut self.pending);
        let before_len = self.body.len();
        self.body.retain(|line| match matcher.matches_active(line) {
            Some(m) => !(exclusive || pending.contains(&m.value)),
            None => true,
        });
        self.pending = pending;
        if self.body.len() != before_len {
            self.changed = true;
            self.message = Message::AttrChanged;
        }
    }

    /// Step 5: drop the whole body, header included.
    fn drop_body(&mut self) {
        if !self.body.is_empty() {
            self.body.clear();
            self.ledger.clear();
            self.changed = true;
            self.message = Message::StanzaRemoved;
        }
    }
}
