//! Attribute line classification.
//!
//! Two matchers over a line against an attribute name: a comment-tolerant one
//! that also recognizes commented-out attribute lines, and an active-only one.
//! The mutator detects candidate lines with the tolerant matcher but only ever
//! edits active lines, and counts/deletes with the active matcher so a
//! commented-out setting is never mistaken for a live one.

use std::sync::LazyLock;

use regex::Regex;

/// A line that encodes the attribute, with whatever value it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatch {
    /// Everything after `=` and its leading whitespace; empty for a bare attr
    /// line or an empty assignment. Trailing whitespace is kept.
    pub value: String,
}

/// Matches blank lines and full-line comments.
static BLANK_OR_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*([#;].*)?$").expect("Invalid blank-or-comment regex"));

/// Compiled matchers for one attribute name.
///
/// The name is treated as a literal string, never as a pattern. Built once per
/// mutation pass.
pub struct AttrMatcher {
    matchable: Regex,
    active: Regex,
}

impl AttrMatcher {
    pub fn new(attr: &str) -> Self {
        let escaped = regex::escape(attr);
        let matchable = Regex::new(&format!(r"^[#;]?[ \t]*{escaped}[ \t]*(?:=[ \t]*(.*))?$"))
            .expect("Invalid attr pattern");
        let active = Regex::new(&format!(r"^[ \t]*{escaped}[ \t]*(?:=[ \t]*(.*))?$"))
            .expect("Invalid attr pattern");
        Self { matchable, active }
    }

    /// Test a line against the attribute, tolerating a single leading `#` or
    /// `;` comment marker.
    pub fn matches(&self, line: &str) -> Option<AttrMatch> {
        capture(&self.matchable, line)
    }

    /// Test a line against the attribute; commented-out lines never count.
    pub fn matches_active(&self, line: &str) -> Option<AttrMatch> {
        capture(&self.active, line)
    }
}

fn capture(pattern: &Regex, line: &str) -> Option<AttrMatch> {
    pattern.captures(line_content(line)).map(|caps| AttrMatch {
        value: caps.get(1).map(|m| m.as_str().to_owned()).unwrap_or_default(),
    })
}

/// A line without its terminator (`\n` or `\r\n`).
pub fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// True for blank lines and full-line `#`/`;` comments.
pub fn is_blank_or_comment(line: &str) -> bool {
    BLANK_OR_COMMENT_REGEX.is_match(line_content(line))
}
