//! Before/after capture and unified diff rendering.

use serde::Serialize;
use similar::TextDiff;

/// Full file contents before and after an edit.
///
/// Captured only when a caller explicitly asks for a before/after rendering;
/// the texts are complete regardless of whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub before: String,
    pub after: String,
}

impl FileDiff {
    /// Render a unified line diff of the captured texts.
    pub fn render_unified(&self) -> String {
        TextDiff::from_lines(&self.before, &self.after)
            .unified_diff()
            .context_radius(3)
            .header("before", "after")
            .to_string()
    }
}
