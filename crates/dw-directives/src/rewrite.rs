//! Comment directive unwrapping.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `<!--: content -->`, non-greedy so the first closing marker
/// wins. `.` does not cross line breaks; the flanking `\s*` may.
static DIRECTIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--:\s*(.*?)\s*-->").expect("invalid directive regex"));

/// Replace every `<!--: ... -->` span with its trimmed inner content.
///
/// Matches are resolved independently, left to right, and the substituted
/// text is not re-matched. A directive with no closing `-->` fails to
/// match and passes through unchanged. Text without directives is returned
/// as-is.
#[must_use]
pub fn rewrite_directives(markdown: &str) -> String {
    DIRECTIVE_PATTERN
        .replace_all(markdown, |caps: &Captures<'_>| {
            let span = &caps[0];
            let content = caps[1].trim();
            tracing::debug!(directive = %span, content = %content, "Unwrapped comment directive");
            content.to_owned()
        })
        .into_owned()
}
