//! Single-file snippet rendering.

use std::path::Path;

/// Language token used when none is specified.
pub const DEFAULT_LANGUAGE: &str = "typescript";

/// A request to embed one source file as a fenced code block.
///
/// Fields are public so callers can use struct update syntax; the `with_*`
/// builders cover the common cases.
///
/// # Example
///
/// ```
/// use dw_snippets::Snippet;
///
/// let block = Snippet::new("src/app.ts")
///     .with_section("bootstrap")
///     .render();
/// assert!(block.contains("--8<-- \"src/app.ts:bootstrap\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    /// Path to the file, emitted verbatim into the inclusion marker.
    pub path: String,
    /// Wrap the block in a tab widget labeled with the file name.
    pub tabbed: bool,
    /// Language token for the fence line. `None` suppresses highlighting.
    pub language: Option<String>,
    /// Named sub-range of the file to include instead of the whole file.
    pub section: Option<String>,
}

impl Snippet {
    /// Create a snippet for `path` with default settings: untabbed,
    /// [`DEFAULT_LANGUAGE`], whole file.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tabbed: false,
            language: Some(DEFAULT_LANGUAGE.to_owned()),
            section: None,
        }
    }

    /// Set whether the block is wrapped in a tab widget.
    #[must_use]
    pub fn tabbed(mut self, tabbed: bool) -> Self {
        self.tabbed = tabbed;
        self
    }

    /// Set the language token for the fence line.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Drop the language token, disabling syntax highlighting.
    #[must_use]
    pub fn without_language(mut self) -> Self {
        self.language = None;
        self
    }

    /// Include only the named section of the file.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Render the markdown fragment.
    ///
    /// The output is five lines plus a trailing newline: tab opener (or an
    /// empty line), fence opener with `linenums="1"`, the inclusion marker,
    /// fence closer, tab closer (or an empty line). The tab label is the
    /// file name, regardless of directory depth.
    #[must_use]
    pub fn render(&self) -> String {
        let label = Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path);
        let language = self.language.as_deref().unwrap_or("");
        let target = match &self.section {
            Some(section) => format!("{}:{section}", self.path),
            None => self.path.clone(),
        };

        let tab_open = if self.tabbed {
            format!("/// tab | {label}")
        } else {
            String::new()
        };
        let tab_close = if self.tabbed { "///" } else { "" };

        format!("{tab_open}\n```{language} linenums=\"1\"\n--8<-- \"{target}\"\n```\n{tab_close}\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_defaults() {
        let block = Snippet::new("src/app.ts").render();
        assert_eq!(
            block,
            "\n```typescript linenums=\"1\"\n--8<-- \"src/app.ts\"\n```\n\n"
        );
    }

    #[test]
    fn test_render_tabbed_wraps_in_tab_markers() {
        let block = Snippet::new("docs/samples/todo/app.ts").tabbed(true).render();
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "/// tab | app.ts");
        assert_eq!(lines[lines.len() - 1], "///");
    }

    #[test]
    fn test_render_untabbed_has_empty_tab_lines() {
        let block = Snippet::new("app.ts").render();
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[lines.len() - 1], "");
        assert!(block.ends_with("```\n\n"));
        assert!(!block.contains("///"));
    }

    #[test]
    fn test_tab_label_is_file_name_regardless_of_depth() {
        let block = Snippet::new("docs/samples/nested/deeper/index.ts")
            .tabbed(true)
            .render();
        assert!(block.starts_with("/// tab | index.ts\n"));
    }

    #[test]
    fn test_render_with_section() {
        let block = Snippet::new("src/app.ts").with_section("setup").render();
        assert!(block.contains("--8<-- \"src/app.ts:setup\"\n"));
    }

    #[test]
    fn test_render_with_language_override() {
        let block = Snippet::new("schema.sql").with_language("sql").render();
        assert!(block.contains("```sql linenums=\"1\"\n"));
    }

    #[test]
    fn test_render_without_language() {
        let block = Snippet::new("notes.txt").without_language().render();
        assert!(block.contains("``` linenums=\"1\"\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let snippet = Snippet::new("a/b/c.ts").tabbed(true).with_section("s");
        assert_eq!(snippet.render(), snippet.render());
    }

    #[test]
    fn test_path_emitted_verbatim() {
        let block = Snippet::new("./weird//path/app.ts").render();
        assert!(block.contains("--8<-- \"./weird//path/app.ts\""));
    }
}
