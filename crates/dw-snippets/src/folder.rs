//! Folder-level snippet aggregation.
//!
//! Renders one tabbed snippet per matching file directly inside a folder,
//! so a sample project's sources show up as one tab group per page.

use std::fs;
use std::path::{Path, PathBuf};

use crate::snippet::Snippet;

/// File extension matched when aggregating a folder.
pub const SNIPPET_EXTENSION: &str = "ts";

/// Render tabbed snippets for every top-level [`SNIPPET_EXTENSION`] file in
/// `folder`, joined with a blank line.
///
/// Matches are sorted by path, so output ordering is independent of
/// filesystem enumeration order. Returns an empty string when the folder
/// has no matching files or cannot be listed. Subdirectories are not
/// descended into.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use dw_snippets::render_folder;
///
/// let blocks = render_folder(Path::new("docs/samples/todo"));
/// ```
#[must_use]
pub fn render_folder(folder: &Path) -> String {
    let Ok(entries) = fs::read_dir(folder) else {
        tracing::debug!(folder = %folder.display(), "Folder not listable, no snippets rendered");
        return String::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == SNIPPET_EXTENSION))
        .collect();
    paths.sort();

    tracing::debug!(folder = %folder.display(), count = paths.len(), "Rendering folder snippets");

    paths
        .iter()
        .map(|path| {
            Snippet::new(path.to_string_lossy().into_owned())
                .tabbed(true)
                .render()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
