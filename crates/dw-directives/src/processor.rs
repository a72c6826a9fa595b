//! Per-page post-processing pass.

use dw_meta::{Page, apply_home_overrides};

use crate::rewrite::rewrite_directives;

/// Run the full post-page pass: patch landing-page metadata, then unwrap
/// comment directives in the rendered markdown.
///
/// Called by the host once per page, after macro expansion. The returned
/// text is the page's effective markdown; the host writes it back.
///
/// # Example
///
/// ```
/// use dw_directives::process_page;
/// use dw_meta::Page;
///
/// let mut page = Page::new("Home");
/// let markdown = process_page(&mut page, "intro <!--: ::cards --> outro");
/// assert_eq!(markdown, "intro ::cards outro");
/// assert!(page.meta.contains_key("hide"));
/// ```
#[must_use]
pub fn process_page(page: &mut Page, markdown: &str) -> String {
    apply_home_overrides(page);
    rewrite_directives(markdown)
}
