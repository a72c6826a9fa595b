//! Page model and metadata overrides for Docweave.
//!
//! The host build framework owns page state; this crate defines the
//! [`Page`] shape it hands over (a title plus an arbitrary-valued metadata
//! mapping) and [`apply_home_overrides`], the per-page mutation that hides
//! navigation chrome and excludes the landing page from search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Title that marks the site's landing page.
pub const HOME_TITLE: &str = "Home";

/// A page as seen by post-processing hooks.
///
/// `title` is read-only from this crate's perspective; `meta` is the
/// mutable key/value store the rendering theme consumes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Display title of the page.
    pub title: String,

    /// Page metadata consumed by the rendering theme.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, serde_json::Value>,
}

impl Page {
    /// Create a page with the given title and empty metadata.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: HashMap::new(),
        }
    }
}

/// Apply landing-page metadata overrides.
///
/// When the title is exactly [`HOME_TITLE`], sets `meta["hide"]` to
/// `["toc", "navigation"]` and `meta["search"]` to `{"exclude": true}`.
/// Any other title is left untouched. Idempotent.
///
/// # Example
///
/// ```
/// use dw_meta::{Page, apply_home_overrides};
///
/// let mut page = Page::new("Home");
/// apply_home_overrides(&mut page);
/// assert_eq!(page.meta["search"]["exclude"], true);
/// ```
pub fn apply_home_overrides(page: &mut Page) {
    if page.title != HOME_TITLE {
        return;
    }

    tracing::debug!(title = %page.title, "Applying landing page metadata overrides");

    page.meta.insert("hide".to_owned(), json!(["toc", "navigation"]));
    page.meta.insert("search".to_owned(), json!({ "exclude": true }));
}
