//! Code snippet include blocks for Docweave pages.
//!
//! This crate generates the markdown fragments that embed external source
//! files into rendered pages. A fragment is a fenced, line-numbered code
//! block carrying an inclusion marker (`--8<-- "path"`) that a downstream
//! file-inclusion extension resolves while building the page. Fragments can
//! optionally be wrapped in a tab widget (`/// tab | label` ... `///`) so
//! that several files render as selectable tabs.
//!
//! Rendering is pure string templating: no file here is read or validated.
//! Missing paths surface later, from the inclusion extension.
//!
//! # Example
//!
//! ```
//! use dw_snippets::Snippet;
//!
//! let block = Snippet::new("docs/samples/todo/app.ts").tabbed(true).render();
//! assert!(block.starts_with("/// tab | app.ts"));
//! assert!(block.contains("--8<-- \"docs/samples/todo/app.ts\""));
//! ```

mod folder;
mod snippet;

pub use folder::{SNIPPET_EXTENSION, render_folder};
pub use snippet::{DEFAULT_LANGUAGE, Snippet};
