//! Wiki page generation from tagged source blocks.
//!
//! # Pipeline
//!
//! ```text
//! source file ──► scanner ──► tag ──► page ──► sidebar
//!                 TaggedBlock Placement WikiPage  "- [desc](url)"
//! ```
//!
//! Everything here works on a local wiki checkout described by [`Wiki`];
//! cloning, committing and pushing the checkout lives in `deploy`.

pub mod error;
pub mod page;
pub mod scanner;
pub mod sidebar;
pub mod tag;

pub use error::WikiError;
pub use page::WikiPage;
pub use scanner::TaggedBlock;
pub use tag::Placement;

use crate::config::WikiConfig;
use std::path::{Path, PathBuf};

/// Layout of a local wiki checkout.
///
/// Built once per run and passed to every component instead of holding the
/// checkout location in process-wide state.
#[derive(Debug, Clone)]
pub struct Wiki {
    root: PathBuf,
    pages: PathBuf,
    sidebar: PathBuf,
}

impl Wiki {
    /// Wiki rooted at `root` with the default `pages/` and `_sidebar.md` layout.
    #[cfg(test)]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            pages: root.join("pages"),
            sidebar: root.join("_sidebar.md"),
            root,
        }
    }

    /// Wiki rooted at `root` using the layout from `[wiki]`.
    pub fn with_layout(root: impl Into<PathBuf>, config: &WikiConfig) -> Self {
        let root = root.into();
        Self {
            pages: root.join(&config.pages),
            sidebar: root.join(&config.sidebar),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one subdirectory per category.
    pub fn pages_dir(&self) -> &Path {
        &self.pages
    }

    pub fn sidebar_path(&self) -> &Path {
        &self.sidebar
    }

    /// Path of `path` relative to the wiki root, always `/`-separated.
    ///
    /// Returns `None` for paths outside the checkout.
    pub fn relative_url(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }
}
