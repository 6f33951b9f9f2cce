//! Per-file failures of a publish pass.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning one source file into a wiki page.
///
/// None of these abort a run on their own; the publisher records them
/// against the file and moves on.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("cannot read `{0}`")]
    ReadSource(PathBuf, #[source] std::io::Error),

    #[error("malformed tag `{tag}`: expected 2 or 3 segments, found {segments}")]
    MalformedTag { tag: String, segments: usize },

    #[error("tag `{tag}` has invalid segment `{segment}`")]
    InvalidSegment { tag: String, segment: String },

    #[error("cannot create directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("cannot write page `{0}`")]
    WritePage(PathBuf, #[source] std::io::Error),

    #[error("no free page name for `{0}` after {1} attempts")]
    NameExhausted(PathBuf, usize),

    #[error("cannot append to sidebar `{0}`")]
    Sidebar(PathBuf, #[source] std::io::Error),
}

impl WikiError {
    /// Whether the failure points at the wiki checkout rather than the source.
    ///
    /// Repeated checkout failures mean the wiki root is unusable.
    pub const fn is_checkout_failure(&self) -> bool {
        matches!(
            self,
            Self::CreateDir(..) | Self::WritePage(..) | Self::NameExhausted(..)
        )
    }
}
