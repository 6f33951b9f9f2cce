//! Append-only sidebar index.
//!
//! Every published page adds one `- [<description>](<url>)` line. Existing
//! lines are never rewritten, so publishing the same block twice lists it
//! twice.

use super::{Wiki, WikiError, WikiPage};
use std::{
    fs::{self, OpenOptions},
    io::Write,
};

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub relative_url: String,
}

impl SidebarEntry {
    pub fn for_page(page: &WikiPage) -> Self {
        Self {
            label: page.placement.description.clone(),
            relative_url: page.url.clone(),
        }
    }

    /// Markdown list item, without line ending.
    pub fn to_line(&self) -> String {
        format!("- [{}]({})", self.label, self.relative_url)
    }
}

/// Append `entry` to the wiki sidebar, creating the file if needed.
///
/// The line goes out in a single write; when the file does not end with a
/// newline one is prepended so entries never run together.
pub fn append(wiki: &Wiki, entry: &SidebarEntry) -> Result<(), WikiError> {
    let path = wiki.sidebar_path();
    let sidebar_err = |err| WikiError::Sidebar(path.to_path_buf(), err);

    let needs_newline = match fs::read(path) {
        Ok(existing) => existing.last().is_some_and(|&b| b != b'\n'),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
        Err(err) => return Err(sidebar_err(err)),
    };

    let mut line = String::new();
    if needs_newline {
        line.push('\n');
    }
    line.push_str(&entry.to_line());
    line.push('\n');

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(sidebar_err)?;
    file.write_all(line.as_bytes()).map_err(sidebar_err)
}
