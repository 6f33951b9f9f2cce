//! Markdown page rendering and placement on disk.
//!
//! A block tagged `wiki/go/http/request-routing` becomes
//! `<pages>/go/http/request-routing-<abc>.md`:
//!
//! ````markdown
//! # Request Routing
//!
//! ```go
//! ...block body...
//! ```
//! ````

use super::{Placement, TaggedBlock, Wiki, WikiError};
use crate::utils::random::random_lowercase;
use std::{
    fs::{self, File, OpenOptions},
    io::{self, ErrorKind, Write},
    path::PathBuf,
};

/// Length of the random file name suffix.
pub const SUFFIX_LEN: usize = 3;

/// Suffixes drawn before giving up on a free file name.
const MAX_NAME_ATTEMPTS: usize = 16;

/// A page written to the wiki checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiPage {
    /// Absolute path of the markdown file.
    pub path: PathBuf,
    /// Path relative to the wiki root, used for sidebar links.
    pub url: String,
    pub placement: Placement,
}

/// Render a block as a markdown document.
///
/// The begin-tag line is replaced by a code fence tagged with the category.
pub fn render(placement: &Placement, block: &TaggedBlock) -> String {
    let mut doc = format!("# {}\n\n```{}\n", placement.heading(), placement.category);
    for line in block.body() {
        doc.push_str(line);
        doc.push('\n');
    }
    doc.push_str("```\n");
    doc
}

/// Render `block` and write it under a fresh, randomly suffixed name.
pub fn write_page(
    wiki: &Wiki,
    placement: &Placement,
    block: &TaggedBlock,
) -> Result<WikiPage, WikiError> {
    write_page_with(wiki, placement, block, || random_lowercase(SUFFIX_LEN))
}

/// Like [`write_page`], drawing suffixes from `next_suffix`.
///
/// Existing files are never overwritten: a taken name draws a new suffix.
pub fn write_page_with(
    wiki: &Wiki,
    placement: &Placement,
    block: &TaggedBlock,
    next_suffix: impl FnMut() -> String,
) -> Result<WikiPage, WikiError> {
    write_page_using(wiki, placement, block, next_suffix, |file, content| {
        file.write_all(content)?;
        file.sync_all()
    })
}

/// Write the page through `write`, which receives the freshly created file.
fn write_page_using(
    wiki: &Wiki,
    placement: &Placement,
    block: &TaggedBlock,
    mut next_suffix: impl FnMut() -> String,
    mut write: impl FnMut(&mut File, &[u8]) -> io::Result<()>,
) -> Result<WikiPage, WikiError> {
    let category_dir = wiki.pages_dir().join(&placement.category);
    let dir = match &placement.module {
        Some(module) => category_dir.join(module),
        None => category_dir,
    };
    fs::create_dir_all(&dir).map_err(|err| WikiError::CreateDir(dir.clone(), err))?;

    let content = render(placement, block);

    for _ in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(format!("{}-{}.md", placement.description, next_suffix()));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(WikiError::WritePage(path, err)),
        };

        let written = write(&mut file, content.as_bytes());
        drop(file);

        if let Err(err) = written {
            // A page that was not fully written must not survive.
            let _ = fs::remove_file(&path);
            return Err(WikiError::WritePage(path, err));
        }

        let url = wiki
            .relative_url(&path)
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        return Ok(WikiPage {
            path,
            url,
            placement: placement.clone(),
        });
    }

    Err(WikiError::NameExhausted(
        wiki.pages_dir()
            .join(&placement.category)
            .join(placement.subpath()),
        MAX_NAME_ATTEMPTS,
    ))
}
