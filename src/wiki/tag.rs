//! Begin-tag parsing into page placement.
//!
//! | Tag                     | category | module | description |
//! |-------------------------|----------|--------|-------------|
//! | `wiki/go/routing`       | `go`     | -      | `routing`   |
//! | `wiki/go/http/routing`  | `go`     | `http` | `routing`   |

use super::{WikiError, scanner::BEGIN_TAG};
use std::path::PathBuf;

/// Where a tagged block lands in the wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// First segment; names the page directory and the code fence language.
    pub category: String,
    pub module: Option<String>,
    pub description: String,
}

impl Placement {
    /// Parse the begin-tag line of a block.
    pub fn parse(tag_line: &str) -> Result<Self, WikiError> {
        let path = BEGIN_TAG
            .captures(tag_line)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str());

        let segments: Vec<&str> = path.split('/').collect();
        let malformed = || WikiError::MalformedTag {
            tag: tag_line.trim().to_owned(),
            segments: segments.len(),
        };

        if segments.iter().any(|s| s.is_empty()) {
            return Err(malformed());
        }
        // Segments become directory and file names below the pages directory.
        if let Some(segment) = segments
            .iter()
            .find(|s| matches!(**s, "." | "..") || s.contains('\\'))
        {
            return Err(WikiError::InvalidSegment {
                tag: tag_line.trim().to_owned(),
                segment: (*segment).to_owned(),
            });
        }

        match segments.as_slice() {
            [category, description] => Ok(Self {
                category: (*category).to_owned(),
                module: None,
                description: (*description).to_owned(),
            }),
            [category, module, description] => Ok(Self {
                category: (*category).to_owned(),
                module: Some((*module).to_owned()),
                description: (*description).to_owned(),
            }),
            _ => Err(malformed()),
        }
    }

    /// Page path below the category directory, without suffix or extension.
    ///
    /// `http/routing` with a module, `routing` without.
    pub fn subpath(&self) -> PathBuf {
        match &self.module {
            Some(module) => PathBuf::from(module).join(&self.description),
            None => PathBuf::from(&self.description),
        }
    }

    /// Human readable page title: `request-routing` → `Request Routing`.
    pub fn heading(&self) -> String {
        title_case(&self.description.replace('-', " "))
    }
}

/// Upper-case the first letter of every word, leaving the rest untouched.
///
/// Letters, digits and `_` continue a word; anything else separates words.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        if prev_is_word {
            out.push(c);
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_word = c.is_alphanumeric() || c == '_';
    }
    out
}
