//! Extraction of the tagged block from a source file.
//!
//! A block starts at the first line containing a begin-tag (`wiki/<path>`)
//! and runs up to, but not including, the first later line containing
//! `end-wiki`. Without an end-tag the block runs to end of input.
//!
//! ```text
//!            begin-tag              end-tag / EOF
//! OUTSIDE ───────────────► INSIDE ───────────────► DONE
//! ```

use super::WikiError;
use regex::Regex;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

/// Begin-tag: `wiki/` followed by a non-whitespace path token.
pub static BEGIN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"wiki/(\S+)").unwrap());

/// End-tag marker, matched anywhere in a line.
pub const END_TAG: &str = "end-wiki";

/// Lines captured from one source file.
///
/// The first line is always the begin-tag line itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedBlock {
    lines: Vec<String>,
}

impl TaggedBlock {
    /// The begin-tag line, if a block was found.
    pub fn tag_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Captured lines after the begin-tag line.
    pub fn body(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl<S: Into<String>> FromIterator<S> for TaggedBlock {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside,
}

/// Scan `reader` line by line for the first tagged block.
///
/// Invalid UTF-8 is replaced rather than rejected, so binary input yields an
/// empty block instead of an error.
pub fn scan<R: BufRead>(mut reader: R) -> io::Result<TaggedBlock> {
    let mut state = State::Outside;
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_line_ending(&buf));

        match state {
            State::Outside if BEGIN_TAG.is_match(&line) => {
                state = State::Inside;
                lines.push(line.into_owned());
            }
            State::Outside => {}
            State::Inside if line.contains(END_TAG) => break,
            State::Inside => lines.push(line.into_owned()),
        }
    }

    Ok(TaggedBlock { lines })
}

/// Scan the file at `path`.
pub fn scan_file(path: &Path) -> Result<TaggedBlock, WikiError> {
    let read_err = |err| WikiError::ReadSource(path.to_path_buf(), err);
    let file = File::open(path).map_err(read_err)?;
    scan(BufReader::new(file)).map_err(read_err)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
