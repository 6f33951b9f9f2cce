//! Per-file publishing into a wiki checkout.
//!
//! ```text
//! for each file:  scan ──► parse tag ──► write page ──► append sidebar
//!                   │          │             │               │
//!                 NoTag     Failed        Failed     Published (maybe orphaned)
//! ```
//!
//! Failures are recorded per file and the run continues, except when page
//! writes keep failing in a row: then the checkout itself is unusable and
//! the run stops.

use crate::{
    log,
    wiki::{
        Placement, Wiki, WikiError, WikiPage, page, scanner,
        sidebar::{self, SidebarEntry},
    },
};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Consecutive checkout failures after which a run is aborted.
const MAX_CONSECUTIVE_WRITE_FAILURES: usize = 3;

/// What happened to one source file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file holds no begin-tag.
    NoTag,
    /// A page was written. Without a sidebar link the page is orphaned.
    Published {
        page: WikiPage,
        sidebar_error: Option<WikiError>,
    },
    Failed(WikiError),
}

/// Outcomes of a publish run, in processing order.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl PublishReport {
    pub fn pages(&self) -> impl Iterator<Item = &WikiPage> {
        self.files.iter().filter_map(|(_, outcome)| match outcome {
            FileOutcome::Published { page, .. } => Some(page),
            _ => None,
        })
    }

    pub fn published(&self) -> usize {
        self.pages().count()
    }

    /// Pages written without a sidebar entry.
    pub fn orphaned(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                FileOutcome::Published {
                    sidebar_error: Some(_),
                    ..
                }
            )
        })
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn untagged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NoTag))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|(_, o)| pred(o)).count()
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "{} scanned, {} published, {} orphaned, {} failed, {} without tag",
            self.files.len(),
            self.published(),
            self.orphaned(),
            self.failed(),
            self.untagged()
        )
    }
}

/// Publish the tagged block of a single file.
pub fn publish_file(wiki: &Wiki, path: &Path) -> FileOutcome {
    let block = match scanner::scan_file(path) {
        Ok(block) => block,
        Err(err) => return FileOutcome::Failed(err),
    };
    let Some(tag_line) = block.tag_line() else {
        return FileOutcome::NoTag;
    };

    let placement = match Placement::parse(tag_line) {
        Ok(placement) => placement,
        Err(err) => return FileOutcome::Failed(err),
    };

    let page = match page::write_page(wiki, &placement, &block) {
        Ok(page) => page,
        Err(err) => return FileOutcome::Failed(err),
    };
    log!("page"; "{}", page.url);

    let sidebar_error = sidebar::append(wiki, &SidebarEntry::for_page(&page)).err();
    FileOutcome::Published {
        page,
        sidebar_error,
    }
}

/// Publish every file in order, collecting outcomes.
///
/// # Errors
/// Returns error when page writes fail for several files in a row.
pub fn publish_files(wiki: &Wiki, files: &[PathBuf]) -> Result<PublishReport> {
    let mut report = PublishReport::default();
    let mut consecutive_failures = 0;

    for path in files {
        let outcome = publish_file(wiki, path);

        match &outcome {
            FileOutcome::Failed(err) if err.is_checkout_failure() => {
                consecutive_failures += 1;
                log!("error"; "{}: {err}", path.display());
            }
            FileOutcome::Failed(err) => {
                consecutive_failures = 0;
                log!("warn"; "{}: {err}", path.display());
            }
            FileOutcome::Published {
                sidebar_error: Some(err),
                page,
            } => {
                consecutive_failures = 0;
                log!("warn"; "{} is not linked from the sidebar: {err}", page.url);
            }
            FileOutcome::Published { .. } | FileOutcome::NoTag => consecutive_failures = 0,
        }

        report.files.push((path.clone(), outcome));

        if consecutive_failures >= MAX_CONSECUTIVE_WRITE_FAILURES {
            bail!(
                "{consecutive_failures} pages in a row could not be written to `{}`; aborting",
                wiki.root().display()
            );
        }
    }

    log!("wiki"; "{}", report.summary());
    Ok(report)
}
