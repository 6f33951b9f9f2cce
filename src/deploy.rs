//! Wiki checkout lifecycle.
//!
//! A run publishes into either an existing checkout (`[wiki.checkout]`) or a
//! scratch clone of `[wiki.repo]` in the system temp directory. Scratch
//! clones are removed when the [`WikiCheckout`] is dropped.

use crate::{
    config::WikiatorConfig,
    log,
    publish::PublishReport,
    utils::{git, random::random_lowercase},
    wiki::Wiki,
};
use anyhow::Result;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Length of the random part of scratch clone directory names
const SCRATCH_SUFFIX_LEN: usize = 8;

#[derive(Debug)]
pub struct WikiCheckout {
    root: PathBuf,
    scratch: bool,
}

impl WikiCheckout {
    /// Open the configured checkout, or clone the wiki repository.
    pub fn prepare(config: &WikiatorConfig) -> Result<Self> {
        match &config.wiki.checkout {
            Some(root) => Self::existing(root),
            None => {
                let dest = std::env::temp_dir()
                    .join(format!("wikiator-{}", random_lowercase(SCRATCH_SUFFIX_LEN)));
                Self::clone_into(&config.wiki.repo, dest)
            }
        }
    }

    fn existing(root: &Path) -> Result<Self> {
        let repo = git::open_repo(root)?.to_thread_local();
        match git::origin_url(&repo) {
            Some(url) => log!("wiki"; "using checkout {} ({url})", root.display()),
            None => log!("wiki"; "using checkout {}", root.display()),
        }
        Ok(Self {
            root: root.to_path_buf(),
            scratch: false,
        })
    }

    fn clone_into(url: &str, dest: PathBuf) -> Result<Self> {
        let checkout = Self {
            root: dest,
            scratch: true,
        };
        git::clone_repo(url, &checkout.root)?;
        Ok(checkout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Wiki layout inside this checkout.
    pub fn wiki(&self, config: &WikiatorConfig) -> Wiki {
        Wiki::with_layout(&self.root, &config.wiki)
    }

    /// Commit the pages of `report` and push them to the wiki remote.
    ///
    /// Nothing is committed when no page was written.
    pub fn deploy(&self, config: &WikiatorConfig, report: &PublishReport) -> Result<()> {
        if report.published() == 0 {
            log!("git"; "no new pages, nothing to commit");
            return Ok(());
        }

        git::commit_all(&self.root, &config.wiki.commit_message)?;
        if config.wiki.push {
            git::push(&self.root, &config.wiki.branch)?;
        } else {
            log!("git"; "push disabled, commit left in {}", self.root.display());
        }
        Ok(())
    }
}

impl Drop for WikiCheckout {
    fn drop(&mut self) {
        if !self.scratch || !self.root.exists() {
            return;
        }
        if let Err(err) = fs::remove_dir_all(&self.root) {
            log!("warn"; "failed to remove {}: {err}", self.root.display());
        }
    }
}
