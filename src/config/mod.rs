//! Project configuration management for `wikiator.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `[wiki]`  | Wiki repository, branch and page layout         |
//! | `[scan]`  | Names skipped while walking a project           |
//!
//! The file lives in the project root and is optional; every field has a
//! default and CLI flags override file values.
//!
//! # Example
//!
//! ```toml
//! [wiki]
//! repo = "git@github.com:user/user.github.io.git"
//! branch = "master"
//!
//! [scan]
//! ignore = [".git", "target"]
//! ```

pub mod defaults;
mod error;
mod scan;
mod wiki;

pub use error::ConfigError;
pub use scan::ScanConfig;
pub use wiki::WikiConfig;

use crate::cli::Cli;
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing wikiator.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WikiatorConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path of the project being documented
    #[serde(skip)]
    pub project: PathBuf,

    /// Target wiki settings
    #[serde(default)]
    pub wiki: WikiConfig,

    /// Recursive scan settings
    #[serde(default)]
    pub scan: ScanConfig,
}

impl WikiatorConfig {
    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let config = toml::from_str(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        self.project = Self::normalize_path(cli.project());

        Self::update_option(&mut self.wiki.repo, cli.repo.as_ref());
        Self::update_option(&mut self.wiki.branch, cli.branch.as_ref());
        if cli.checkout.is_some() {
            self.wiki.checkout.clone_from(&cli.checkout);
        }
        if cli.no_push {
            self.wiki.push = false;
        }

        // Normalize checkout path (with tilde expansion)
        if let Some(checkout) = &self.wiki.checkout {
            let expanded = shellexpand::tilde(&checkout.to_string_lossy()).into_owned();
            let path = PathBuf::from(expanded);
            self.wiki.checkout = Some(if path.is_relative() {
                Self::normalize_path(&self.project.join(path))
            } else {
                Self::normalize_path(&path)
            });
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.project.is_dir() {
            bail!(ConfigError::Validation(format!(
                "project `{}` is not a directory",
                self.project.display()
            )));
        }

        Self::check_command_installed("git")?;

        if self.cli.is_some_and(Cli::is_setup) {
            return Ok(());
        }

        match &self.wiki.checkout {
            None if self.wiki.repo.trim().is_empty() => bail!(ConfigError::Validation(
                "[wiki.repo] must be set (or pass --repo / --checkout)".into()
            )),
            Some(path) if !path.is_dir() => bail!(ConfigError::Validation(format!(
                "[wiki.checkout] `{}` is not a directory",
                path.display()
            ))),
            _ => {}
        }

        if self.wiki.push && self.wiki.branch.trim().is_empty() {
            bail!(ConfigError::Validation("[wiki.branch] must not be empty".into()));
        }

        if self.wiki.commit_message.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[wiki.commit_message] must not be empty".into()
            ));
        }

        for (field, path) in [
            ("[wiki.pages]", &self.wiki.pages),
            ("[wiki.sidebar]", &self.wiki.sidebar),
        ] {
            if path.as_os_str().is_empty() || path.is_absolute() {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a path relative to the wiki root"
                )));
            }
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(cmd: &str) -> Result<()> {
        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
