//! Candidate source files for a publish run.
//!
//! - `staged`: files staged in the project's git index (pre-commit hook)
//! - `scan`: every file below the project, minus ignored names

use crate::{
    cli::Commands,
    config::WikiatorConfig,
    log,
    utils::git,
};
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Collect source files for the current command, in processing order.
///
/// `skip` is a directory excluded from the walk (the wiki checkout when it
/// lives inside the project).
pub fn collect(config: &WikiatorConfig, skip: Option<&Path>) -> Result<Vec<PathBuf>> {
    let project = &config.project;
    let files = match config.cli.map(|cli| &cli.command) {
        Some(Commands::Staged { .. }) => {
            let files = git::staged_files(project)?;
            log!("scan"; "{} staged files in {}", files.len(), project.display());
            files
        }
        _ => {
            let files = collect_all_files(project, &config.scan.ignore, skip);
            log!("scan"; "{} files under {}", files.len(), project.display());
            files
        }
    };
    Ok(files)
}

/// Collect all files below `dir` recursively, sorted by file name per directory.
///
/// Entries whose file name is listed in `ignore` are skipped, directories
/// including everything below them.
pub fn collect_all_files(dir: &Path, ignore: &[String], skip: Option<&Path>) -> Vec<PathBuf> {
    let is_ignored = |entry: &DirEntry| {
        let name = entry.file_name().to_string_lossy();
        ignore.iter().any(|ignored| *ignored == name)
            || skip.is_some_and(|skip| entry.path() == skip)
    };

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log!("warn"; "{err}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .collect()
}
