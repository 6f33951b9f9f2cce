//! Pre-commit hook installation.
//!
//! `wikiator setup <PROJECT>` appends a snippet to the project's
//! `pre-commit` hook so every commit publishes its staged tagged blocks.
//! Existing hook content is preserved.

use crate::{config::WikiatorConfig, log, utils::git};
use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

const HOOK_NAME: &str = "pre-commit";

/// Hook snippet publishing the staged files of `project`.
///
/// The hook always succeeds so publishing never blocks a commit.
pub fn hook_script(project: &Path) -> String {
    format!(
        "#!/bin/sh\nwikiator staged {}\nexit 0\n",
        shell_quote(&project.to_string_lossy())
    )
}

/// Quote `s` for a POSIX shell when it holds anything beyond safe characters
fn shell_quote(s: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "/._-+:@~".contains(c);
    if !s.is_empty() && s.chars().all(safe) {
        s.to_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

/// Install the hook for the configured project.
pub fn install_hook(config: &WikiatorConfig) -> Result<PathBuf> {
    let repo = git::discover_repo(&config.project)?.to_thread_local();
    let hooks = git::hooks_dir(&repo);
    let path = append_hook(&hooks, &config.project)?;
    log!("hook"; "installed {}", path.display());
    Ok(path)
}

/// Append the hook snippet to `hooks_dir/pre-commit`, creating it if needed
fn append_hook(hooks_dir: &Path, project: &Path) -> Result<PathBuf> {
    fs::create_dir_all(hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;

    let path = hooks_dir.join(HOOK_NAME);
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }

    let mut file = options
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(hook_script(project).as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::git::test_support::git;
    use tempfile::TempDir;

    #[test]
    fn test_hook_script() {
        assert_eq!(
            hook_script(Path::new("/home/me/proj")),
            "#!/bin/sh\nwikiator staged /home/me/proj\nexit 0\n"
        );
        assert_eq!(
            hook_script(Path::new("/home/me/my proj")),
            "#!/bin/sh\nwikiator staged '/home/me/my proj'\nexit 0\n"
        );
    }

    #[test]
    fn test_shell_quote_single_quote() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_append_hook_creates_dir_and_file() {
        let dir = TempDir::new().unwrap();
        let hooks = dir.path().join("hooks");

        let path = append_hook(&hooks, Path::new("/proj")).unwrap();
        assert_eq!(path, hooks.join("pre-commit"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "#!/bin/sh\nwikiator staged /proj\nexit 0\n"
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_ne!(mode & 0o111, 0);
        }
    }

    #[test]
    fn test_append_hook_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let hooks = dir.path().join("hooks");
        fs::create_dir(&hooks).unwrap();
        fs::write(hooks.join("pre-commit"), "#!/bin/sh\ncargo fmt --check\n").unwrap();

        append_hook(&hooks, Path::new("/proj")).unwrap();
        let content = fs::read_to_string(hooks.join("pre-commit")).unwrap();
        assert!(content.starts_with("#!/bin/sh\ncargo fmt --check\n"));
        assert!(content.ends_with("wikiator staged /proj\nexit 0\n"));
    }

    #[test]
    fn test_install_hook_in_subdirectory() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        let project = dir.path().join("service");
        fs::create_dir(&project).unwrap();

        let mut config = WikiatorConfig::default();
        config.project = project.clone();

        let path = install_hook(&config).unwrap();
        assert!(path.ends_with(".git/hooks/pre-commit"));
        assert!(
            fs::read_to_string(path)
                .unwrap()
                .contains(&format!("wikiator staged {}", shell_quote(&project.to_string_lossy())))
        );
    }
}
