use crate::{exec, log};
use anyhow::{Result, bail};
use std::path::Path;

/// Stage every change in the checkout and commit it
pub fn commit_all(root: &Path, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Commit message cannot be empty");
    }

    exec!(root; ["git"]; "add", "--all", ".")?;
    exec!(root; ["git"]; "commit", "--quiet", "-m", message)?;

    let head = exec!(root; ["git"]; "rev-parse", "--short", "HEAD")?;
    log!("git"; "commit {}", String::from_utf8_lossy(&head.stdout).trim());
    Ok(())
}

/// Push `branch` to the `origin` remote
pub fn push(root: &Path, branch: &str) -> Result<()> {
    log!("git"; "pushing {branch} to origin");
    exec!(root; ["git"]; "push", "origin", branch)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::git::test_support::{git, init_with_commit};
    use std::{fs, process::Command};
    use tempfile::TempDir;

    #[test]
    fn test_commit_empty_message() {
        let dir = TempDir::new().unwrap();
        let result = commit_all(dir.path(), "   ");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Commit message cannot be empty"
        );
    }

    #[test]
    fn test_commit_and_push() {
        let dir = TempDir::new().unwrap();
        let origin = dir.path().join("origin.git");
        fs::create_dir(&origin).unwrap();
        git(&origin, &["init", "-q", "--bare"]);

        let checkout = dir.path().join("checkout");
        init_with_commit(&checkout, &[("_sidebar.md", "")]);
        git(
            &checkout,
            &["remote", "add", "origin", origin.to_str().unwrap()],
        );

        fs::create_dir_all(checkout.join("pages/go")).unwrap();
        fs::write(checkout.join("pages/go/routing-abc.md"), "# Routing\n").unwrap();
        commit_all(&checkout, "Update code wiki").unwrap();
        push(&checkout, "master").unwrap();

        let log = Command::new("git")
            .args(["log", "--format=%s", "master"])
            .current_dir(&origin)
            .output()
            .unwrap();
        let subjects = String::from_utf8_lossy(&log.stdout);
        assert_eq!(subjects.lines().next(), Some("Update code wiki"));
    }

    /// Child half of `test_commit_ignores_hook_env`.
    #[test]
    #[ignore = "spawned with git hook variables by test_commit_ignores_hook_env"]
    fn commit_in_hook_env() {
        let Some(checkout) = std::env::var_os("WIKIATOR_TEST_CHECKOUT") else {
            return;
        };
        commit_all(Path::new(&checkout), "Update code wiki").unwrap();
    }

    #[test]
    fn test_commit_ignores_hook_env() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("project");
        init_with_commit(&project, &[("a.go", "package a")]);
        fs::write(project.join("b.go"), "package b").unwrap();

        // Index of a partial `git commit b.go` running the pre-commit hook.
        let index = project.join(".git/commit-index");
        for args in [&["read-tree", "HEAD"][..], &["add", "b.go"]] {
            let status = Command::new("git")
                .args(args)
                .env("GIT_INDEX_FILE", &index)
                .current_dir(&project)
                .status()
                .unwrap();
            assert!(status.success());
        }
        let before = fs::read(&index).unwrap();

        let checkout = dir.path().join("checkout");
        init_with_commit(&checkout, &[]);
        fs::create_dir_all(checkout.join("pages/go")).unwrap();
        fs::write(checkout.join("pages/go/b-abc.md"), "# B\n").unwrap();

        let status = Command::new(std::env::current_exe().unwrap())
            .args([
                "--exact",
                "utils::git::remote::tests::commit_in_hook_env",
                "--ignored",
                "--quiet",
            ])
            .env("WIKIATOR_TEST_CHECKOUT", &checkout)
            .env("GIT_INDEX_FILE", &index)
            .env("GIT_DIR", project.join(".git"))
            .env("GIT_WORK_TREE", &project)
            .status()
            .unwrap();
        assert!(status.success());

        assert_eq!(fs::read(&index).unwrap(), before);
        let files = Command::new("git")
            .args(["show", "--name-only", "--format=%s", "HEAD"])
            .current_dir(&checkout)
            .output()
            .unwrap();
        let files = String::from_utf8_lossy(&files.stdout);
        assert_eq!(
            files.lines().filter(|l| !l.is_empty()).collect::<Vec<_>>(),
            ["Update code wiki", "pages/go/b-abc.md"]
        );
    }

    #[test]
    fn test_commit_without_changes_fails() {
        let dir = TempDir::new().unwrap();
        init_with_commit(dir.path(), &[("a.md", "a")]);
        assert!(commit_all(dir.path(), "nothing").is_err());
    }
}
