use crate::utils::command::{exec_with_env, filter_args, to_cmd_vec, to_os};
use anyhow::Result;
use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Files added, modified or copied in the index of the repository at `project`.
///
/// Inside a pre-commit hook the index being committed is the one git passes
/// in `GIT_INDEX_FILE`, which differs from `.git/index` for `git commit <paths>`.
///
/// Paths are joined onto `project`; deleted files and files outside
/// `project` (when it is a subdirectory of the repository) are not listed.
pub fn staged_files(project: &Path) -> Result<Vec<PathBuf>> {
    staged_files_in(project, hook_index_file().as_deref())
}

/// Index file exported by git to the running hook, made absolute
fn hook_index_file() -> Option<PathBuf> {
    let index = PathBuf::from(env::var_os("GIT_INDEX_FILE")?);
    if index.is_absolute() {
        return Some(index);
    }
    // Hooks run from the top of the working tree, which relative paths refer to.
    env::current_dir().ok().map(|cwd| cwd.join(index))
}

/// Staged files of `project`, read from `index` when given
fn staged_files_in(project: &Path, index: Option<&Path>) -> Result<Vec<PathBuf>> {
    let args = filter_args(&[
        to_os("diff"),
        to_os("--cached"),
        to_os("--name-only"),
        to_os("--relative"),
        to_os("--diff-filter=AMC"),
    ]);
    let envs: Vec<(&str, &OsStr)> = index
        .map(|index| ("GIT_INDEX_FILE", index.as_os_str()))
        .into_iter()
        .collect();

    let output = exec_with_env(Some(project), &to_cmd_vec(["git"]), &args, &envs)?;
    Ok(parse_name_list(&String::from_utf8_lossy(&output.stdout), project))
}

/// Parse `git diff --name-only` output into paths below `root`
fn parse_name_list(stdout: &str, root: &Path) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| root.join(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::git::test_support::{git, init_with_commit};
    use std::{fs, process::Command};
    use tempfile::TempDir;

    #[test]
    fn test_parse_name_list() {
        let root = Path::new("/proj");
        let paths = parse_name_list("src/main.go\n  lib/util.go \n\n", root);
        assert_eq!(
            paths,
            [
                PathBuf::from("/proj/src/main.go"),
                PathBuf::from("/proj/lib/util.go")
            ]
        );
        assert!(parse_name_list("", root).is_empty());
    }

    #[test]
    fn test_staged_files() {
        let dir = TempDir::new().unwrap();
        init_with_commit(dir.path(), &[("old.go", "package old"), ("gone.go", "x")]);

        fs::write(dir.path().join("old.go"), "package old // changed").unwrap();
        fs::write(dir.path().join("new.go"), "package new").unwrap();
        fs::write(dir.path().join("unstaged.go"), "package unstaged").unwrap();
        git(dir.path(), &["add", "old.go", "new.go"]);
        git(dir.path(), &["rm", "-q", "gone.go"]);

        let mut files = staged_files_in(dir.path(), None).unwrap();
        files.sort();
        assert_eq!(files, [dir.path().join("new.go"), dir.path().join("old.go")]);
    }

    #[test]
    fn test_staged_files_from_commit_index() {
        let dir = TempDir::new().unwrap();
        init_with_commit(dir.path(), &[("a.go", "package a")]);
        fs::write(dir.path().join("a.go"), "package a // staged").unwrap();
        fs::write(dir.path().join("b.go"), "package b").unwrap();
        git(dir.path(), &["add", "a.go"]);

        // The temporary index `git commit b.go` builds: HEAD plus b.go only.
        let index = dir.path().join(".git/commit-index");
        for args in [&["read-tree", "HEAD"][..], &["add", "b.go"]] {
            let status = Command::new("git")
                .args(args)
                .env("GIT_INDEX_FILE", &index)
                .current_dir(dir.path())
                .status()
                .unwrap();
            assert!(status.success());
        }

        let files = staged_files_in(dir.path(), Some(&index)).unwrap();
        assert_eq!(files, [dir.path().join("b.go")]);
    }
}
