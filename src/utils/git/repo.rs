use crate::{exec, log};
use anyhow::{Context, Result};
use gix::{Repository, ThreadSafeRepository, remote::Direction};
use std::path::{Path, PathBuf};

/// Open an existing git repository
pub fn open_repo(root: &Path) -> Result<ThreadSafeRepository> {
    let repo = gix::open(root)
        .with_context(|| format!("`{}` is not a git repository", root.display()))?;
    Ok(repo.into_sync())
}

/// Find the repository containing `path`, walking up parent directories
pub fn discover_repo(path: &Path) -> Result<ThreadSafeRepository> {
    let repo = gix::discover(path)
        .with_context(|| format!("no git repository found at or above `{}`", path.display()))?;
    Ok(repo.into_sync())
}

/// Clone `url` into `dest`, which must not exist yet
pub fn clone_repo(url: &str, dest: &Path) -> Result<()> {
    log!("git"; "cloning {url} into {}", dest.display());
    exec!(["git"]; "clone", "--quiet", url, dest)?;
    Ok(())
}

/// Directory holding the repository's hook scripts.
///
/// Linked worktrees share the hooks of the main repository.
pub fn hooks_dir(repo: &Repository) -> PathBuf {
    repo.common_dir().join("hooks")
}

/// URL of the `origin` remote, preferring the push URL
pub fn origin_url(repo: &Repository) -> Option<String> {
    repo.find_remote("origin").ok().and_then(|remote| {
        remote
            .url(Direction::Push)
            .or_else(|| remote.url(Direction::Fetch))
            .map(|url| url.to_bstring().to_string())
    })
}
