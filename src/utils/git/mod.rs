//! Git operations for the wiki checkout and the documented project.
//!
//! Repository inspection goes through `gix`; cloning, committing and pushing
//! shell out to the `git` binary so user credentials and hooks apply.

mod remote;
mod repo;
mod staged;

pub use remote::{commit_all, push};
pub use repo::{clone_repo, discover_repo, hooks_dir, open_repo, origin_url};
pub use staged::staged_files;
