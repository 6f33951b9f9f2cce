//! `[wiki]` section configuration.
//!
//! Describes the wiki repository pages are published to and its layout.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[wiki]` section in wikiator.toml - target wiki repository.
///
/// # Example
/// ```toml
/// [wiki]
/// repo = "git@github.com:user/user.github.io.git"
/// branch = "master"
/// pages = "pages"
/// sidebar = "_sidebar.md"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WikiConfig {
    /// Repository URL (HTTPS or SSH format), cloned for every run.
    #[serde(default = "defaults::wiki::repo")]
    #[educe(Default = defaults::wiki::repo())]
    pub repo: String,

    /// Branch pushed after committing new pages.
    #[serde(default = "defaults::wiki::branch")]
    #[educe(Default = defaults::wiki::branch())]
    pub branch: String,

    /// Pages directory, relative to the wiki root.
    #[serde(default = "defaults::wiki::pages")]
    #[educe(Default = defaults::wiki::pages())]
    pub pages: PathBuf,

    /// Sidebar index file, relative to the wiki root.
    #[serde(default = "defaults::wiki::sidebar")]
    #[educe(Default = defaults::wiki::sidebar())]
    pub sidebar: PathBuf,

    #[serde(default = "defaults::wiki::commit_message")]
    #[educe(Default = defaults::wiki::commit_message())]
    pub commit_message: String,

    /// Push after committing.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub push: bool,

    /// Existing local checkout to publish into instead of a fresh clone.
    ///
    /// Supports `~` expansion. The checkout is left in place after the run.
    #[serde(default = "defaults::wiki::checkout")]
    #[educe(Default = defaults::wiki::checkout())]
    pub checkout: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::WikiatorConfig;
    use std::path::PathBuf;

    #[test]
    fn test_wiki_config() {
        let config = r#"
            [wiki]
            repo = "git@github.com:user/user.github.io.git"
            branch = "gh-pages"
            pages = "docs"
            sidebar = "nav.md"
            commit_message = "docs: refresh"
            push = false
            checkout = "~/wiki"
        "#;
        let config: WikiatorConfig = toml::from_str(config).unwrap();

        assert_eq!(config.wiki.repo, "git@github.com:user/user.github.io.git");
        assert_eq!(config.wiki.branch, "gh-pages");
        assert_eq!(config.wiki.pages, PathBuf::from("docs"));
        assert_eq!(config.wiki.sidebar, PathBuf::from("nav.md"));
        assert_eq!(config.wiki.commit_message, "docs: refresh");
        assert!(!config.wiki.push);
        assert_eq!(config.wiki.checkout, Some(PathBuf::from("~/wiki")));
    }

    #[test]
    fn test_wiki_config_defaults() {
        let config: WikiatorConfig = toml::from_str("").unwrap();

        assert!(config.wiki.repo.is_empty());
        assert_eq!(config.wiki.branch, "master");
        assert_eq!(config.wiki.pages, PathBuf::from("pages"));
        assert_eq!(config.wiki.sidebar, PathBuf::from("_sidebar.md"));
        assert_eq!(config.wiki.commit_message, "Update code wiki");
        assert!(config.wiki.push);
        assert!(config.wiki.checkout.is_none());
    }

    #[test]
    fn test_wiki_config_unknown_field_rejection() {
        let config = r#"
            [wiki]
            unknown = "field"
        "#;
        let result: Result<WikiatorConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
