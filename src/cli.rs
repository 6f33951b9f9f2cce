//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Publish tagged source comments to a documentation wiki
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name, relative to the project (default: wikiator.toml)
    #[arg(short = 'C', long, default_value = "wikiator.toml")]
    pub config: PathBuf,

    /// Wiki repository to clone
    #[arg(long)]
    pub repo: Option<String>,

    /// Branch of the wiki repository to push
    #[arg(long)]
    pub branch: Option<String>,

    /// Use an existing local wiki checkout instead of cloning
    #[arg(long)]
    pub checkout: Option<PathBuf>,

    /// Write and commit pages without pushing
    #[arg(long)]
    pub no_push: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Install a pre-commit hook that publishes staged files
    Setup {
        /// project directory to watch
        project: PathBuf,
    },

    /// Publish tagged blocks from the files staged in a project
    Staged {
        /// project directory (git repository)
        project: PathBuf,
    },

    /// Publish tagged blocks from every file under a project
    Scan {
        /// project directory to walk
        project: PathBuf,
    },
}

impl Cli {
    pub const fn is_setup(&self) -> bool {
        matches!(self.command, Commands::Setup { .. })
    }

    /// Project directory the command operates on.
    pub fn project(&self) -> &Path {
        match &self.command {
            Commands::Setup { project }
            | Commands::Staged { project }
            | Commands::Scan { project } => project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_staged() {
        let cli = Cli::try_parse_from(["wikiator", "staged", "proj"]).unwrap();
        assert!(matches!(cli.command, Commands::Staged { .. }));
        assert_eq!(cli.project(), Path::new("proj"));
        assert_eq!(cli.config, PathBuf::from("wikiator.toml"));
        assert!(!cli.no_push);
        assert!(!cli.is_setup());
    }

    #[test]
    fn test_parse_scan_with_overrides() {
        let cli = Cli::try_parse_from([
            "wikiator",
            "--repo",
            "git@example.com:wiki.git",
            "--branch",
            "main",
            "--checkout",
            "/tmp/wiki",
            "--no-push",
            "-C",
            "docs.toml",
            "scan",
            "src",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Scan { .. }));
        assert_eq!(cli.repo.as_deref(), Some("git@example.com:wiki.git"));
        assert_eq!(cli.branch.as_deref(), Some("main"));
        assert_eq!(cli.checkout, Some(PathBuf::from("/tmp/wiki")));
        assert!(cli.no_push);
        assert_eq!(cli.config, PathBuf::from("docs.toml"));
    }

    #[test]
    fn test_parse_setup() {
        let cli = Cli::try_parse_from(["wikiator", "setup", "."]).unwrap();
        assert!(cli.is_setup());
        assert_eq!(cli.project(), Path::new("."));
    }

    #[test]
    fn test_project_is_required() {
        assert!(Cli::try_parse_from(["wikiator", "scan"]).is_err());
    }
}
