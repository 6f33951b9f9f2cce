//! External command execution utilities.
//!
//! Provides a macro and functions for running commands with captured output
//! and error reporting.

use crate::log;
use anyhow::{Context, Result};
use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::{Command, Output},
};

// ============================================================================
// Macros
// ============================================================================

/// Run an external command with arguments.
///
/// # Examples
/// ```ignore
/// // Without working directory
/// exec!(["git"]; "clone", url, dir)?;
///
/// // With working directory
/// exec!(root; ["git"]; "commit", "-m", message)?;
/// ```
#[macro_export]
macro_rules! exec {
    ($cmd:expr; $($arg:expr),* $(,)?) => {{
        $crate::utils::command::exec(
            None,
            &$crate::utils::command::to_cmd_vec($cmd),
            &$crate::utils::command::filter_args(&[$($crate::utils::command::to_os($arg)),*]),
        )
    }};
    ($root:expr; $cmd:expr; $($arg:expr),* $(,)?) => {{
        $crate::utils::command::exec(
            Some($root),
            &$crate::utils::command::to_cmd_vec($cmd),
            &$crate::utils::command::filter_args(&[$($crate::utils::command::to_os($arg)),*]),
        )
    }};
}

// ============================================================================
// Argument Conversion
// ============================================================================

/// Convert to OsString.
#[inline]
pub fn to_os<S: Into<OsString>>(s: S) -> OsString {
    s.into()
}

/// Trait for converting to command vector.
pub trait ToCmd {
    fn to_cmd(self) -> Vec<OsString>;
}

impl<const N: usize> ToCmd for [&str; N] {
    #[inline]
    fn to_cmd(self) -> Vec<OsString> {
        self.into_iter().map(OsString::from).collect()
    }
}

/// Convert command to Vec<OsString>.
#[inline]
pub fn to_cmd_vec<C: ToCmd>(cmd: C) -> Vec<OsString> {
    cmd.to_cmd()
}

/// Filter out empty args.
#[inline]
pub fn filter_args(args: &[OsString]) -> Vec<OsString> {
    args.iter().filter(|a| !a.is_empty()).cloned().collect()
}

// ============================================================================
// Command Execution
// ============================================================================

/// Repository-scoped variables git exports to hooks.
///
/// Inherited by a child git they redirect it to the hook's repository and
/// index, whatever its working directory.
const GIT_REPO_ENV: &[&str] = &[
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_PREFIX",
    "GIT_COMMON_DIR",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
];

/// Execute a command and capture its output.
///
/// # Errors
/// Returns error if command fails to execute or returns non-zero exit code.
pub fn exec(root: Option<&Path>, cmd: &[OsString], args: &[OsString]) -> Result<Output> {
    exec_with_env(root, cmd, args, &[])
}

/// Like [`exec`], setting `envs` on the child after the git variables are cleared.
pub fn exec_with_env(
    root: Option<&Path>,
    cmd: &[OsString],
    args: &[OsString],
    envs: &[(&str, &OsStr)],
) -> Result<Output> {
    let (name, mut command) = prepare(root, cmd, args)?;
    command.envs(envs.iter().copied());

    let output = command
        .output()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    log_output(&name, &output)?;
    Ok(output)
}

/// Prepare a Command from components.
fn prepare(root: Option<&Path>, cmd: &[OsString], args: &[OsString]) -> Result<(String, Command)> {
    let (program, rest) = cmd.split_first().context("Empty command")?;
    let name = program.to_str().context("Non UTF-8 command name")?.to_owned();

    let mut command = Command::new(program);
    command.args(rest).args(args);

    if let Some(dir) = root {
        command.current_dir(dir);
    }

    // Each git call targets the repository at its working directory.
    if name == "git" {
        for var in GIT_REPO_ENV {
            command.env_remove(var);
        }
    }

    Ok((name, command))
}

/// Log stderr of a finished command, failing on non-zero exit.
///
/// Stdout is left to the caller, which usually parses it.
fn log_output(name: &str, output: &Output) -> Result<()> {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if !output.status.success() {
        if stderr.is_empty() {
            anyhow::bail!("Command `{name}` failed with {}", output.status);
        }
        anyhow::bail!("Command `{name}` failed with {}\n{stderr}", output.status);
    }

    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        log!(name; "{line}");
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
