//! Spawning the system `git` binary.
//!
//! All operations shell out to `git` with an argument array (never a shell
//! string), inheriting the user's git config, hooks and credential setup.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::GitError;

/// Trait for executing git commands.
///
/// This abstraction allows substituting git in tests.
pub trait GitRunner {
    /// Run `git <args...>` and return its stdout on success.
    fn run(&self, args: &[&str]) -> Result<String, GitError>;
}

impl<G: GitRunner + ?Sized> GitRunner for &G {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        (**self).run(args)
    }
}

/// Runner that calls the real `git` executable.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `workdir`.
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => GitError::NotInstalled,
            _ => GitError::SpawnFailed(e),
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.first().copied().unwrap_or_default().to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check if git is installed and accessible.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| GitError::NotInstalled)
}
