//! Read-only repository context: staged diff, recent log, single commit.
//!
//! Every public reader returns a plain string and maps any failure to `""`.
//! The `try_*` variants keep the reason (git missing, command failed, no
//! output) for callers that want to report it.

use std::num::NonZeroUsize;

use tracing::debug;

use super::runner::GitRunner;
use crate::error::GitError;

/// Repository context reader over a git runner.
pub struct RepoContext<'g, G: GitRunner + ?Sized> {
    git: &'g G,
}

impl<'g, G: GitRunner + ?Sized> RepoContext<'g, G> {
    pub fn new(git: &'g G) -> Self {
        Self { git }
    }

    /// Unified diff of staged changes, or `""` if nothing is staged.
    pub fn staged_diff(&self) -> String {
        collapse("staged diff", self.try_staged_diff())
    }

    /// The last `count` commits as `<short-hash> <subject>` with `--stat`.
    pub fn recent_commits(&self, count: NonZeroUsize) -> String {
        collapse("recent commits", self.try_recent_commits(count))
    }

    /// Patch and metadata of one commit. Identifiers that git would read as
    /// an option yield `""`.
    pub fn commit_detail(&self, identifier: &str) -> String {
        collapse("commit detail", self.try_commit_detail(identifier))
    }

    pub fn try_staged_diff(&self) -> Result<String, GitError> {
        let names = self.git.run(&["diff", "--cached", "--name-only"])?;
        if names.trim().is_empty() {
            return Err(GitError::NoOutput("diff --cached --name-only".to_string()));
        }

        non_empty("diff --cached", self.git.run(&["diff", "--cached"])?)
    }

    pub fn try_recent_commits(&self, count: NonZeroUsize) -> Result<String, GitError> {
        let limit = format!("-{count}");
        non_empty(
            "log",
            self.git
                .run(&["log", &limit, "--pretty=format:%h %s", "--stat"])?,
        )
    }

    pub fn try_commit_detail(&self, identifier: &str) -> Result<String, GitError> {
        if identifier.is_empty() || identifier.starts_with('-') {
            return Err(GitError::InvalidIdentifier(identifier.to_string()));
        }
        non_empty("show", self.git.run(&["show", identifier])?)
    }
}

fn non_empty(command: &str, stdout: String) -> Result<String, GitError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        Err(GitError::NoOutput(command.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

fn collapse(what: &str, result: Result<String, GitError>) -> String {
    result.unwrap_or_else(|e| {
        debug!("No {} available: {}", what, e);
        String::new()
    })
}
