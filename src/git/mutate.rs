//! Git mutations: create a commit, amend the last one, stage everything.
//!
//! The message always travels as its own argv element after `-m`, so quotes,
//! `$()`, backticks and newlines in generated text reach git untouched.

use tracing::debug;

use super::runner::GitRunner;
use crate::error::CommitError;

/// How a generated message is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    Create,
    Amend,
}

/// A message to apply, built and consumed within one workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub message: String,
    pub mode: CommitMode,
}

impl CommitRequest {
    pub fn create(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mode: CommitMode::Create,
        }
    }

    pub fn amend(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mode: CommitMode::Amend,
        }
    }
}

/// Applies commit requests through a git runner.
pub struct CommitMutator<'g, G: GitRunner + ?Sized> {
    git: &'g G,
}

impl<'g, G: GitRunner + ?Sized> CommitMutator<'g, G> {
    pub fn new(git: &'g G) -> Self {
        Self { git }
    }

    /// `git commit -m <message>`.
    pub fn create(&self, message: &str) -> Result<(), CommitError> {
        self.git
            .run(&["commit", "-m", message])
            .map_err(CommitError::CommitFailed)?;
        debug!("Created commit: {}", message);
        Ok(())
    }

    /// `git commit --amend -m <message>`. Fails when there is no commit yet.
    pub fn amend(&self, message: &str) -> Result<(), CommitError> {
        self.git
            .run(&["commit", "--amend", "-m", message])
            .map_err(CommitError::AmendFailed)?;
        debug!("Amended last commit: {}", message);
        Ok(())
    }

    /// `git add -A`.
    pub fn stage_all(&self) -> Result<(), CommitError> {
        self.git
            .run(&["add", "-A"])
            .map_err(CommitError::StageFailed)?;
        Ok(())
    }

    pub fn apply(&self, request: &CommitRequest) -> Result<(), CommitError> {
        match request.mode {
            CommitMode::Create => self.create(&request.message),
            CommitMode::Amend => self.amend(&request.message),
        }
    }
}
