//! The four user-facing workflows: setup, commit, analyze and fix.
//!
//! Each workflow is a short, strictly sequential pipeline:
//! read context -> build prompt -> generate -> (optionally) mutate.
//! Results go to `out`, diagnostics to `err`, and the terminal state is
//! returned as an [`Outcome`].

pub mod prompter;
pub mod setup;

use std::io::Write;
use std::num::NonZeroUsize;

use tracing::debug;

use crate::commit::build_prompt;
use crate::error::WorkflowError;
use crate::git::{CommitMode, CommitMutator, CommitRequest, GitRunner, RepoContext};
use crate::llm::{MessageGenerator, TextGenerator};

pub use prompter::{Prompter, TerminalPrompter};
pub use setup::run_setup;

/// Terminal state of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Setup saved the configuration.
    Configured,
    /// A new commit was created with this message.
    Committed(String),
    /// The last commit was amended to this message.
    Amended(String),
    /// Dry run: the message was printed, nothing was changed.
    DryRun(String),
    /// Analyze produced a suggestion.
    Suggested { original: String, suggestion: String },
    /// Nothing staged, even after staging everything.
    NothingToCommit,
    /// The user declined to stage changes.
    NoActionTaken,
    /// There is no commit to fix.
    NoCommitsToFix,
    /// The generative service did not return a message.
    GenerationFailed,
    /// git refused to stage, commit or amend.
    MutationFailed(String),
}

/// Flags for the commit workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions {
    pub dry_run: bool,
    /// Stage everything without asking when nothing is staged.
    pub stage_all: bool,
}

/// Orchestrates context reading, generation and mutation.
pub struct Workflow<G, T, P, W, E>
where
    G: GitRunner,
    T: TextGenerator,
    P: Prompter,
    W: Write,
    E: Write,
{
    git: G,
    generator: MessageGenerator<T>,
    prompter: P,
    out: W,
    err: E,
}

impl<G, T, P, W, E> Workflow<G, T, P, W, E>
where
    G: GitRunner,
    T: TextGenerator,
    P: Prompter,
    W: Write,
    E: Write,
{
    pub fn new(git: G, generator: MessageGenerator<T>, prompter: P, out: W, err: E) -> Self {
        Self {
            git,
            generator,
            prompter,
            out,
            err,
        }
    }

    /// Generate a message for the staged changes and commit it.
    pub async fn commit(&mut self, options: CommitOptions) -> Result<Outcome, WorkflowError> {
        let mut diff = RepoContext::new(&self.git).staged_diff();

        if diff.is_empty() {
            writeln!(self.err, "No staged changes found.")?;

            // No terminal to ask (hooks, CI, piped stdin) counts as "no"
            let stage = options.stage_all
                || self
                    .prompter
                    .confirm("Stage all changes and continue?", false)
                    .unwrap_or_else(|e| {
                        debug!("Staging prompt unavailable: {}", e);
                        false
                    });
            if !stage {
                writeln!(
                    self.err,
                    "No action taken. Use 'git add' to stage changes first."
                )?;
                return Ok(Outcome::NoActionTaken);
            }

            if let Err(e) = CommitMutator::new(&self.git).stage_all() {
                writeln!(self.err, "{}", e)?;
                return Ok(Outcome::MutationFailed(e.to_string()));
            }

            diff = RepoContext::new(&self.git).staged_diff();
            if diff.is_empty() {
                writeln!(self.err, "Nothing to commit.")?;
                return Ok(Outcome::NothingToCommit);
            }
        }

        let Some(message) = self.generate(&diff).await? else {
            return Ok(Outcome::GenerationFailed);
        };

        if options.dry_run {
            writeln!(self.out, "{}", message)?;
            return Ok(Outcome::DryRun(message));
        }

        self.apply(CommitRequest::create(message))
    }

    /// Suggest a conventional message for an existing commit. Read-only.
    ///
    /// An unknown identifier yields empty context; generation is still
    /// attempted.
    pub async fn analyze(&mut self, identifier: &str) -> Result<Outcome, WorkflowError> {
        let detail = RepoContext::new(&self.git).commit_detail(identifier);
        if detail.is_empty() {
            debug!("No detail for commit {}, analyzing empty context", identifier);
        }

        let Some(suggestion) = self.generate(&detail).await? else {
            return Ok(Outcome::GenerationFailed);
        };

        let original = detail.lines().next().unwrap_or_default().to_string();

        writeln!(self.out, "Original commit:")?;
        writeln!(self.out, "{}", original)?;
        writeln!(self.out)?;
        writeln!(self.out, "Suggested conventional commit:")?;
        writeln!(self.out, "{}", suggestion)?;

        Ok(Outcome::Suggested {
            original,
            suggestion,
        })
    }

    /// Rewrite the last commit's message in conventional form.
    pub async fn fix(&mut self, dry_run: bool) -> Result<Outcome, WorkflowError> {
        let log = RepoContext::new(&self.git).recent_commits(NonZeroUsize::MIN);
        if log.is_empty() {
            writeln!(self.err, "No commits to fix.")?;
            return Ok(Outcome::NoCommitsToFix);
        }

        let Some(message) = self.generate(&log).await? else {
            return Ok(Outcome::GenerationFailed);
        };

        if dry_run {
            writeln!(self.out, "Would amend last commit to:")?;
            writeln!(self.out, "{}", message)?;
            return Ok(Outcome::DryRun(message));
        }

        self.apply(CommitRequest::amend(message))
    }

    /// Consume the workflow and return its output sinks.
    pub fn into_output(self) -> (W, E) {
        (self.out, self.err)
    }

    async fn generate(&mut self, context: &str) -> Result<Option<String>, WorkflowError> {
        let prompt = build_prompt(context);
        match self.generator.try_generate(&prompt).await {
            Ok(message) => Ok(Some(message)),
            Err(e) => {
                writeln!(self.err, "Failed to generate conventional commit message: {}", e)?;
                Ok(None)
            }
        }
    }

    fn apply(&mut self, request: CommitRequest) -> Result<Outcome, WorkflowError> {
        let mutator = CommitMutator::new(&self.git);
        match mutator.apply(&request) {
            Ok(()) => match request.mode {
                CommitMode::Create => {
                    writeln!(self.out, "Commit created: {}", request.message)?;
                    Ok(Outcome::Committed(request.message))
                }
                CommitMode::Amend => {
                    writeln!(self.out, "Commit amended: {}", request.message)?;
                    Ok(Outcome::Amended(request.message))
                }
            },
            Err(e) => {
                writeln!(self.err, "{}", e)?;
                Ok(Outcome::MutationFailed(e.to_string()))
            }
        }
    }
}
