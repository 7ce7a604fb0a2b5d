//! gemini-commit - A CLI tool that writes conventional commit messages with Gemini.
//!
//! # Overview
//!
//! gemini-commit reads repository context from git (the staged diff, the last
//! commit, or any single commit), asks Google Gemini for a message in
//! `<type>(<scope>): <description>` form, and creates or amends the commit.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod workflow;

// Re-export commonly used types
pub use config::{Config, ConfigProvider, ConfigStore};
pub use error::{CommitError, ConfigError, GenerationError, GitError, WorkflowError};
pub use git::{CommitMode, CommitRequest, RepoContext, SystemGit};
pub use llm::{GeminiClient, MessageGenerator, TextGenerator};
pub use workflow::{CommitOptions, Outcome, Workflow};
