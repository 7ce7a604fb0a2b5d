//! Git integration via the system `git` binary.

pub mod context;
pub mod mutate;
pub mod runner;

pub use context::RepoContext;
pub use mutate::{CommitMode, CommitMutator, CommitRequest};
pub use runner::{GitRunner, SystemGit, check_git_installed};
