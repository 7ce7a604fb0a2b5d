//! Error types for gemini-commit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Configuration file {} is missing or unreadable ({reason}). Run `gemini-commit setup` first.",
        path.display()
    )]
    Missing { path: PathBuf, reason: String },

    #[error("API key not found in {}. Run `gemini-commit setup` again.", path.display())]
    Invalid { path: PathBuf },

    #[error("Failed to save configuration to {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the home directory for the configuration file")]
    HomeNotFound,
}

/// Errors from the generative text service.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No API credential available: {0}")]
    CredentialUnavailable(#[source] ConfigError),

    #[error("Network error talking to Gemini: {0}")]
    Network(String),

    #[error("Gemini rejected the API key: {0}")]
    Authentication(String),

    #[error("Gemini quota exhausted or rate limited: {0}")]
    RateLimited(String),

    #[error("Gemini API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned a malformed response: {0}")]
    InvalidResponse(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

/// Errors from running the git binary.
///
/// The context reader collapses all of these into an empty string; they are
/// kept distinct for diagnostics.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found on PATH")]
    NotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("git {0} produced no output")]
    NoOutput(String),

    #[error("'{0}' is not a commit identifier")]
    InvalidIdentifier(String),
}

/// Errors from creating or amending commits.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] GitError),

    #[error("Failed to amend last commit: {0}")]
    AmendFailed(#[source] GitError),

    #[error("Failed to stage changes: {0}")]
    StageFailed(#[source] GitError),
}

/// Errors that end a workflow before it reaches a terminal outcome.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
