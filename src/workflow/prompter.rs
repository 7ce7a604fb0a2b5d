//! Interactive terminal prompts.

use dialoguer::{Confirm, Input};

use crate::error::WorkflowError;

/// Questions the workflows ask the user.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, WorkflowError>;

    /// Free-text answer; re-asks until the answer is non-empty.
    fn required_input(&self, prompt: &str) -> Result<String, WorkflowError>;
}

/// Prompter backed by dialoguer on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, WorkflowError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|_| WorkflowError::Cancelled)
    }

    fn required_input(&self, prompt: &str) -> Result<String, WorkflowError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("A value is required.")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(|_| WorkflowError::Cancelled)
    }
}
