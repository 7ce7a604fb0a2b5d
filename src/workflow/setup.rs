//! `setup`: ask for the API key and emoji preference and save them.

use std::io::Write;

use crate::config::{Config, ConfigStore, DEFAULT_MODEL};
use crate::error::{ConfigError, WorkflowError};

use super::Outcome;
use super::prompter::Prompter;

/// Run the setup workflow against `store`.
///
/// A model already chosen in an existing config file is kept. Save failures
/// are returned as errors; the process treats them as fatal.
pub fn run_setup<P, W>(store: &ConfigStore, prompter: &P, out: &mut W) -> Result<Outcome, WorkflowError>
where
    P: Prompter + ?Sized,
    W: Write,
{
    let api_key = prompter.required_input("Please enter your Gemini API key")?;
    if api_key.trim().is_empty() {
        return Err(ConfigError::Invalid {
            path: store.path().to_path_buf(),
        }
        .into());
    }

    let use_emojis = prompter.confirm("Do you use emojis in your commits?", true)?;

    let model = store
        .load()
        .map(|existing| existing.model)
        .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let config = Config {
        api_key: api_key.trim().to_string(),
        use_emojis,
        model,
    };
    store.save(&config)?;

    writeln!(out, "Configuration saved to {}", store.path().display())?;
    writeln!(
        out,
        "Emojis in commits: {}",
        if use_emojis { "yes" } else { "no" }
    )?;

    Ok(Outcome::Configured)
}
