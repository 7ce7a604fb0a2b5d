//! Prompt construction for AI-generated commit messages.

/// Conventional commit types offered to the model, with their descriptions.
pub const COMMIT_TYPES: &[(&str, &str)] = &[
    ("feat", "A new feature"),
    ("fix", "A bug fix"),
    ("docs", "Documentation changes"),
    ("style", "Changes that don't affect code behavior (formatting, etc.)"),
    ("refactor", "Code changes that neither fix bugs nor add features"),
    ("perf", "Performance improvements"),
    ("test", "Adding or modifying tests"),
    ("chore", "Changes to build process or auxiliary tools"),
];

/// Build the prompt for generating a conventional commit message.
///
/// The same template serves staged diffs, commit logs and `git show` output;
/// only `context` varies, and it is appended verbatim at the end. Pure and
/// deterministic.
pub fn build_prompt(context: &str) -> String {
    let types: String = COMMIT_TYPES
        .iter()
        .map(|(name, description)| format!("- {name}: {description}\n"))
        .collect();

    format!(
        "Based on the following git changes, create a conventional commit message.\n\
         Follow the format: <type>(<optional scope>): <description>\n\
         Types include:\n\
         {types}\
         Make the description concise but descriptive.\n\
         Only return the commit message, nothing else.\n\
         Changes:\n\
         {context}\n"
    )
}
