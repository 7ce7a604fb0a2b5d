//! Post-processing of generated commit messages.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Decorative marker prepended when the user enabled emojis.
pub const EMOJI_MARKER: &str = "🎉";

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(feat|fix|docs|style|refactor|perf|test|chore|build|ci|revert)(\([^)]+\))?!?: \S")
        .expect("conventional commit pattern is valid")
});

/// Turn raw service output into a usable commit message.
///
/// Trims surrounding whitespace and a wrapping markdown code fence, returns
/// `None` if nothing is left, and prepends [`EMOJI_MARKER`] plus one space
/// when `use_emojis` is set.
pub fn finalize_message(raw: &str, use_emojis: bool) -> Option<String> {
    let message = strip_code_fence(raw.trim()).trim();
    if message.is_empty() {
        return None;
    }

    Some(decorate(message, use_emojis))
}

/// Prefix `message` with the marker when `use_emojis` is set.
pub fn decorate(message: &str, use_emojis: bool) -> String {
    if use_emojis {
        format!("{EMOJI_MARKER} {message}")
    } else {
        message.to_string()
    }
}

/// Whether the first line looks like `<type>(<scope>): <description>`.
///
/// Used for diagnostics only; messages that fail this check are still used.
pub fn is_conventional(message: &str) -> bool {
    let first_line = message.lines().next().unwrap_or("");
    let first_line = first_line
        .strip_prefix(EMOJI_MARKER)
        .map(str::trim_start)
        .unwrap_or(first_line);
    CONVENTIONAL_RE.is_match(first_line)
}

/// Remove a ```` ``` ```` fence wrapping the whole text, if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return text;
    };

    // Drop an info string such as ```text on the opening line
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim().contains(' ') => body,
        _ => inner,
    }
}
