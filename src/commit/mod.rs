//! Conventional commit prompt and message handling.

pub mod message;
pub mod prompt;

pub use message::{EMOJI_MARKER, decorate, finalize_message, is_conventional};
pub use prompt::{COMMIT_TYPES, build_prompt};
