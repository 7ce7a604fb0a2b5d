//! Generative text service access.

pub mod gemini;
pub mod generator;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use gemini::GeminiClient;
pub use generator::MessageGenerator;

/// Trait for single-shot text completion.
///
/// This abstraction allows mocking the generative service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the raw completion text.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}
