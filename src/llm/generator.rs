//! Commit message generation on top of a text generator.

use tracing::{debug, warn};

use crate::commit::{finalize_message, is_conventional};
use crate::config::{Config, ConfigProvider};
use crate::error::GenerationError;

use super::{GeminiClient, TextGenerator};

/// Produces finished commit messages from prompts.
///
/// Holds the user's emoji preference from the configuration it was built
/// with. Each call is independent: one request, no retry.
pub struct MessageGenerator<T: TextGenerator> {
    client: T,
    use_emojis: bool,
}

impl MessageGenerator<GeminiClient> {
    /// Build a Gemini-backed generator from the injected configuration.
    ///
    /// Fails with `CredentialUnavailable` before any network I/O if the
    /// configuration cannot be loaded.
    pub fn connect(provider: &dyn ConfigProvider) -> Result<Self, GenerationError> {
        let config = provider
            .config()
            .map_err(GenerationError::CredentialUnavailable)?;
        let client = GeminiClient::from_config(&config)?;
        Ok(Self::new(client, &config))
    }
}

impl<T: TextGenerator> MessageGenerator<T> {
    pub fn new(client: T, config: &Config) -> Self {
        Self::with_emojis(client, config.use_emojis)
    }

    pub fn with_emojis(client: T, use_emojis: bool) -> Self {
        Self { client, use_emojis }
    }

    pub fn use_emojis(&self) -> bool {
        self.use_emojis
    }

    /// Generate a commit message, or `None` if generation failed.
    ///
    /// The cause is logged at debug level.
    pub async fn generate(&self, prompt: &str) -> Option<String> {
        match self.try_generate(prompt).await {
            Ok(message) => Some(message),
            Err(e) => {
                debug!("Failed to generate commit message: {}", e);
                None
            }
        }
    }

    /// Like [`generate`](Self::generate) but keeps the error.
    pub async fn try_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let raw = self.client.generate_text(prompt).await?;
        let message =
            finalize_message(&raw, self.use_emojis).ok_or(GenerationError::EmptyResponse)?;

        if !is_conventional(&message) {
            warn!(
                "Generated message does not look like a conventional commit: {}",
                message.lines().next().unwrap_or_default()
            );
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::EMOJI_MARKER;
    use crate::error::ConfigError;
    use crate::llm::MockTextGenerator;

    fn returning(text: &'static str) -> MockTextGenerator {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_text()
            .times(1)
            .returning(move |_| Ok(text.to_string()));
        mock
    }

    #[tokio::test]
    async fn test_generate_trims_output() {
        let generator = MessageGenerator::with_emojis(returning("  fix: typo \n"), false);
        assert_eq!(generator.generate("p").await.unwrap(), "fix: typo");
    }

    #[tokio::test]
    async fn test_generate_with_emojis_prefixes_marker() {
        let generator = MessageGenerator::new(returning("feat: add x"), &Config::new("k", true));
        let message = generator.generate("p").await.unwrap();
        assert!(message.starts_with(&format!("{EMOJI_MARKER} ")));
        assert_eq!(message, "🎉 feat: add x");
    }

    #[tokio::test]
    async fn test_generate_without_emojis_has_no_marker() {
        let generator = MessageGenerator::new(returning("feat: add x"), &Config::new("k", false));
        let message = generator.generate("p").await.unwrap();
        assert!(!message.starts_with(EMOJI_MARKER));
    }

    #[tokio::test]
    async fn test_generate_passes_prompt_through() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_text()
            .withf(|prompt| prompt == "the prompt")
            .times(1)
            .returning(|_| Ok("chore: x".to_string()));

        let generator = MessageGenerator::with_emojis(mock, false);
        assert!(generator.generate("the prompt").await.is_some());
    }

    #[tokio::test]
    async fn test_generate_failure_returns_none_without_retry() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_text()
            .times(1)
            .returning(|_| Err(GenerationError::RateLimited("quota".to_string())));

        let generator = MessageGenerator::with_emojis(mock, true);
        assert!(generator.generate("p").await.is_none());
    }

    #[tokio::test]
    async fn test_generate_blank_output_is_none() {
        let generator = MessageGenerator::with_emojis(returning("   \n"), true);
        assert!(generator.generate("p").await.is_none());
    }

    #[tokio::test]
    async fn test_try_generate_blank_output_is_empty_response() {
        let generator = MessageGenerator::with_emojis(returning(""), false);
        assert!(matches!(
            generator.try_generate("p").await,
            Err(GenerationError::EmptyResponse)
        ));
    }

    struct MissingConfig;

    impl ConfigProvider for MissingConfig {
        fn config(&self) -> Result<Config, ConfigError> {
            Err(ConfigError::HomeNotFound)
        }
    }

    #[test]
    fn test_connect_without_config_is_credential_unavailable() {
        let result = MessageGenerator::connect(&MissingConfig);
        assert!(matches!(
            result,
            Err(GenerationError::CredentialUnavailable(_))
        ));
    }

    #[test]
    fn test_connect_uses_config_preferences() {
        let generator = MessageGenerator::connect(&Config::new("key", true)).unwrap();
        assert!(generator.use_emojis());
    }
}
