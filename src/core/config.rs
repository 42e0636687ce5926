//! Round configuration.
//!
//! Sessions are configured at construction with:
//! - the dictionary language tag passed to every realness lookup
//! - the fallback root word used when no word list is available
//! - whether the built-in root words are tried before that fallback word
//! - an optional RNG seed for reproducible root-word selection

use serde::{Deserialize, Serialize};

use super::word::normalize;

/// Language tag used for dictionary lookups unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Root word used when the word-list source is empty or unavailable.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Configuration for a round session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Language tag handed to the dictionary checker.
    pub language: String,

    /// Root word for rounds that cannot draw from the word list.
    pub fallback_word: String,

    /// Draw from the built-in root words when the word list is empty or
    /// unavailable, before resorting to `fallback_word`.
    pub builtin_fallback: bool,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            fallback_word: FALLBACK_ROOT_WORD.to_string(),
            builtin_fallback: false,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the fallback root word.
    ///
    /// The word is normalized. An empty result is stored as-is;
    /// `RoundSession::new` replaces it with [`FALLBACK_ROOT_WORD`] and logs
    /// a warning.
    #[must_use]
    pub fn with_fallback_word(mut self, word: &str) -> Self {
        self.fallback_word = normalize(word);
        self
    }

    /// Try the built-in root words before the single fallback word.
    #[must_use]
    pub fn with_builtin_fallback(mut self) -> Self {
        self.builtin_fallback = true;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::new();
        assert_eq!(config.language, "en");
        assert_eq!(config.fallback_word, "silkworm");
        assert_eq!(config.seed, None);
        assert!(!config.builtin_fallback);
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new()
            .with_language("en_GB")
            .with_fallback_word("  Elephant ")
            .with_seed(7);

        assert_eq!(config.language, "en_GB");
        assert_eq!(config.fallback_word, "elephant");
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_empty_fallback_word_is_stored() {
        let config = RoundConfig::new().with_fallback_word("   ");
        assert_eq!(config.fallback_word, "");
    }

    #[test]
    fn test_builtin_fallback_flag() {
        assert!(!RoundConfig::new().builtin_fallback);
        assert!(RoundConfig::new().with_builtin_fallback().builtin_fallback);

        let config: RoundConfig = serde_json::from_str(r#"{"builtin_fallback": true}"#).unwrap();
        assert!(config.builtin_fallback);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RoundConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.language, DEFAULT_LANGUAGE);
        assert_eq!(config.fallback_word, FALLBACK_ROOT_WORD);
        assert_eq!(config.seed, Some(3));
    }
}
