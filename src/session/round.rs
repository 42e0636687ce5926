//! Round session: owns round state and applies validator verdicts.

use tracing::{debug, info, warn};

use super::snapshot::SessionSnapshot;
use crate::core::{normalize, RoundConfig, RoundRng, RoundState, FALLBACK_ROOT_WORD};
use crate::dictionary::DictionaryChecker;
use crate::source::{WordListSource, DEFAULT_ROOT_WORDS};
use crate::validation::{Alert, RejectReason, WordValidator};

/// Result of submitting raw input to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The word was accepted and scored.
    Accepted {
        /// The normalized word.
        word: String,
        /// Points added to the score.
        points: u32,
    },
    /// The word was rejected; state is unchanged.
    Rejected(RejectReason),
    /// The input was empty after normalization; nothing happened.
    Ignored,
}

impl Submission {
    /// Check if the submission was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Submission::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    /// The alert to present, if the submission was rejected.
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        self.reason().map(RejectReason::alert)
    }
}

/// A single player's game: the current round plus everything needed to
/// validate submissions and start new rounds.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::session::{RoundSession, Submission};
/// use word_scramble::source::StaticWordList;
///
/// let dictionary = WordListDictionary::from_words("en", ["silk", "worm", "milk"]);
/// let source = StaticWordList::new(["silkworm"]);
/// let mut session = RoundSession::builder().seed(1).build(dictionary, source);
///
/// assert_eq!(session.root_word(), "silkworm");
/// assert_eq!(session.submit(" Silk "), Submission::Accepted { word: "silk".into(), points: 4 });
/// assert_eq!(session.score(), 4);
/// ```
#[derive(Debug)]
pub struct RoundSession<D, S> {
    config: RoundConfig,
    validator: WordValidator<D>,
    source: S,
    state: RoundState,
    rng: RoundRng,
}

impl RoundSession<(), ()> {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> RoundSessionBuilder {
        RoundSessionBuilder::new()
    }
}

impl<D, S> RoundSession<D, S>
where
    D: DictionaryChecker,
    S: WordListSource,
{
    /// Create a session and start its first round.
    pub fn new(mut config: RoundConfig, dictionary: D, source: S) -> Self {
        config.fallback_word = normalize(&config.fallback_word);
        if config.fallback_word.is_empty() {
            warn!("configured fallback word is empty, using {FALLBACK_ROOT_WORD}");
            config.fallback_word = FALLBACK_ROOT_WORD.to_string();
        }

        let rng = match config.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_entropy(),
        };
        let validator = WordValidator::new(dictionary, config.language.clone());
        let state = RoundState::new(config.fallback_word.clone());

        let mut session = Self {
            config,
            validator,
            source,
            state,
            rng,
        };
        session.new_round();
        session
    }

    /// Submit raw player input.
    ///
    /// The input is lowercased and trimmed. Empty input is ignored;
    /// otherwise the word is validated and, if accepted, recorded.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let word = normalize(raw);
        if word.is_empty() {
            return Submission::Ignored;
        }

        match self.validator.validate_round(&word, &self.state) {
            Ok(accept) => {
                let points = self.state.apply(accept);
                debug!(word = %word, points, score = self.state.score(), "candidate accepted");
                Submission::Accepted { word, points }
            }
            Err(reason) => {
                debug!(word = %word, reason = reason.code(), "candidate rejected");
                Submission::Rejected(reason)
            }
        }
    }

    /// Start a new round with a freshly drawn root word.
    ///
    /// Clears used words and resets the score. Returns the new root word.
    pub fn new_round(&mut self) -> &str {
        let root_word = self.draw_root_word();
        info!(root_word = %root_word, "starting new round");
        self.state.reset(root_word);
        self.state.root_word()
    }

    fn draw_root_word(&mut self) -> String {
        let words = match self.source.load_word_list() {
            Ok(words) => words,
            Err(err) => {
                warn!(error = %err, "word list unavailable");
                Vec::new()
            }
        };

        // Custom sources may hand back raw lines.
        let words: Vec<String> = words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();

        if let Some(word) = self.rng.choose(&words) {
            debug!(pool_size = words.len(), "drew root word from word list");
            return word.clone();
        }

        if self.config.builtin_fallback {
            if let Some(word) = self.rng.choose(DEFAULT_ROOT_WORDS) {
                warn!(root_word = %word, "word list empty, drew from built-in root words");
                return (*word).to_string();
            }
        }

        warn!(fallback = %self.config.fallback_word, "word list empty, using fallback root word");
        self.config.fallback_word.clone()
    }

    /// Capture round state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Restore round state and RNG position from a snapshot.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) {
        self.state = snapshot.state.clone();
        self.rng = RoundRng::from_state(&snapshot.rng);
        debug!(root_word = %self.state.root_word(), "restored session snapshot");
    }
}

impl<D, S> RoundSession<D, S> {
    /// The current round.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The current root word.
    #[must_use]
    pub fn root_word(&self) -> &str {
        self.state.root_word()
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &im::Vector<String> {
        self.state.used_words()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The dictionary used for realness checks.
    pub fn dictionary(&self) -> &D {
        self.validator.dictionary()
    }

    /// The root-word source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Builder for creating a [`RoundSession`].
#[derive(Clone, Debug, Default)]
pub struct RoundSessionBuilder {
    config: RoundConfig,
}

impl RoundSessionBuilder {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the language tag handed to the dictionary.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config = self.config.with_language(language);
        self
    }

    /// Set the root word used when no word list is available.
    ///
    /// Normalized on the way in. An empty word falls back to
    /// [`FALLBACK_ROOT_WORD`] when the session is built.
    pub fn fallback_word(mut self, word: &str) -> Self {
        self.config = self.config.with_fallback_word(word);
        self
    }

    /// Draw from the built-in root words before the fallback word.
    pub fn builtin_fallback(mut self) -> Self {
        self.config = self.config.with_builtin_fallback();
        self
    }

    /// Fix the RNG seed for reproducible root words.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Build the session and start its first round.
    pub fn build<D, S>(self, dictionary: D, source: S) -> RoundSession<D, S>
    where
        D: DictionaryChecker,
        S: WordListSource,
    {
        RoundSession::new(self.config, dictionary, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{FnDictionary, WordListDictionary};
    use crate::source::StaticWordList;

    fn silkworm_session() -> RoundSession<WordListDictionary, StaticWordList> {
        let dictionary = WordListDictionary::from_words("en", ["silk", "worm", "milk", "ilk"]);
        RoundSession::builder()
            .seed(42)
            .build(dictionary, StaticWordList::new(["silkworm"]))
    }

    #[test]
    fn test_first_round_starts_on_build() {
        let session = silkworm_session();
        assert_eq!(session.root_word(), "silkworm");
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_submit_accepts_and_scores() {
        let mut session = silkworm_session();

        assert!(session.submit("silk").is_accepted());
        assert!(session.submit("ilk").is_accepted());

        let words: Vec<_> = session.used_words().iter().cloned().collect();
        assert_eq!(words, vec!["ilk", "silk"]);
        assert_eq!(session.score(), 7);
    }

    #[test]
    fn test_submit_normalizes() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit("  WORM\n"),
            Submission::Accepted {
                word: "worm".to_string(),
                points: 4
            }
        );
    }

    #[test]
    fn test_empty_submission_is_ignored() {
        let mut session = silkworm_session();
        assert_eq!(session.submit(""), Submission::Ignored);
        assert_eq!(session.submit("   \t"), Submission::Ignored);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut session = silkworm_session();
        session.submit("silk");
        let before = session.state().clone();

        let outcome = session.submit("silk");
        assert_eq!(outcome.reason(), Some(RejectReason::AlreadyUsed));
        assert_eq!(outcome.alert().map(|a| a.title), Some("Already Used"));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_new_round_resets() {
        let mut session = silkworm_session();
        session.submit("silk");

        assert_eq!(session.new_round(), "silkworm");
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_empty_source_uses_fallback() {
        let session = RoundSession::builder()
            .fallback_word("Elephant")
            .build(FnDictionary::new(|_: &str, _: &str| true), StaticWordList::default());
        assert_eq!(session.root_word(), "elephant");
    }

    #[test]
    fn test_empty_fallback_word_uses_default() {
        let session = RoundSession::builder()
            .fallback_word("  ")
            .build(FnDictionary::new(|_: &str, _: &str| true), StaticWordList::default());
        assert_eq!(session.config().fallback_word, FALLBACK_ROOT_WORD);
        assert_eq!(session.root_word(), "silkworm");
    }

    #[test]
    fn test_empty_source_draws_builtin_words() {
        let mut session = RoundSession::builder()
            .seed(3)
            .fallback_word("zebra")
            .builtin_fallback()
            .build(FnDictionary::new(|_: &str, _: &str| true), StaticWordList::default());

        for _ in 0..20 {
            let root = session.root_word();
            assert!(DEFAULT_ROOT_WORDS.iter().any(|w| *w == root), "unexpected root {root}");
            session.new_round();
        }
    }

    #[test]
    fn test_source_words_win_over_builtin() {
        let session = RoundSession::builder()
            .seed(3)
            .builtin_fallback()
            .build(FnDictionary::new(|_: &str, _: &str| true), StaticWordList::new(["zebra"]));
        assert_eq!(session.root_word(), "zebra");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut session = silkworm_session();
        session.submit("silk");
        let snapshot = session.snapshot();

        session.submit("worm");
        session.new_round();
        session.restore(&snapshot);

        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words().len(), 1);
    }
}
