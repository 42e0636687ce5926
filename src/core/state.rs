//! Round state: root word, used words and score.
//!
//! `RoundState` is a plain value object. It is passed into the validator
//! by reference and only changes when an [`Accept`] verdict is applied,
//! so every word in the used list passed all four checks when it went in.
//!
//! Uses an `im::Vector` for the used-word list so snapshots clone in O(1)
//! and the newest word can be pushed to the front cheaply.
//!
//! Deserialization goes through `RawRoundState` and rejects states with
//! an empty root word, the root word among the used words, or a score that
//! is not the used words' letter total.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::word::letter_count;
use crate::error::RoundStateError;
use crate::validation::Accept;

/// State of a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundState")]
pub struct RoundState {
    root_word: String,

    /// Accepted words, most recent first.
    used_words: Vector<String>,

    /// Sum of the letter counts of every accepted word.
    score: u32,
}

/// Unchecked wire form of [`RoundState`].
#[derive(Deserialize)]
struct RawRoundState {
    root_word: String,
    used_words: Vector<String>,
    score: u32,
}

impl TryFrom<RawRoundState> for RoundState {
    type Error = RoundStateError;

    fn try_from(raw: RawRoundState) -> Result<Self, Self::Error> {
        if raw.root_word.is_empty() {
            return Err(RoundStateError::EmptyRootWord);
        }
        if raw.used_words.iter().any(|w| *w == raw.root_word) {
            return Err(RoundStateError::RootWordUsed(raw.root_word));
        }
        let expected = raw
            .used_words
            .iter()
            .fold(0u32, |total, w| total.saturating_add(letter_count(w)));
        if raw.score != expected {
            return Err(RoundStateError::ScoreMismatch {
                score: raw.score,
                expected,
            });
        }

        Ok(Self {
            root_word: raw.root_word,
            used_words: raw.used_words,
            score: raw.score,
        })
    }
}

impl RoundState {
    /// Start a round with the given root word.
    ///
    /// The root word must already be normalized. Panics if it is empty.
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        let root_word = root_word.into();
        assert!(!root_word.is_empty(), "Root word must not be empty");

        Self {
            root_word,
            used_words: Vector::new(),
            score: 0,
        }
    }

    /// The word all candidates draw their letters from.
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &Vector<String> {
        &self.used_words
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check whether a word was already accepted this round.
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Apply an accepted candidate: push it to the front and add its points.
    ///
    /// Returns the points added.
    pub fn apply(&mut self, accept: Accept) -> u32 {
        let points = accept.points();
        self.used_words.push_front(accept.into_word());
        self.score = self.score.saturating_add(points);
        points
    }

    /// Begin a new round: replace the root word, clear used words, zero the score.
    ///
    /// Panics if `root_word` is empty.
    pub fn reset(&mut self, root_word: impl Into<String>) {
        *self = Self::new(root_word);
    }

    /// Rows for the used-word list: each word with its letter count.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.used_words.iter().map(|w| (w.as_str(), letter_count(w)))
    }

    /// Score line shown under the used-word list.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Your current score is: {}", self.score)
    }
}
