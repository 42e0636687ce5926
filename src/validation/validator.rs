//! Word validation: four ordered checks over a normalized candidate.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. Originality: not already used this round
//! 2. Not-root: not the root word itself
//! 3. Constructibility: spelled from the root word's letters
//! 4. Realness: known to the dictionary
//!
//! The dictionary lookup is the only external call and always runs last.
//! Nothing here mutates round state; callers apply the returned [`Accept`].

use serde::{Deserialize, Serialize};

use super::letters::LetterPool;
use crate::core::letter_count;
use crate::core::state::RoundState;
use crate::dictionary::DictionaryChecker;

/// Why a candidate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The word was already accepted this round.
    AlreadyUsed,
    /// The word is the root word.
    IsRootWord,
    /// The word needs letters the root word does not have.
    NotConstructible,
    /// The dictionary does not know the word.
    NotAWord,
}

impl RejectReason {
    /// All reasons, in check order.
    pub const ALL: [RejectReason; 4] = [
        RejectReason::AlreadyUsed,
        RejectReason::IsRootWord,
        RejectReason::NotConstructible,
        RejectReason::NotAWord,
    ];

    /// Stable reason code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::AlreadyUsed => "already_used",
            RejectReason::IsRootWord => "is_root_word",
            RejectReason::NotConstructible => "not_constructible",
            RejectReason::NotAWord => "not_a_word",
        }
    }

    /// Alert title shown to the player.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            RejectReason::AlreadyUsed => "Already Used",
            RejectReason::IsRootWord => "Root Word!",
            RejectReason::NotConstructible => "Not Possible",
            RejectReason::NotAWord => "Not Real",
        }
    }

    /// Alert message shown to the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::AlreadyUsed => "You've already used that word.",
            RejectReason::IsRootWord => "You can't use the root word.",
            RejectReason::NotConstructible => {
                "You can't construct that word with the letters available."
            }
            RejectReason::NotAWord => "I'm sorry, that is not a real word.",
        }
    }

    /// Title and message together.
    #[must_use]
    pub fn alert(self) -> Alert {
        Alert {
            title: self.title(),
            message: self.message(),
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A title/message pair for presenting a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

/// A candidate that passed every check.
///
/// Only the validator hands these out; [`RoundState::apply`] consumes one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accept {
    word: String,
    points: u32,
}

impl Accept {
    pub(crate) fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let points = letter_count(&word);
        Self { word, points }
    }

    /// The accepted word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Points the word scores: its letter count.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Take the accepted word.
    #[must_use]
    pub fn into_word(self) -> String {
        self.word
    }
}

/// Originality check: `candidate` is not in `used_words`.
pub fn is_original<I>(candidate: &str, used_words: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    !used_words.into_iter().any(|w| w.as_ref() == candidate)
}

/// Not-root check.
#[must_use]
pub fn is_not_root(candidate: &str, root_word: &str) -> bool {
    candidate != root_word
}

/// Constructibility check: `candidate` is a sub-multiset of `root_word`'s letters.
#[must_use]
pub fn is_constructible(candidate: &str, root_word: &str) -> bool {
    LetterPool::new(root_word).can_spell(candidate)
}

/// Realness check: the dictionary knows `candidate` in `language`.
pub fn is_real<D>(candidate: &str, dictionary: &D, language: &str) -> bool
where
    D: DictionaryChecker + ?Sized,
{
    dictionary.is_known_word(candidate, language)
}

/// Validate a normalized, non-empty candidate against a round.
///
/// Returns the first failing check's reason, or [`Accept`] if all pass.
/// The dictionary is only consulted when the three local checks pass.
pub fn validate<I, D>(
    candidate: &str,
    root_word: &str,
    used_words: I,
    dictionary: &D,
    language: &str,
) -> Result<Accept, RejectReason>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    D: DictionaryChecker + ?Sized,
{
    if !is_original(candidate, used_words) {
        return Err(RejectReason::AlreadyUsed);
    }
    if !is_not_root(candidate, root_word) {
        return Err(RejectReason::IsRootWord);
    }
    if !is_constructible(candidate, root_word) {
        return Err(RejectReason::NotConstructible);
    }
    if !is_real(candidate, dictionary, language) {
        return Err(RejectReason::NotAWord);
    }
    Ok(Accept::new(candidate))
}

/// A validator bound to a dictionary and language.
///
/// Holds no round state; each call is independent.
#[derive(Clone, Debug)]
pub struct WordValidator<D> {
    dictionary: D,
    language: String,
}

impl<D> WordValidator<D> {
    /// Create a validator.
    pub fn new(dictionary: D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// The dictionary this validator consults.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// The language tag passed to the dictionary.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl<D: DictionaryChecker> WordValidator<D> {
    /// Validate against an explicit root word and used-word list.
    pub fn validate<I>(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: I,
    ) -> Result<Accept, RejectReason>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        validate(candidate, root_word, used_words, &self.dictionary, &self.language)
    }

    /// Validate against a round state.
    pub fn validate_round(&self, candidate: &str, state: &RoundState) -> Result<Accept, RejectReason> {
        self.validate(candidate, state.root_word(), state.used_words())
    }
}
