//! # word-scramble
//!
//! Word-validation core and round session for a root-word anagram game.
//!
//! The player is given a root word and submits shorter words built from its
//! letters. A submission is accepted when it is:
//!
//! 1. not already used this round,
//! 2. not the root word itself,
//! 3. spelled from the root word's letters, each used at most as often as it appears,
//! 4. a real word according to the configured dictionary.
//!
//! Accepted words score one point per letter.
//!
//! ## Design Principles
//!
//! 1. **Pure validation**: [`validation::validate`] reads round state and
//!    returns a verdict. It never mutates anything.
//!
//! 2. **Explicit state**: [`RoundState`] is a serializable value object.
//!    Only an [`Accept`] verdict can add a word to it.
//!
//! 3. **Injected collaborators**: the spell checker and the root-word pool
//!    sit behind [`DictionaryChecker`] and [`WordListSource`], so tests can
//!    swap in deterministic fakes.
//!
//! ## Modules
//!
//! - `core`: Round state, configuration, RNG, normalization
//! - `validation`: The four ordered checks
//! - `dictionary`: Dictionary trait and a word-list implementation
//! - `source`: Root-word sources
//! - `session`: Round orchestration and snapshots
//! - `error`: Error types

pub mod core;
pub mod dictionary;
pub mod error;
pub mod session;
pub mod source;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    letter_count, normalize, RoundConfig, RoundRng, RoundRngState, RoundState, DEFAULT_LANGUAGE,
    FALLBACK_ROOT_WORD,
};

pub use crate::dictionary::{DictionaryChecker, FnDictionary, WordListDictionary};

pub use crate::error::{RoundStateError, SnapshotError, WordListError};

pub use crate::session::{RoundSession, RoundSessionBuilder, SessionSnapshot, Submission};

pub use crate::source::{FileWordList, StaticWordList, WordListSource, DEFAULT_ROOT_WORDS};

pub use crate::validation::{validate, Accept, Alert, LetterPool, RejectReason, WordValidator};
