//! Word validation core.
//!
//! A candidate is checked against the round in a fixed order:
//! originality, not-root, constructibility, then realness.
//! Validation is pure: it reads round state and returns a verdict,
//! and the caller decides what to do with an [`Accept`].

pub mod letters;
pub mod validator;

pub use letters::LetterPool;
pub use validator::{
    is_constructible, is_not_root, is_original, is_real, validate, Accept, Alert, RejectReason,
    WordValidator,
};
