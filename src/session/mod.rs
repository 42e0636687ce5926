//! Round session.
//!
//! `RoundSession` owns the round state and is the only thing that mutates
//! it: raw input is normalized, empty input is dropped, the validator
//! decides, and accepted words are pushed to the front of the used list.

mod round;
mod snapshot;

pub use round::{RoundSession, RoundSessionBuilder, Submission};
pub use snapshot::SessionSnapshot;
