//! Core types: round state, configuration, RNG, word normalization.

pub mod config;
pub mod rng;
pub mod state;
pub mod word;

pub use config::{RoundConfig, DEFAULT_LANGUAGE, FALLBACK_ROOT_WORD};
pub use rng::{RoundRng, RoundRngState};
pub use state::RoundState;
pub use word::{letter_count, normalize};
