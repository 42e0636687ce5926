//! Error types.
//!
//! Rejected candidates are not errors; see
//! [`RejectReason`](crate::validation::RejectReason). The types here cover
//! loading word lists, checking restored round state, and encoding
//! session snapshots.

use std::path::PathBuf;

/// Failure loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The word-list file could not be read.
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A deserialized round state that breaks a round invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundStateError {
    #[error("root word is empty")]
    EmptyRootWord,

    #[error("root word {0:?} is in the used-word list")]
    RootWordUsed(String),

    #[error("score {score} does not match used-word letter total {expected}")]
    ScoreMismatch { score: u32, expected: u32 },
}

/// Failure encoding or decoding a session snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}
