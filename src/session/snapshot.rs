//! In-memory session snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{RoundRngState, RoundState};
use crate::error::SnapshotError;

/// Round state plus RNG position, enough to resume a session exactly.
///
/// Decoding checks the round invariants, so a decoded snapshot is always
/// safe to hand to [`RoundSession::restore`](crate::session::RoundSession::restore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: RoundState,
    pub rng: RoundRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundRng;

    #[test]
    fn test_bytes_round_trip() {
        let snapshot = SessionSnapshot {
            state: RoundState::new("silkworm"),
            rng: RoundRng::new(5).state(),
        };

        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(SessionSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_truncated_bytes() {
        let snapshot = SessionSnapshot {
            state: RoundState::new("silkworm"),
            rng: RoundRng::new(5).state(),
        };

        let bytes = snapshot.to_bytes().unwrap();
        let err = SessionSnapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }

    /// Same wire shape as `SessionSnapshot`, without the state checks.
    #[derive(Serialize)]
    struct UncheckedSnapshot {
        state: UncheckedState,
        rng: RoundRngState,
    }

    #[derive(Serialize)]
    struct UncheckedState {
        root_word: String,
        used_words: Vec<String>,
        score: u32,
    }

    fn encode_unchecked(root_word: &str, used_words: &[&str], score: u32) -> Vec<u8> {
        let snapshot = UncheckedSnapshot {
            state: UncheckedState {
                root_word: root_word.to_string(),
                used_words: used_words.iter().map(|w| w.to_string()).collect(),
                score,
            },
            rng: RoundRng::new(5).state(),
        };
        bincode::serialize(&snapshot).unwrap()
    }

    #[test]
    fn test_decode_consistent_unchecked_bytes() {
        let bytes = encode_unchecked("silkworm", &["worm", "silk"], 8);
        let snapshot = SessionSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(snapshot.state.score(), 8);
    }

    #[test]
    fn test_decode_rejects_root_in_used_words() {
        let bytes = encode_unchecked("silkworm", &["silkworm", "zzz"], 11);
        let err = SessionSnapshot::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_empty_root() {
        let bytes = encode_unchecked("", &[], 0);
        assert!(SessionSnapshot::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_decode_rejects_inflated_score() {
        let bytes = encode_unchecked("silkworm", &["silk"], 999);
        assert!(SessionSnapshot::from_bytes(&bytes).is_err());
    }
}
