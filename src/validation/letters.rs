//! Letter multiset for the constructibility check.

use smallvec::SmallVec;

/// The letters of a root word, as a multiset that letters can be taken from.
///
/// A letter is one `char`. Combining marks are separate letters, so a
/// decomposed accent must be present in the root to be spent.
///
/// SmallVec keeps typical root words (up to 16 letters) off the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Build a pool from every char of `word`.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.chars().collect(),
        }
    }

    /// Remove one occurrence of `letter`. Returns `false` if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Check whether `word` can be spelled from this pool without reusing
    /// any letter beyond its multiplicity.
    ///
    /// Stops at the first letter that is not available.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|c| remaining.take(c))
    }

    /// Number of letters left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
