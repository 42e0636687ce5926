//! Candidate normalization and letter counting.
//!
//! Every comparison in the game is case-sensitive on normalized strings,
//! so raw player input must pass through [`normalize`] first.

/// Lowercase a raw submission and trim surrounding whitespace.
///
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Number of letters in a word, counted in Unicode scalar values.
///
/// This is both the points a word scores and the glyph shown beside it
/// in the used-word list. Grapheme clusters are not merged: a decomposed
/// `e` plus combining accent counts as two letters, matching how
/// [`LetterPool`](crate::validation::LetterPool) spends letters.
#[must_use]
pub fn letter_count(word: &str) -> u32 {
    word.chars().count() as u32
}
