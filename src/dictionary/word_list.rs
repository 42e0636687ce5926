//! Word-list backed dictionary.
//!
//! A set of known words for one language, loaded from newline-delimited
//! text. Lines are trimmed and lowercased; blank lines and lines starting
//! with `#` are skipped.

use std::path::Path;

use rustc_hash::FxHashSet;

use super::checker::DictionaryChecker;
use crate::error::WordListError;
use crate::source::parse_word_list;

/// A dictionary that knows exactly the words it was loaded with.
///
/// Answers `false` for any language other than its own. Language tags are
/// compared ignoring ASCII case.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::{DictionaryChecker, WordListDictionary};
///
/// let dict = WordListDictionary::from_text("en", "silk\nworm\n# comment\n");
/// assert!(dict.is_known_word("silk", "en"));
/// assert!(!dict.is_known_word("silk", "de"));
/// assert_eq!(dict.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Create an empty dictionary for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            words: FxHashSet::default(),
        }
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new(language);
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// Build a dictionary from newline-delimited text.
    pub fn from_text(language: impl Into<String>, content: &str) -> Self {
        Self::from_words(language, parse_word_list(content))
    }

    /// Load a dictionary from a newline-delimited file.
    pub fn from_file(language: impl Into<String>, path: &Path) -> Result<Self, WordListError> {
        let content = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(language, &content))
    }

    /// Add a word. It is normalized first; empty words are ignored.
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = crate::core::normalize(word);
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// The language this dictionary answers for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check membership without a language check.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_words_normalizes() {
        let dict = WordListDictionary::from_words("en", ["Silk", " worm ", "", "silk"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("silk"));
        assert!(dict.contains("worm"));
    }

    #[test]
    fn test_language_match_ignores_case() {
        let dict = WordListDictionary::from_words("en", ["silk"]);
        assert!(dict.is_known_word("silk", "EN"));
        assert!(!dict.is_known_word("silk", "fr"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let dict = WordListDictionary::from_words("en", ["silk"]);
        assert!(!dict.is_known_word("SILK", "en"));
        assert!(!dict.is_known_word("sil", "en"));
    }

    #[test]
    fn test_insert() {
        let mut dict = WordListDictionary::new("en");
        assert!(dict.is_empty());
        assert!(dict.insert("milk"));
        assert!(!dict.insert("MILK"));
        assert!(!dict.insert("   "));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.language(), "en");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\nworm\n\n# not a word\nmilk").unwrap();

        let dict = WordListDictionary::from_file("en", file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.is_known_word("worm", "en"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = WordListDictionary::from_file("en", &path).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }
}
