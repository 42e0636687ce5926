//! In-memory and file-backed word lists.

use std::path::{Path, PathBuf};

use super::WordListSource;
use crate::core::normalize;
use crate::error::WordListError;

/// Built-in root words for callers without a word-list resource.
pub const DEFAULT_ROOT_WORDS: &[&str] = &[
    "silkworm", "absolute", "blizzard", "carnival", "doughnut", "elephant", "football",
    "hospital", "marathon", "mountain", "notebook", "painting", "sandwich", "squirrel",
    "treasure", "triangle",
];

/// Parse newline-delimited text into normalized words.
///
/// Each line is lowercased and trimmed. Blank lines and lines starting
/// with `#` are skipped.
///
/// ```
/// use word_scramble::source::parse_word_list;
///
/// let words = parse_word_list("Silkworm\r\n\n  elephant \n# skip\n");
/// assert_eq!(words, vec!["silkworm", "elephant"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|w| !w.is_empty() && !w.starts_with('#'))
        .collect()
}

/// A fixed, in-memory word list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticWordList {
    words: Vec<String>,
}

impl StaticWordList {
    /// Build from any sequence of words. Words are normalized and blanks dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Build from newline-delimited text.
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        Self {
            words: parse_word_list(content),
        }
    }

    /// The built-in [`DEFAULT_ROOT_WORDS`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_ROOT_WORDS)
    }

    /// The words in this list.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordListSource for StaticWordList {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        Ok(self.words.clone())
    }
}

/// A newline-delimited word-list file, read on every load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    /// Point at a word-list file. Nothing is read until the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordListSource for FileWordList {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| WordListError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_word_list(&content))
    }
}
