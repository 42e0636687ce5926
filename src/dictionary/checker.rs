//! The `DictionaryChecker` trait.

/// Answers whether a word is a real word in a given language.
///
/// Implementations must be side-effect free as far as the game is
/// concerned: the same question always gets the same answer.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::{DictionaryChecker, FnDictionary};
///
/// let dict = FnDictionary::new(|word: &str, _language: &str| word.len() > 2);
/// assert!(dict.is_known_word("silk", "en"));
/// assert!(!dict.is_known_word("si", "en"));
/// ```
pub trait DictionaryChecker {
    /// Check whether `word` is known in `language`.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryChecker + ?Sized> DictionaryChecker for &T {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<T: DictionaryChecker + ?Sized> DictionaryChecker for Box<T> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Adapts a closure into a [`DictionaryChecker`].
#[derive(Clone, Copy)]
pub struct FnDictionary<F>(F);

impl<F> FnDictionary<F>
where
    F: Fn(&str, &str) -> bool,
{
    /// Wrap a `(word, language) -> known` closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> DictionaryChecker for FnDictionary<F>
where
    F: Fn(&str, &str) -> bool,
{
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (self.0)(word, language)
    }
}

impl<F> std::fmt::Debug for FnDictionary<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnDictionary")
    }
}
