//! Root-word sources.
//!
//! A session asks its [`WordListSource`] for the pool of root words each
//! time a new round starts, then picks one at random.

mod list;

pub use list::{parse_word_list, FileWordList, StaticWordList, DEFAULT_ROOT_WORDS};

use crate::error::WordListError;

/// Supplies the pool of candidate root words.
pub trait WordListSource {
    /// Load the full pool. An empty pool is not an error.
    fn load_word_list(&self) -> Result<Vec<String>, WordListError>;
}

impl<T: WordListSource + ?Sized> WordListSource for &T {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        (**self).load_word_list()
    }
}

impl<T: WordListSource + ?Sized> WordListSource for Box<T> {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        (**self).load_word_list()
    }
}
