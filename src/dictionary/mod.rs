//! Dictionary lookups for the realness check.
//!
//! The validator depends only on the [`DictionaryChecker`] trait. Any
//! spell checker, word list, or test fake can stand behind it.

pub mod checker;
pub mod word_list;

pub use checker::{DictionaryChecker, FnDictionary};
pub use word_list::WordListDictionary;
