//! Spell checking
//!
//! The game treats its dictionary as an oracle behind the [`SpellChecker`]
//! trait so rounds can be played against any word source, including a fixed
//! in-memory set in tests.

use crate::wordlists::{DICTIONARY_WORDS, loader};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Language tag of the embedded dictionary
pub const ENGLISH: &str = "en";

/// Answers whether a string is a recognized word
pub trait SpellChecker {
    /// Check if `word` is a dictionary entry for `language`
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_valid(word, language)
    }
}

/// In-memory dictionary for a single language
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Create a dictionary from already-loaded words
    ///
    /// Entries are normalized the same way candidates are.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| crate::core::normalize(w.as_ref()))
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ENGLISH, DICTIONARY_WORDS)
    }

    /// Load an English dictionary from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(&path)?;
        tracing::info!(
            path = %path.as_ref().display(),
            words = words.len(),
            "loaded dictionary"
        );
        Ok(Self::new(ENGLISH, words))
    }

    /// The language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check if a word exists in the dictionary (any language tag)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every entry, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_set_answers_for_its_language() {
        let dict = Dictionary::new(ENGLISH, ["plan", "plant", "Planet"]);
        assert!(dict.is_valid("plan", ENGLISH));
        assert!(dict.is_valid("planet", ENGLISH));
        assert!(!dict.is_valid("xyz", ENGLISH));
    }

    #[test]
    fn other_language_is_never_valid() {
        let dict = Dictionary::new(ENGLISH, ["plan"]);
        assert!(!dict.is_valid("plan", "fr"));
        assert!(dict.is_valid("plan", "EN"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let dict = Dictionary::new(ENGLISH, ["", "  ", "tone", " note "]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("note"));
    }

    #[test]
    fn embedded_dictionary_is_english_and_populated() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.language(), ENGLISH);
        assert!(!dict.is_empty());
        assert!(dict.is_valid("plan", ENGLISH));
        assert!(dict.is_valid("storm", ENGLISH));
        assert!(!dict.is_valid("pnal", ENGLISH));
    }

    #[test]
    fn usable_through_reference() {
        fn check<S: SpellChecker>(checker: S) -> bool {
            checker.is_valid("tone", ENGLISH)
        }
        let dict = Dictionary::new(ENGLISH, ["tone"]);
        assert!(check(&dict));
    }
}
