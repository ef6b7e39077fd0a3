//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! a file loader, and the random root-word source.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{RandomWordList, WordListSource};

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: FxHashSet<_> = DICTIONARY_WORDS.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Root word '{word}' not in dictionary"
            );
        }
    }
}
