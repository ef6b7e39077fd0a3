//! State of a single round

use crate::core::LetterPool;

/// One round: the root word and the words accepted so far
///
/// Accepted words are kept most-recent-first and never repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    letters: LetterPool,
    accepted_words: Vec<String>,
}

impl Session {
    /// Start an empty session over an already-normalized root word
    pub(crate) fn new(root_word: String) -> Self {
        debug_assert!(!root_word.is_empty(), "root word must not be empty");
        let letters = LetterPool::from_word(&root_word);
        Self {
            root_word,
            letters,
            accepted_words: Vec::new(),
        }
    }

    /// The word whose letters bound every candidate
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Letters of the root word, untouched by any check
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    /// Score is simply the number of accepted words
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        self.accepted_words.len()
    }

    /// Check if `word` was already accepted this round
    #[must_use]
    pub fn has_used(&self, word: &str) -> bool {
        self.accepted_words.iter().any(|w| w == word)
    }

    pub(crate) fn accept(&mut self, word: String) {
        debug_assert!(!self.has_used(&word));
        self.accepted_words.insert(0, word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new("monster".to_string());
        assert_eq!(session.root_word(), "monster");
        assert_eq!(session.score(), 0);
        assert!(session.accepted_words().is_empty());
        assert_eq!(session.letters().len(), 7);
    }

    #[test]
    fn accepted_words_are_most_recent_first() {
        let mut session = Session::new("monster".to_string());
        session.accept("storm".to_string());
        session.accept("stone".to_string());
        session.accept("note".to_string());

        assert_eq!(session.accepted_words(), ["note", "stone", "storm"]);
        assert_eq!(session.score(), 3);
        assert!(session.has_used("stone"));
        assert!(!session.has_used("tone"));
    }
}
