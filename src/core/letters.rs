//! Letter multiset built from a root word
//!
//! A candidate may only use each letter as many times as the root word has it.

use rustc_hash::FxHashMap;

/// Remaining letter counts of a root word
///
/// Built once per root word and cloned for each availability check, so the
/// check itself can consume letters destructively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool of letters in `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many of `letter` are still available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters still available
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Check if every letter has been consumed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take one occurrence of `letter` out of the pool
    ///
    /// Returns `false` (leaving the pool untouched) if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume the letters of `word` left to right
    ///
    /// Stops at the first letter that is no longer available and returns
    /// `false`; letters consumed before that point stay consumed.
    pub fn try_consume(&mut self, word: &str) -> bool {
        word.chars().all(|ch| self.take(ch))
    }

    /// Check whether `word` could be spelled from this pool without mutating it
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.clone().try_consume(word)
    }
}
