//! Root word sources
//!
//! A round starts by drawing its root word from a [`WordListSource`].

use super::{START_WORDS, loader};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::io;
use std::path::Path;

/// Supplies root words for new rounds
pub trait WordListSource {
    /// Draw the next root word, or `None` if the list has nothing to offer
    fn next_word(&mut self) -> Option<String>;
}

impl<T: WordListSource + ?Sized> WordListSource for &mut T {
    fn next_word(&mut self) -> Option<String> {
        (**self).next_word()
    }
}

/// Picks uniformly at random from a fixed list of words
pub struct RandomWordList {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWordList {
    /// Create a source over `words`, seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a source whose draws are reproducible for a given seed
    #[must_use]
    pub fn seeded(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source over the root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(START_WORDS))
    }

    /// Source over a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(&path)?;
        if words.is_empty() {
            tracing::warn!(path = %path.as_ref().display(), "word list has no words");
        }
        Ok(Self::new(words))
    }

    /// Replace the random generator with a seeded one
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self::seeded(self.words, seed)
    }

    /// Number of words the source draws from
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the source has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordListSource for RandomWordList {
    fn next_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}
