//! Root word analysis command
//!
//! Finds every dictionary word a fresh round over a root word would accept.

use crate::dictionary::Dictionary;
use crate::game::{Session, rules};
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root_word: String,
    /// Acceptable words grouped by length, each group sorted alphabetically
    pub by_length: BTreeMap<usize, Vec<String>>,
    pub dictionary_size: usize,
}

impl AnalysisResult {
    /// Highest score reachable in a round over this root word
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    /// Length of the longest acceptable word, if any
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.by_length.keys().next_back().copied()
    }
}

/// List every word in `dictionary` that would be accepted on an empty round
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_root(root_word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let Some(root_word) = crate::core::normalize(root_word) else {
        bail!("root word must not be empty");
    };
    let session = Session::new(root_word.clone());

    let entries: Vec<&str> = dictionary.words().collect();
    let mut acceptable: Vec<String> = entries
        .par_iter()
        .filter(|word| rules::validate(&session, dictionary, word).is_ok())
        .map(|word| (*word).to_string())
        .collect();
    acceptable.sort_unstable();

    let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in acceptable {
        by_length.entry(word.chars().count()).or_default().push(word);
    }

    Ok(AnalysisResult {
        root_word,
        by_length,
        dictionary_size: dictionary.len(),
    })
}
