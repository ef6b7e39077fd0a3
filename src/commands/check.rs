//! Batch word checking command
//!
//! Runs a list of candidates through a single round with a chosen root word.

use crate::core::normalize;
use crate::dictionary::SpellChecker;
use crate::game::{RoundEngine, Verdict};
use crate::wordlists::RandomWordList;
use anyhow::Result;

/// Outcome of one candidate in a batch
pub struct CheckStep {
    pub word: String,
    pub verdict: Verdict,
}

/// Result of checking a batch of words
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    /// Accepted words, most recent first
    pub accepted: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn score(&self) -> usize {
        self.accepted.len()
    }
}

/// Submit `words` in order to a fresh round rooted at `root_word`
///
/// Accepted words accumulate, so a repeated word is reported as a duplicate.
///
/// # Errors
///
/// Returns an error if `root_word` is blank.
pub fn check_words<S: SpellChecker>(
    root_word: &str,
    words: &[String],
    checker: S,
) -> Result<CheckResult> {
    let source = RandomWordList::new(vec![root_word.to_string()]);
    let mut engine = RoundEngine::new(source, checker);
    let root_word = engine.start_round()?.root_word().to_string();

    let steps = words
        .iter()
        .map(|word| {
            engine.submit(word).map(|verdict| CheckStep {
                word: normalize(word).unwrap_or_default(),
                verdict,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let accepted = engine
        .session()
        .map(|s| s.accepted_words().to_vec())
        .unwrap_or_default();

    Ok(CheckResult {
        root_word,
        steps,
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, ENGLISH};
    use crate::game::Rejection;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn reports_each_verdict_in_order() {
        let dict = Dictionary::new(ENGLISH, ["plan", "plant", "planet", "pet"]);
        let result = check_words(
            "Planet",
            &words(&["plan", "plan", "xyz", "pl", "", "PLANT"]),
            &dict,
        )
        .unwrap();

        assert_eq!(result.root_word, "planet");
        let verdicts: Vec<_> = result.steps.iter().map(|s| s.verdict).collect();
        assert_eq!(
            verdicts,
            vec![
                Verdict::Accepted,
                Verdict::Rejected(Rejection::Duplicate),
                Verdict::Rejected(Rejection::LettersUnavailable),
                Verdict::Rejected(Rejection::NotAWord),
                Verdict::Ignored,
                Verdict::Accepted,
            ]
        );
        assert_eq!(result.steps[4].word, "");
        assert_eq!(result.steps[5].word, "plant");
        assert_eq!(result.accepted, vec!["plant", "plan"]);
        assert_eq!(result.score(), 2);
    }

    #[test]
    fn blank_root_is_an_error() {
        let dict = Dictionary::new(ENGLISH, ["plan"]);
        assert!(check_words("  ", &words(&["plan"]), &dict).is_err());
    }
}
