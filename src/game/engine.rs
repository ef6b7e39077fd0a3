//! Round lifecycle
//!
//! [`RoundEngine`] owns the current [`Session`] and is the only thing that
//! mutates it. Front ends hold a read-only view and call
//! [`start_round`](RoundEngine::start_round) and
//! [`submit`](RoundEngine::submit).

use super::rules;
use super::{Session, Verdict};
use crate::core::normalize;
use crate::dictionary::SpellChecker;
use crate::wordlists::WordListSource;
use thiserror::Error;

/// Failures of the round lifecycle itself (never a player mistake)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The word list produced no root word; the game cannot be played
    #[error("no root word available: the word list is empty or missing")]
    NoWordList,
    /// A word was submitted before any round was started
    #[error("no round in progress")]
    NoActiveRound,
}

/// Whether a round is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Active,
}

/// Mediates every submission against the current session
pub struct RoundEngine<W, S> {
    words: W,
    checker: S,
    session: Option<Session>,
    rounds_started: usize,
}

impl<W: WordListSource, S: SpellChecker> RoundEngine<W, S> {
    /// Create an idle engine; call [`start_round`](Self::start_round) before submitting
    pub const fn new(words: W, checker: S) -> Self {
        Self {
            words,
            checker,
            session: None,
            rounds_started: 0,
        }
    }

    /// Draw a new root word and replace the current session with an empty one
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoWordList`] if the source has no word to give.
    /// The previous session, if any, is left untouched in that case.
    pub fn start_round(&mut self) -> Result<&Session, RoundError> {
        let root_word = self
            .words
            .next_word()
            .and_then(|w| normalize(&w))
            .ok_or(RoundError::NoWordList)?;

        self.rounds_started += 1;
        tracing::info!(root = %root_word, round = self.rounds_started, "round started");

        Ok(&*self.session.insert(Session::new(root_word)))
    }

    /// Validate a candidate and, if every rule passes, accept it
    ///
    /// The candidate is trimmed and lowercased first. Empty input is
    /// [`Verdict::Ignored`]; a rejection leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoActiveRound`] if no round has been started.
    pub fn submit(&mut self, candidate: &str) -> Result<Verdict, RoundError> {
        let session = self.session.as_mut().ok_or(RoundError::NoActiveRound)?;

        let Some(word) = normalize(candidate) else {
            return Ok(Verdict::Ignored);
        };

        let verdict = match rules::validate(session, &self.checker, &word) {
            Ok(()) => {
                tracing::debug!(word = %word, score = session.score() + 1, "accepted");
                session.accept(word);
                Verdict::Accepted
            }
            Err(reason) => {
                tracing::debug!(word = %word, ?reason, "rejected");
                Verdict::Rejected(reason)
            }
        };

        Ok(verdict)
    }
}

impl<W, S> RoundEngine<W, S> {
    /// Read-only view of the current session
    #[inline]
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> EngineState {
        if self.session.is_some() {
            EngineState::Active
        } else {
            EngineState::Idle
        }
    }

    /// Number of accepted words in the current round (0 when idle)
    #[must_use]
    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, Session::score)
    }

    /// Rounds started since the engine was created
    #[inline]
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }

    /// The spell checker submissions are validated against
    #[inline]
    pub const fn checker(&self) -> &S {
        &self.checker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, ENGLISH};
    use crate::game::Rejection;
    use std::collections::VecDeque;

    /// Hands out root words in a fixed order
    struct Scripted(VecDeque<&'static str>);

    impl WordListSource for Scripted {
        fn next_word(&mut self) -> Option<String> {
            self.0.pop_front().map(str::to_string)
        }
    }

    fn engine(roots: &[&'static str]) -> RoundEngine<Scripted, Dictionary> {
        let dictionary = Dictionary::new(
            ENGLISH,
            [
                "monster", "storm", "stone", "most", "note", "ten", "to", "planet", "plan",
                "plant", "pet", "oboe", "boo", "book",
            ],
        );
        RoundEngine::new(Scripted(roots.iter().copied().collect()), dictionary)
    }

    #[test]
    fn starts_idle() {
        let engine = engine(&["monster"]);
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(engine.session().is_none());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn submit_while_idle_is_an_error() {
        let mut engine = engine(&["monster"]);
        assert_eq!(engine.submit("storm"), Err(RoundError::NoActiveRound));
    }

    #[test]
    fn start_round_activates() {
        let mut engine = engine(&["Monster"]);
        let session = engine.start_round().unwrap();
        assert_eq!(session.root_word(), "monster");
        assert!(session.accepted_words().is_empty());
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.rounds_started(), 1);
    }

    #[test]
    fn empty_word_list_is_fatal() {
        let mut engine = engine(&[]);
        assert_eq!(engine.start_round().err(), Some(RoundError::NoWordList));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn blank_root_word_counts_as_no_word() {
        let mut engine = engine(&["   "]);
        assert_eq!(engine.start_round().err(), Some(RoundError::NoWordList));
    }

    #[test]
    fn failed_restart_keeps_current_session() {
        let mut engine = engine(&["monster"]);
        engine.start_round().unwrap();
        engine.submit("storm").unwrap();

        assert_eq!(engine.start_round().err(), Some(RoundError::NoWordList));
        assert_eq!(engine.session().unwrap().root_word(), "monster");
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn accepts_and_detects_duplicates() {
        let mut engine = engine(&["monster"]);
        engine.start_round().unwrap();

        assert_eq!(engine.submit("storm"), Ok(Verdict::Accepted));
        assert_eq!(
            engine.submit("storm"),
            Ok(Verdict::Rejected(Rejection::Duplicate))
        );
        // Duplicate detection happens after normalization
        assert_eq!(
            engine.submit("  STORM "),
            Ok(Verdict::Rejected(Rejection::Duplicate))
        );
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn accepted_words_are_prepended() {
        let mut engine = engine(&["monster"]);
        engine.start_round().unwrap();

        for word in ["storm", "stone", "most"] {
            assert_eq!(engine.submit(word), Ok(Verdict::Accepted));
        }

        let session = engine.session().unwrap();
        assert_eq!(session.accepted_words(), ["most", "stone", "storm"]);
        assert_eq!(engine.score(), 3);
    }

    #[test]
    fn rejects_letters_beyond_root_counts() {
        let mut engine = engine(&["book"]);
        engine.start_round().unwrap();

        assert_eq!(
            engine.submit("oboe"),
            Ok(Verdict::Rejected(Rejection::LettersUnavailable))
        );
        assert_eq!(engine.submit("boo"), Ok(Verdict::Accepted));
    }

    #[test]
    fn length_and_root_boundaries() {
        let mut engine = engine(&["monster"]);
        engine.start_round().unwrap();

        assert_eq!(
            engine.submit("to"),
            Ok(Verdict::Rejected(Rejection::TooShortOrIsRoot))
        );
        assert_eq!(
            engine.submit("monster"),
            Ok(Verdict::Rejected(Rejection::TooShortOrIsRoot))
        );
        assert_eq!(engine.submit("ten"), Ok(Verdict::Accepted));
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut engine = engine(&["monster"]);
        engine.start_round().unwrap();
        engine.submit("storm").unwrap();
        let before = engine.session().cloned();

        for _ in 0..2 {
            assert_eq!(
                engine.submit("snort"),
                Ok(Verdict::Rejected(Rejection::NotAWord))
            );
        }
        assert_eq!(engine.session().cloned(), before);
    }

    #[test]
    fn whitespace_is_ignored() {
        let mut engine = engine(&["monster"]);
        engine.start_round().unwrap();

        assert_eq!(engine.submit(""), Ok(Verdict::Ignored));
        assert_eq!(engine.submit("  \t\n"), Ok(Verdict::Ignored));
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn restart_replaces_session() {
        let mut engine = engine(&["monster", "planet"]);
        engine.start_round().unwrap();
        engine.submit("storm").unwrap();
        engine.submit("note").unwrap();
        assert_eq!(engine.score(), 2);

        let session = engine.start_round().unwrap();
        assert_eq!(session.root_word(), "planet");
        assert!(session.accepted_words().is_empty());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.rounds_started(), 2);

        // Words from the previous round are fair game again if spellable
        assert_eq!(engine.submit("plan"), Ok(Verdict::Accepted));
    }
}
