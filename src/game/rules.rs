//! Word validation rules
//!
//! Each rule is a pure predicate over a session and an already-normalized
//! candidate. [`validate`] applies them in a fixed order and reports the
//! first one violated:
//!
//! 1. originality ([`is_original`])
//! 2. letter availability ([`is_possible`])
//! 3. dictionary validity ([`is_real`])
//! 4. length and identity ([`is_allowed`])

use super::{Rejection, Session};
use crate::dictionary::{ENGLISH, SpellChecker};

/// Candidates shorter than this are never accepted
pub const MIN_WORD_LENGTH: usize = 3;

/// The candidate hasn't been accepted yet this round
#[must_use]
pub fn is_original(session: &Session, word: &str) -> bool {
    !session.has_used(word)
}

/// The candidate can be spelled from the root word's letters
///
/// Each root letter can be used once per occurrence in the root word.
#[must_use]
pub fn is_possible(session: &Session, word: &str) -> bool {
    session.letters().can_spell(word)
}

/// The spell checker recognizes the candidate as an English word
#[must_use]
pub fn is_real<S: SpellChecker + ?Sized>(checker: &S, word: &str) -> bool {
    checker.is_valid(word, ENGLISH)
}

/// The candidate is long enough and isn't the root word itself
#[must_use]
pub fn is_allowed(session: &Session, word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH && word != session.root_word()
}

/// Run every rule against `word`, in order, without touching the session
///
/// # Errors
///
/// Returns the [`Rejection`] for the first rule the word breaks.
pub fn validate<S: SpellChecker + ?Sized>(
    session: &Session,
    checker: &S,
    word: &str,
) -> Result<(), Rejection> {
    if !is_original(session, word) {
        return Err(Rejection::Duplicate);
    }
    if !is_possible(session, word) {
        return Err(Rejection::LettersUnavailable);
    }
    if !is_real(checker, word) {
        return Err(Rejection::NotAWord);
    }
    if !is_allowed(session, word) {
        return Err(Rejection::TooShortOrIsRoot);
    }
    Ok(())
}
