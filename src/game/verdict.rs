//! Submission outcomes
//!
//! Rejections are data, not errors: a front end renders their title and
//! message and lets the player try again.

use std::fmt;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Already accepted this round
    Duplicate,
    /// Uses a letter the root word doesn't have (or not enough of them)
    LettersUnavailable,
    /// Not in the dictionary
    NotAWord,
    /// Shorter than three letters, or the root word itself
    TooShortOrIsRoot,
}

impl Rejection {
    /// Every rejection, in the order the rules are checked
    pub const ALL: [Self; 4] = [
        Self::Duplicate,
        Self::LettersUnavailable,
        Self::NotAWord,
        Self::TooShortOrIsRoot,
    ];

    /// Short heading for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Duplicate => "Word used already",
            Self::LettersUnavailable => "Word not possible",
            Self::NotAWord => "Word not recognized",
            Self::TooShortOrIsRoot => "Word not allowed",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::Duplicate => "Be more original".to_string(),
            Self::LettersUnavailable => {
                format!("You can't spell that word from '{root_word}'")
            }
            Self::NotAWord => "You can't just make them up, you know".to_string(),
            Self::TooShortOrIsRoot => {
                "Words must be at least 3 letters and can't be the root word".to_string()
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of submitting a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Added to the front of the accepted words
    Accepted,
    /// Turned down; the session is unchanged
    Rejected(Rejection),
    /// Nothing to validate (empty or whitespace-only input)
    Ignored,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Accepted | Self::Ignored => None,
        }
    }
}

impl From<Rejection> for Verdict {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected(reason) => write!(f, "Rejected: {reason}"),
            Self::Ignored => write!(f, "Ignored"),
        }
    }
}
