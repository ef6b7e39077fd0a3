//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and independent of any front end.

mod candidate;
mod letters;

pub use candidate::normalize;
pub use letters::LetterPool;
