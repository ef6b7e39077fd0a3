//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a random
//! root word. Every word must be spellable from the root word's letters, be a
//! real word, have at least three letters, and not be the root word itself.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::{Dictionary, ENGLISH};
//! use word_scramble::game::{Rejection, RoundEngine, Verdict};
//! use word_scramble::wordlists::RandomWordList;
//!
//! let words = RandomWordList::new(vec!["planet".to_string()]);
//! let dictionary = Dictionary::new(ENGLISH, ["plan", "plant"]);
//! let mut engine = RoundEngine::new(words, dictionary);
//!
//! engine.start_round().unwrap();
//! assert_eq!(engine.submit("plan"), Ok(Verdict::Accepted));
//! assert_eq!(engine.submit("plan"), Ok(Verdict::Rejected(Rejection::Duplicate)));
//! assert_eq!(engine.score(), 1);
//! ```

// Core domain types
pub mod core;

// Round state and validation rules
pub mod game;

// Spell checking
pub mod dictionary;

// Word lists
pub mod wordlists;

// Settings resolution
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
