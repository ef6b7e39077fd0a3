//! Game rules and round lifecycle
//!
//! This module holds the session state, the validation rules, and the
//! [`RoundEngine`] that ties them to a word source and a spell checker.

mod engine;
pub mod rules;
mod session;
mod verdict;

pub use engine::{EngineState, RoundEngine, RoundError};
pub use session::Session;
pub use verdict::{Rejection, Verdict};
