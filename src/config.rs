//! Game configuration
//!
//! Resolves command-line and environment settings into the concrete word
//! source and spell checker a [`RoundEngine`] is built from.

use crate::dictionary::Dictionary;
use crate::game::RoundEngine;
use crate::wordlists::RandomWordList;
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The engine every front end plays against
pub type GameEngine = RoundEngine<RandomWordList, Dictionary>;

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListSource {
    /// Compiled into the binary
    #[default]
    Embedded,
    /// Newline-delimited file on disk
    Path(PathBuf),
}

impl FromStr for ListSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "embedded" => Self::Embedded,
            path => Self::Path(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings needed to build a game
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub wordlist: ListSource,
    pub dictionary: ListSource,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load the root-word source
    ///
    /// # Errors
    ///
    /// Returns an error if a word list path cannot be read.
    pub fn word_source(&self) -> Result<RandomWordList> {
        let source = match &self.wordlist {
            ListSource::Embedded => RandomWordList::embedded(),
            ListSource::Path(path) => RandomWordList::from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?,
        };

        Ok(match self.seed {
            Some(seed) => source.with_seed(seed),
            None => source,
        })
    }

    /// Load the spell checker
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary path cannot be read.
    pub fn spell_checker(&self) -> Result<Dictionary> {
        match &self.dictionary {
            ListSource::Embedded => Ok(Dictionary::embedded()),
            ListSource::Path(path) => Dictionary::from_file(path)
                .with_context(|| format!("failed to read dictionary {}", path.display())),
        }
    }

    /// Build an idle engine from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if either word list cannot be loaded.
    pub fn build_engine(&self) -> Result<GameEngine> {
        let words = self.word_source()?;
        let checker = self.spell_checker()?;
        tracing::info!(
            wordlist = %self.wordlist,
            root_words = words.len(),
            dictionary = %self.dictionary,
            dictionary_words = checker.len(),
            "game configured"
        );
        Ok(RoundEngine::new(words, checker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EngineState, RoundError};
    use std::io::Write;

    #[test]
    fn list_source_parsing() {
        assert_eq!("embedded".parse::<ListSource>(), Ok(ListSource::Embedded));
        assert_eq!(
            "words.txt".parse::<ListSource>(),
            Ok(ListSource::Path(PathBuf::from("words.txt")))
        );
        assert_eq!(ListSource::Embedded.to_string(), "embedded");
    }

    #[test]
    fn default_config_builds_playable_engine() {
        let mut engine = GameConfig::default().build_engine().unwrap();
        assert_eq!(engine.state(), EngineState::Idle);

        let root = engine.start_round().unwrap().root_word().to_string();
        assert!(crate::wordlists::START_WORDS.contains(&root.as_str()));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        };
        let mut a = config.build_engine().unwrap();
        let mut b = config.build_engine().unwrap();

        for _ in 0..5 {
            let root_a = a.start_round().unwrap().root_word().to_string();
            let root_b = b.start_round().unwrap().root_word().to_string();
            assert_eq!(root_a, root_b);
        }
    }

    #[test]
    fn missing_files_are_errors() {
        let config = GameConfig {
            wordlist: ListSource::Path(PathBuf::from("/no/such/start.txt")),
            ..GameConfig::default()
        };
        assert!(config.build_engine().is_err());

        let config = GameConfig {
            dictionary: ListSource::Path(PathBuf::from("/no/such/dictionary.txt")),
            ..GameConfig::default()
        };
        assert!(config.build_engine().is_err());
    }

    #[test]
    fn empty_word_list_file_fails_at_round_start() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\n\n").unwrap();

        let config = GameConfig {
            wordlist: ListSource::Path(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        let mut engine = config.build_engine().unwrap();

        assert_eq!(engine.start_round().err(), Some(RoundError::NoWordList));
    }
}
