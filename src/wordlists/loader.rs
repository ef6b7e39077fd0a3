//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Each line is trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silkworm", "  monster ", "PLANET"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silkworm", "monster", "planet"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["crane", "", "   ", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\r\n\nBeta\n  gamma  ").unwrap();

        let words = load_from_file(file.path()).unwrap();

        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
