//! Candidate normalization
//!
//! Free-text input is reduced to the canonical form every rule compares against.

/// Normalize a raw candidate: trim surrounding whitespace, then lowercase
///
/// Returns `None` when nothing is left to validate.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Plan \n").as_deref(), Some("plan"));
/// assert_eq!(normalize(" \t "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() { None } else { Some(word) }
}
