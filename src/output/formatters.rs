//! Formatting utilities for terminal output

/// Circled number shown next to an accepted word, one per word length
///
/// Lengths without a circled glyph fall back to a parenthesized number.
#[must_use]
pub fn length_badge(length: usize) -> String {
    const CIRCLED: [char; 20] = [
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰',
        '⑱', '⑲', '⑳',
    ];

    match length.checked_sub(1).and_then(|i| CIRCLED.get(i)) {
        Some(ch) => ch.to_string(),
        None => format!("({length})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters of a word spaced out for display, e.g. `M O N S T E R`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_for_common_lengths() {
        assert_eq!(length_badge(3), "③");
        assert_eq!(length_badge(7), "⑦");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_fallback() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn spaced() {
        assert_eq!(spaced_letters("monster"), "M O N S T E R");
        assert_eq!(spaced_letters(""), "");
    }
}
