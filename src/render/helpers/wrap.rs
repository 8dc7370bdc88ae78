//! Character-count text fitting
//!
//! Line breaking counts characters rather than measuring glyphs, which is
//! close enough for the fixed font sizes used by the form.

pub const ELLIPSIS: &str = "...";

/// Greedily pack whitespace-separated words into lines of at most `max_chars`
///
/// A word longer than `max_chars` is placed alone on its own line without
/// being split. Whitespace-only input yields no lines.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shorten a field to `budget` characters, marking the cut with an ellipsis
pub fn truncate_field(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }

    let keep = budget.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Keep the first `capacity` lines, returning how many were dropped
pub fn fit_lines(mut lines: Vec<String>, capacity: usize) -> (Vec<String>, usize) {
    let dropped = lines.len().saturating_sub(capacity);
    lines.truncate(capacity);
    (lines, dropped)
}
