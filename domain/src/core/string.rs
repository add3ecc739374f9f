//! String utilities for the domain layer.

/// Collapse whitespace and cut a text to at most `max_chars` characters.
///
/// Used for one-line previews of agent replies in logs and console output.
/// Counts characters rather than bytes, since most of the game text is
/// Cyrillic.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Lowercased words of a text with surrounding punctuation stripped.
pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_is_flattened() {
        assert_eq!(preview("hello\n  world", 20), "hello world");
    }

    #[test]
    fn test_preview_cuts_on_characters() {
        assert_eq!(preview("Привет всем в комнате", 7), "Привет…");
        assert_eq!(preview("abcdef", 4), "abc…");
    }

    #[test]
    fn test_words_strips_punctuation() {
        assert_eq!(words("Я — Алекс!"), vec!["я", "алекс"]);
        assert_eq!(words("  Myself.  "), vec!["myself"]);
    }
}
