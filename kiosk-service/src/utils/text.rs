/// Trims the user's text and rejects it when nothing is left.
pub fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Words of an already lower-cased input that take part in scoring.
/// Duplicates are kept; each occurrence scores on its own.
pub fn scoring_words(input: &str) -> Vec<&str> {
    input
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  fizik "), Some("fizik"));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn test_scoring_words_drops_short_words() {
        assert_eq!(scoring_words("ve bir de dune"), vec!["bir", "dune"]);
    }

    #[test]
    fn test_scoring_words_counts_characters_not_bytes() {
        // "öç" is four bytes but two characters
        assert_eq!(scoring_words("öç çöl"), vec!["çöl"]);
    }

    #[test]
    fn test_scoring_words_keeps_duplicates() {
        assert_eq!(scoring_words("fizik  fizik"), vec!["fizik", "fizik"]);
    }
}
