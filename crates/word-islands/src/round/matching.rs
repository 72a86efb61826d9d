/// Canonical form used for guess comparison: surrounding whitespace removed,
/// lowercased. Internal whitespace is kept.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `guess` solves `target`.
pub fn is_match(guess: &str, target: &str) -> bool {
    normalize(guess) == normalize(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_folds_case() {
        assert!(is_match(" Stone ", "stone"));
        assert!(is_match("STONE", "stone"));
        assert!(is_match("\tstone\n", "stone"));
    }

    #[test]
    fn internal_whitespace_is_significant() {
        assert!(!is_match("st one", "stone"));
    }

    #[test]
    fn empty_guess_never_matches_a_word() {
        assert!(!is_match("", "stone"));
        assert!(!is_match("   ", "stone"));
    }

    #[test]
    fn partial_words_do_not_match() {
        assert!(!is_match("ston", "stone"));
        assert!(!is_match("stones", "stone"));
    }
}
