//! Text normalization for line comparison.
//!
//! Chart lines and slide lines differ in case, punctuation and spacing.
//! Both sides go through [`normalize_for_comparison`] before scoring.

/// Lowercase, drop everything that is not a word char or whitespace,
/// collapse whitespace runs to single spaces and trim.
///
/// Word chars are alphanumerics and `_`. Apostrophes are dropped, so
/// `"don't"` compares equal to `"dont"`.
///
/// # Examples
/// ```
/// use chart_import::normalize::normalize_for_comparison;
///
/// assert_eq!(normalize_for_comparison("  Amazing grace!  How SWEET "), "amazing grace how sweet");
/// assert_eq!(normalize_for_comparison("-- ..."), "");
/// ```
pub fn normalize_for_comparison(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of words in an already normalized line.
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize_for_comparison("Jesus Loves Me"), "jesus loves me");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            normalize_for_comparison("Hallelujah, (hallelujah)!"),
            "hallelujah hallelujah"
        );
        assert_eq!(normalize_for_comparison("don't"), "dont");
        assert_eq!(normalize_for_comparison("Hello—world"), "helloworld");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_for_comparison("\tHow   great\t thou art "), "how great thou art");
    }

    #[test]
    fn test_keeps_non_ascii_letters() {
        assert_eq!(normalize_for_comparison("Señor, ÉL vive"), "señor él vive");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("amazing grace"), 2);
        assert_eq!(word_count(""), 0);
    }
}
