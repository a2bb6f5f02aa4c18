//! Similarity scoring between normalized lines.

use std::collections::HashSet;

/// Score two normalized strings in `[0, 1]`.
///
/// - `1.0` when identical
/// - `0.9 * shorter / longer` when one contains the other
/// - otherwise shared distinct words over the larger distinct word count
///
/// The overlap denominator is the larger set rather than the union, so a line
/// that is almost a subset of the other still scores well.
///
/// Lengths are measured in chars. Either side empty scores `0.0`.
///
/// # Examples
/// ```
/// use chart_import::similarity::score;
///
/// assert_eq!(score("amazing grace", "amazing grace"), 1.0);
/// assert_eq!(score("amazing grace", "grace amazing"), 1.0);
/// assert_eq!(score("holy holy", "amazing grace"), 0.0);
/// ```
pub fn score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return 1.0;
    }

    if a.contains(b) || b.contains(a) {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        let shorter = len_a.min(len_b) as f64;
        let longer = len_a.max(len_b) as f64;
        return 0.9 * (shorter / longer);
    }

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    let larger = words_a.len().max(words_b.len());
    if larger == 0 {
        return 0.0;
    }

    let common = words_a.intersection(&words_b).count();
    common as f64 / larger as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(score("jesus loves me", "jesus loves me"), 1.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(score("", "jesus"), 0.0);
        assert_eq!(score("jesus", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
    }

    #[test]
    fn test_containment() {
        // 13 chars inside 33 chars
        let s = score("amazing grace", "amazing grace how sweet the sound");
        assert!((s - 0.9 * 13.0 / 33.0).abs() < 1e-9);

        let reversed = score("amazing grace how sweet the sound", "amazing grace");
        assert_eq!(s, reversed);
    }

    #[test]
    fn test_containment_never_reaches_one() {
        let s = score("the sound", "the sound ");
        assert!(s < 1.0);
    }

    #[test]
    fn test_overlap_uses_larger_set() {
        // common {how, great}, larger set has 4 words
        let s = score("how great thou art", "how great is our");
        assert_eq!(s, 0.5);

        // 3 of 4 words shared
        let s = score("then sings my soul", "then sing my soul");
        assert_eq!(s, 0.75);
    }

    #[test]
    fn test_overlap_counts_distinct_words() {
        let s = score("holy holy holy", "holy is the lord");
        assert_eq!(s, 0.25);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(score("blessed assurance", "great is thy faithfulness"), 0.0);
    }
}
