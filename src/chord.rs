//! Chord token recognition
//!
//! Decides whether a whitespace-delimited token from a chart is shaped like a
//! chord symbol (`G`, `Am7`, `D/F#`, `Cmaj7`, `N.C.`). No music theory is
//! applied: a token is a chord if it has a root A-G, an optional accidental,
//! a suffix of letters, digits and `+()-./`, and an optional bass note after
//! `/` that may carry its own accidental. Capitalised words that start with
//! A-G (`Grace`, `Be`) are chord-shaped too; the chord-row ratio is what keeps
//! ordinary lyric lines from being read as chords.
//!
//! # Examples
//! ```
//! use chart_import::chord::{chord_symbol, is_chord_token};
//!
//! assert!(is_chord_token("Am7"));
//! assert!(is_chord_token("D/F#"));
//! assert!(is_chord_token("N.C."));
//! assert!(!is_chord_token("Lord"));
//!
//! // Surrounding punctuation is not part of the symbol
//! assert_eq!(chord_symbol("|G,"), Some("G".to_string()));
//! ```

/// Accidentals accepted directly after a root or bass letter
const ACCIDENTALS: &[char] = &['#', '♯', '♭'];

/// Symbols allowed in a suffix besides letters and digits
const SUFFIX_SYMBOLS: &[char] = &['+', '(', ')', '-', '.', '/'];

/// Characters kept at the end of a symbol. Anything else trailing a token
/// (commas, bars, colons) is not part of the chord.
fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric()
        || c == '°'
        || ACCIDENTALS.contains(&c)
        || SUFFIX_SYMBOLS.contains(&c)
}

/// Characters a cleaned token may end with before its shape is checked:
/// root letters, digits, accidentals and the suffix symbols.
fn is_trailing_chord_char(c: char) -> bool {
    is_root(c)
        || c.is_ascii_digit()
        || ACCIDENTALS.contains(&c)
        || SUFFIX_SYMBOLS.contains(&c)
}

fn is_root(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A'..='G')
}

/// Strip leading non-letters and trailing non-symbol characters.
///
/// A trailing `)` with no opening `(` is also dropped, so `(G)` cleans to `G`.
fn clean_token(token: &str) -> &str {
    let start = token.trim_start_matches(|c: char| !c.is_alphabetic());
    let mut cleaned = start.trim_end_matches(|c: char| !is_symbol_char(c));
    while cleaned.ends_with(')') && !cleaned.contains('(') {
        cleaned = &cleaned[..cleaned.len() - 1];
    }
    cleaned
}

fn is_no_chord(cleaned: &str) -> bool {
    ["n.c.", "n.c", "nc"]
        .iter()
        .any(|marker| cleaned.eq_ignore_ascii_case(marker))
}

fn matches_chord_shape(symbol: &str) -> bool {
    let chars: Vec<char> = symbol
        .trim_end_matches(|c: char| !is_trailing_chord_char(c))
        .chars()
        .collect();
    if !chars.first().is_some_and(|&c| is_root(c)) {
        return false;
    }

    let mut pos = 1;
    if chars.get(pos).is_some_and(|c| ACCIDENTALS.contains(c)) {
        pos += 1;
    }
    while let Some(&c) = chars.get(pos) {
        // an accidental is only valid right after a bass root, as in D/F#
        let bass_accidental = ACCIDENTALS.contains(&c)
            && pos >= 2
            && is_root(chars[pos - 1])
            && chars[pos - 2] == '/';
        if !(c.is_alphanumeric() || SUFFIX_SYMBOLS.contains(&c) || bass_accidental) {
            return false;
        }
        pos += 1;
    }
    true
}

/// Return the cleaned chord symbol if `token` is chord-shaped.
pub fn chord_symbol(token: &str) -> Option<String> {
    let cleaned = clean_token(token);
    if cleaned.is_empty() {
        return None;
    }
    if is_no_chord(cleaned) || matches_chord_shape(cleaned) {
        Some(cleaned.to_string())
    } else {
        None
    }
}

/// Whether a whitespace-delimited token is shaped like a chord symbol.
pub fn is_chord_token(token: &str) -> bool {
    chord_symbol(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_roots() {
        for root in ["A", "B", "C", "D", "E", "F", "G"] {
            assert!(is_chord_token(root), "{} should be a chord", root);
        }
        assert!(!is_chord_token("H"));
        assert!(!is_chord_token("X7"));
    }

    #[test]
    fn test_accidentals_and_qualities() {
        for chord in [
            "Bb", "F#", "F#m7", "Am", "Cmaj7", "Dm7b5", "Gsus4", "Gsus", "Cadd9", "E7", "A2",
            "Bdim", "Caug", "C+", "Bø7", "C°", "Ebmaj9", "Emin", "CM7", "G7alt", "C5",
        ] {
            assert!(is_chord_token(chord), "{} should be a chord", chord);
        }
    }

    #[test]
    fn test_slash_and_parenthesised_chords() {
        assert!(is_chord_token("D/F#"));
        assert!(is_chord_token("G/B"));
        assert!(is_chord_token("Am7/G"));
        assert!(is_chord_token("Bb/Ab"));
        assert!(is_chord_token("C(add9)"));
        assert!(is_chord_token("C6/9"));
        assert!(is_chord_token("Dsus4/F#"));
    }

    #[test]
    fn test_accidental_only_after_root() {
        // alterations are spelled with letters and digits, not a second sharp
        assert!(!is_chord_token("C7#9"));
        assert!(!is_chord_token("A7(#9)"));
        assert!(!is_chord_token("G#/#"));
    }

    #[test]
    fn test_no_chord_markers() {
        assert!(is_chord_token("N.C."));
        assert!(is_chord_token("NC"));
        assert!(is_chord_token("n.c."));
        assert_eq!(chord_symbol("(N.C.)"), Some("N.C.".to_string()));
    }

    #[test]
    fn test_case_insensitive_root() {
        assert!(is_chord_token("am"));
        assert!(is_chord_token("g"));
        assert!(is_chord_token("f#m"));
    }

    #[test]
    fn test_words_starting_with_a_root_are_chord_shaped() {
        for word in ["Grace", "Be", "Dad", "Amazing", "Every", "Glory", "father", "blind"] {
            assert!(is_chord_token(word), "{} should be chord-shaped", word);
        }
        assert_eq!(chord_symbol("Grace,"), Some("Grace".to_string()));
    }

    #[test]
    fn test_other_words_are_not_chords() {
        for word in ["love", "you", "Lord", "Jesus", "Hallelujah", "Key:", "Chorus x2", "H", "X7"] {
            assert!(!is_chord_token(word), "{} should not be a chord", word);
        }
    }

    #[test]
    fn test_surrounding_punctuation_is_cleaned() {
        assert_eq!(chord_symbol("|G"), Some("G".to_string()));
        assert_eq!(chord_symbol("G|"), Some("G".to_string()));
        assert_eq!(chord_symbol("(Em)"), Some("Em".to_string()));
        assert_eq!(chord_symbol("(G)"), Some("G".to_string()));
        assert_eq!(chord_symbol("C,"), Some("C".to_string()));
        assert_eq!(chord_symbol("Dsus4:"), Some("Dsus4".to_string()));
    }

    #[test]
    fn test_punctuation_only_tokens() {
        assert_eq!(chord_symbol("|"), None);
        assert_eq!(chord_symbol("--"), None);
        assert_eq!(chord_symbol("2x"), None);
        assert_eq!(chord_symbol(""), None);
    }
}
