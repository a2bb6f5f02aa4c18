//! Word-snap projection
//!
//! Chords and notes come out of the chart with char offsets into the chart's
//! own line. Once a line is matched to a slide line those offsets are moved
//! onto a word start in the slide text, so a placement never splits a word
//! or points at whitespace.

/// A maximal run of non-whitespace chars, as char offsets `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// The result of snapping an offset: the word start and the word itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnappedWord {
    pub start: usize,
    pub word: String,
}

/// Split `text` into its words, keeping char offsets.
pub fn word_spans(text: &str) -> Vec<WordSpan<'_>> {
    let mut spans = Vec::new();
    // (char offset, byte offset) of the word being scanned
    let mut current: Option<(usize, usize)> = None;

    for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
        match (c.is_whitespace(), current) {
            (false, None) => current = Some((char_idx, byte_idx)),
            (true, Some((start, byte_start))) => {
                spans.push(WordSpan {
                    start,
                    end: char_idx,
                    text: &text[byte_start..byte_idx],
                });
                current = None;
            }
            _ => {}
        }
    }

    if let Some((start, byte_start)) = current {
        spans.push(WordSpan {
            start,
            end: text.chars().count(),
            text: &text[byte_start..],
        });
    }

    spans
}

/// Snap `char_index` onto a word start in `text`.
///
/// - inside a word: that word's start
/// - otherwise: the first word starting at or after `char_index`
/// - past the last word: the last word
///
/// Returns `None` only when `text` has no words.
///
/// # Examples
/// ```
/// use chart_import::snap::snap_to_word;
///
/// let text = "Amazing grace how sweet";
/// assert_eq!(snap_to_word(text, 10).unwrap().start, 8);  // inside "grace"
/// assert_eq!(snap_to_word(text, 7).unwrap().start, 8);   // on the space
/// assert_eq!(snap_to_word(text, 99).unwrap().word, "sweet");
/// assert!(snap_to_word("   ", 0).is_none());
/// ```
pub fn snap_to_word(text: &str, char_index: usize) -> Option<SnappedWord> {
    let spans = word_spans(text);

    let chosen = spans
        .iter()
        .find(|span| span.start <= char_index && char_index < span.end)
        .or_else(|| spans.iter().find(|span| span.start >= char_index))
        .or_else(|| spans.last())?;

    Some(SnappedWord {
        start: chosen.start,
        word: chosen.text.to_string(),
    })
}
