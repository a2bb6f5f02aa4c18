//! # Chart Parser
//!
//! Turns extracted chord-chart text into lyric lines carrying their chords
//! and any notes written before them.
//!
//! ## Line Classification
//! Every physical line is classified on its own, first match wins:
//!
//! 1. **Blank** - skipped, changes nothing
//! 2. **Note** - `Note:`, `Notes:`, `Comment:`, `Comments:`, `{comment: ...}`,
//!    `{c: ...}`, a leading `*` or a leading `//`. The remainder is queued and
//!    attached to the next emitted lyric line.
//! 3. **Section header** - `Verse 1`, `[Chorus]`, `Pre-Chorus:` ... and
//!    other ChordPro directives (`{title: ...}`) are dropped, pending notes
//!    are kept.
//! 4. **Inline chords** - `I [C]love you [G]Lord`. Brackets are removed and
//!    each recognised chord records its offset in the cleaned text. A line of
//!    annotations only (`[Repeat x2]`) is still emitted, with empty text.
//! 5. **Chord row** - at least 60% of at least two tokens are chords. The row
//!    describes the next line that is not blank or a note, unless that line
//!    is a header or another chord row. Notes in between stay queued for the
//!    paired line. Above an inline-chord line, the row's columns are shifted
//!    into the cleaned text and both sets of chords are kept.
//! 6. **Lyric** - emitted as is.
//!
//! ## Example
//! ```rust
//! use chart_import::parse;
//!
//! let result = parse("Verse 1\n  G        C\nAmazing grace how sweet\n");
//! assert_eq!(result.lines.len(), 1);
//! assert_eq!(result.lines[0].text, "Amazing grace how sweet");
//! assert_eq!(result.lines[0].chords[0].chord, "G");
//! assert_eq!(result.lines[0].chords[0].char_index, 2);
//! assert_eq!(result.lines[0].source_line_index, 2);
//! ```

use crate::chord::chord_symbol;
use crate::config::ParserConfig;
use crate::snap::word_spans;
use crate::types::{push_warning, ChordToken, ParseResult, ParsedLyricLine};
use std::ops::Range;

pub const UNATTACHED_NOTES_WARNING: &str = "Some notes were not attached to a lyric line.";

/// Labels that mark a section header once digits and punctuation are removed
const SECTION_LABELS: &[&str] = &[
    "verse",
    "chorus",
    "bridge",
    "pre-chorus",
    "prechorus",
    "post-chorus",
    "postchorus",
    "intro",
    "outro",
    "tag",
    "interlude",
    "refrain",
    "ending",
    "coda",
    "instrumental",
    "vamp",
];

const NOTE_PREFIXES: &[&str] = &["notes:", "note:", "comments:", "comment:"];

const BRACE_NOTE_PREFIXES: &[&str] = &["comment:", "c:"];

#[derive(Debug, Clone, PartialEq)]
enum LineKind {
    Blank,
    /// A note line; `None` when the marker had nothing after it
    Note(Option<String>),
    Header,
    Inline(InlineLine),
    ChordRow(Vec<ChordToken>),
    Lyric,
}

/// A line with its `[...]` annotations removed.
#[derive(Debug, Clone, PartialEq)]
struct InlineLine {
    text: String,
    chords: Vec<ChordToken>,
    /// Char ranges of the raw line taken out as annotations
    annotations: Vec<Range<usize>>,
}

impl InlineLine {
    /// Offset in `text` of a column of the raw line. A column inside an
    /// annotation maps to the place the annotation was removed from.
    fn text_offset(&self, column: usize) -> usize {
        let removed: usize = self
            .annotations
            .iter()
            .filter(|range| range.start < column)
            .map(|range| column.min(range.end) - range.start)
            .sum();
        column - removed
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Note text if `trimmed` is a note line.
fn note_text(trimmed: &str) -> Option<Option<String>> {
    let body = if let Some(rest) = NOTE_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(trimmed, prefix))
    {
        rest
    } else if let Some(inner) = trimmed.strip_prefix('{') {
        let inner = inner.trim_start();
        let rest = BRACE_NOTE_PREFIXES
            .iter()
            .find_map(|prefix| strip_prefix_ignore_case(inner, prefix))?;
        rest.trim_end().trim_end_matches('}')
    } else if let Some(rest) = trimmed.strip_prefix("//") {
        rest
    } else if trimmed.starts_with('*') {
        trimmed.trim_matches('*')
    } else {
        return None;
    };

    let body = body.trim();
    Some((!body.is_empty()).then(|| body.to_string()))
}

/// ChordPro directives such as `{title: ...}` or `{start_of_chorus}`.
/// Comment directives are caught earlier as notes.
fn is_directive(trimmed: &str) -> bool {
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

fn is_section_header(trimmed: &str) -> bool {
    let label: String = trimmed
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '-')
        .collect::<String>()
        .to_lowercase();
    SECTION_LABELS.contains(&label.as_str())
}

/// Remove `[...]` annotations, keeping the ones that are chords.
///
/// Returns `None` when the line has no bracket annotation at all. Chord
/// offsets are char offsets into the text with every annotation removed.
fn extract_inline_chords(line: &str) -> Option<InlineLine> {
    let chars: Vec<char> = line.chars().collect();
    let mut text = String::with_capacity(line.len());
    let mut text_len = 0;
    let mut chords = Vec::new();
    let mut annotations = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '[' {
            let close = chars[i + 1..]
                .iter()
                .position(|&c| c == ']' || c == '[')
                .map(|offset| i + 1 + offset)
                .filter(|&end| chars[end] == ']' && end > i + 1);

            if let Some(end) = close {
                annotations.push(i..end + 1);
                let content: String = chars[i + 1..end].iter().collect();
                if let Some(symbol) = chord_symbol(content.trim()) {
                    chords.push(ChordToken::new(symbol, text_len));
                }
                i = end + 1;
                continue;
            }
        }

        text.push(chars[i]);
        text_len += 1;
        i += 1;
    }

    (!annotations.is_empty()).then_some(InlineLine {
        text,
        chords,
        annotations,
    })
}

/// Chords of a chord-only row with their column offsets.
fn chord_row(line: &str, config: &ParserConfig) -> Option<Vec<ChordToken>> {
    let tokens = word_spans(line);
    if tokens.is_empty() || tokens.len() < config.chord_line_min_tokens {
        return None;
    }

    let chords: Vec<ChordToken> = tokens
        .iter()
        .filter_map(|token| chord_symbol(token.text).map(|c| ChordToken::new(c, token.start)))
        .collect();

    let ratio = chords.len() as f64 / tokens.len() as f64;
    (ratio >= config.chord_line_ratio).then_some(chords)
}

fn classify(line: &str, config: &ParserConfig) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(note) = note_text(trimmed) {
        return LineKind::Note(note);
    }
    if is_section_header(trimmed) || is_directive(trimmed) {
        return LineKind::Header;
    }
    if let Some(inline) = extract_inline_chords(line) {
        return LineKind::Inline(inline);
    }
    if let Some(chords) = chord_row(line, config) {
        return LineKind::ChordRow(chords);
    }
    LineKind::Lyric
}

/// Line-by-line parser state.
///
/// `position` is the next physical line to read; pairing a chord row with its
/// lyric line moves it forward by more than one.
struct ChartParser<'a> {
    lines: Vec<&'a str>,
    position: usize,
    pending_notes: Vec<String>,
    output: Vec<ParsedLyricLine>,
    config: &'a ParserConfig,
}

impl<'a> ChartParser<'a> {
    fn new(text: &'a str, config: &'a ParserConfig) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
            pending_notes: Vec::new(),
            output: Vec::new(),
            config,
        }
    }

    fn emit(&mut self, text: String, chords: Vec<ChordToken>, source_line_index: usize) {
        log::debug!(
            "line {}: lyric {:?} with {} chord(s), {} note(s)",
            source_line_index,
            text,
            chords.len(),
            self.pending_notes.len()
        );
        self.output.push(ParsedLyricLine {
            text,
            chords,
            notes: std::mem::take(&mut self.pending_notes),
            source_line_index,
        });
    }

    /// Index of the line a chord row at `row_index` describes, if any.
    /// Blank and note lines between the two are looked past.
    fn lyric_line_after(&self, row_index: usize) -> Option<usize> {
        for index in row_index + 1..self.lines.len() {
            match classify(self.lines[index], self.config) {
                LineKind::Blank | LineKind::Note(_) => {}
                LineKind::Header | LineKind::ChordRow(_) => return None,
                LineKind::Inline(_) | LineKind::Lyric => return Some(index),
            }
        }
        None
    }

    /// Emit the line at `lyric_index` with the chords of the row above it.
    fn pair(&mut self, row_index: usize, row_chords: Vec<ChordToken>, lyric_index: usize) {
        for index in row_index + 1..lyric_index {
            if let LineKind::Note(Some(note)) = classify(self.lines[index], self.config) {
                log::debug!("line {}: note {:?}", index, note);
                self.pending_notes.push(note);
            }
        }

        let lyric = self.lines[lyric_index];
        match classify(lyric, self.config) {
            LineKind::Inline(inline) => {
                let mut chords: Vec<ChordToken> = row_chords
                    .into_iter()
                    .map(|c| ChordToken::new(c.chord, inline.text_offset(c.char_index)))
                    .collect();
                chords.extend(inline.chords);
                chords.sort_by_key(|c| c.char_index);
                self.emit(inline.text, chords, lyric_index);
            }
            _ => self.emit(lyric.to_string(), row_chords, lyric_index),
        }
        self.position = lyric_index + 1;
    }

    fn run(mut self) -> ParseResult {
        while self.position < self.lines.len() {
            let index = self.position;
            let line = self.lines[index];
            self.position += 1;

            match classify(line, self.config) {
                LineKind::Blank => {}
                LineKind::Note(Some(note)) => {
                    log::debug!("line {}: note {:?}", index, note);
                    self.pending_notes.push(note);
                }
                LineKind::Note(None) => {}
                LineKind::Header => log::debug!("line {}: section header {:?}", index, line.trim()),
                LineKind::Inline(inline) => self.emit(inline.text, inline.chords, index),
                LineKind::ChordRow(chords) => match self.lyric_line_after(index) {
                    Some(lyric_index) => self.pair(index, chords, lyric_index),
                    None => {
                        log::debug!("line {}: chord row with no lyric line below", index);
                        self.emit(line.to_string(), Vec::new(), index);
                    }
                },
                LineKind::Lyric => self.emit(line.to_string(), Vec::new(), index),
            }
        }

        let mut warnings = Vec::new();
        if !self.pending_notes.is_empty() {
            push_warning(&mut warnings, UNATTACHED_NOTES_WARNING);
        }

        ParseResult {
            lines: self.output,
            warnings,
        }
    }
}

/// Parse chart text with the default chord-row settings.
pub fn parse(text: &str) -> ParseResult {
    parse_with_config(text, &ParserConfig::default())
}

pub fn parse_with_config(text: &str, config: &ParserConfig) -> ParseResult {
    ChartParser::new(text, config).run()
}
