//! # Import Data Model
//!
//! Types flowing through the two import stages.
//!
//! ```text
//! raw text ──parse──▶ Vec<ParsedLyricLine> ──match_lines(&[SlideLine])──▶ MatchResult
//!                          ├── text                                        ├── placements: Vec<ChartImportPlacement>
//!                          ├── chords: Vec<ChordToken>                     ├── notes: Vec<ChartImportNote>
//!                          ├── notes: Vec<String>                          ├── summary: ChartImportSummary
//!                          └── source_line_index                           ├── warnings
//!                                                                          └── unmatched_lines
//! ```
//!
//! All offsets (`char_index`, `word_start`) count chars, not bytes.
//!
//! Everything serializes in camelCase so results can be handed straight to
//! a JSON consumer.

use serde::{Deserialize, Serialize};

/// A chord symbol and the char offset it sits above in its lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordToken {
    pub chord: String,
    pub char_index: usize,
}

impl ChordToken {
    pub fn new(chord: impl Into<String>, char_index: usize) -> Self {
        Self {
            chord: chord.into(),
            char_index,
        }
    }
}

/// One lyric line recovered from the chart, with the chords written against it
/// and any notes that preceded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLyricLine {
    pub text: String,
    pub chords: Vec<ChordToken>,
    pub notes: Vec<String>,
    /// 0-based index of the physical line in the raw chart text
    pub source_line_index: usize,
}

/// Output of the parsing stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub lines: Vec<ParsedLyricLine>,
    pub warnings: Vec<String>,
}

/// One physical line of a slide in the song's deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideLine {
    pub slide_id: String,
    pub line_index: usize,
    pub text: String,
}

impl SlideLine {
    pub fn new(slide_id: impl Into<String>, line_index: usize, text: impl Into<String>) -> Self {
        Self {
            slide_id: slide_id.into(),
            line_index,
            text: text.into(),
        }
    }
}

/// A chord bound to a word start within a slide line.
///
/// `char_index` is always the start offset of a word in the slide line's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartImportPlacement {
    pub slide_id: String,
    pub line_index: usize,
    pub char_index: usize,
    pub chord: String,
}

/// A chart note anchored to the first word of its matched slide line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartImportNote {
    pub text: String,
    pub slide_id: String,
    pub line_index: usize,
    pub word_start: usize,
    pub word_text: String,
}

/// Aggregate counts for one import.
///
/// `matched_lines + unmatched_lines == total_lines` always holds; lines that
/// normalize to nothing are not counted at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartImportSummary {
    pub total_lines: usize,
    pub matched_lines: usize,
    pub unmatched_lines: usize,
    pub placement_count: usize,
    pub note_count: usize,
}

/// Output of the alignment stage, and of the full import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub placements: Vec<ChartImportPlacement>,
    pub notes: Vec<ChartImportNote>,
    pub summary: ChartImportSummary,
    pub warnings: Vec<String>,
    /// Original text of every parsed line that found no slide line
    pub unmatched_lines: Vec<String>,
}

/// Push a warning unless the same message is already present.
pub(crate) fn push_warning(warnings: &mut Vec<String>, message: &str) {
    if !warnings.iter().any(|w| w == message) {
        warnings.push(message.to_string());
    }
}
