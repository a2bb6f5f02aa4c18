//! # Public API
//!
//! Caller-facing entry points that run the whole import for one request.
//!
//! ## Functions
//!
//! - [`import_chart()`] - parse, align and collect every warning, with options
//! - [`import()`] - the same with default options
//!
//! ## Pipeline
//! 1. Reject blank chart text
//! 2. Parse the text into lyric lines ([`crate::parse_with_config`])
//! 3. Align them with the slide lines ([`crate::match_lines_with_config`])
//! 4. Merge parser and aligner warnings, then add the warnings a reviewer
//!    needs to see: lines that found no slide, and charts with no chords
//!
//! ## Typical Usage
//!
//! ```rust
//! use chart_import::{import_chart, ImportOptions, Slide, SlideDeck};
//!
//! let chart = "Verse 1\nG            C        G\nAmazing grace how sweet the sound\n";
//! let deck = SlideDeck::new(vec![Slide::from_text(
//!     "s1",
//!     "Amazing grace how sweet the sound\nThat saved a wretch like me",
//! )]);
//!
//! let result = import_chart(chart, &deck.slide_lines(), &ImportOptions::default())?;
//! let chords: Vec<(&str, usize)> = result
//!     .placements
//!     .iter()
//!     .map(|p| (p.chord.as_str(), p.char_index))
//!     .collect();
//! assert_eq!(chords, vec![("G", 0), ("C", 14), ("G", 18)]);
//! assert!(result.warnings.is_empty());
//! # Ok::<(), chart_import::ChartError>(())
//! ```

use crate::aligner::match_lines_with_config;
use crate::config::ImportOptions;
use crate::error::ChartError;
use crate::parser::parse_with_config;
use crate::types::{push_warning, MatchResult, SlideLine};

pub const UNMATCHED_LINES_WARNING: &str = "Some lyric lines could not be matched to slides.";

pub const NO_PLACEMENTS_WARNING: &str =
    "No chord placements were detected. Check that chords are written above lyrics or in [brackets].";

/// Import a chord chart onto slide lines.
///
/// # Errors
/// Returns [`ChartError::EmptyChart`] when `text` holds nothing but whitespace.
/// Everything else, including lines that cannot be placed, is reported in
/// the result's `warnings`.
pub fn import_chart(
    text: &str,
    slide_lines: &[SlideLine],
    options: &ImportOptions,
) -> Result<MatchResult, ChartError> {
    if text.trim().is_empty() {
        return Err(ChartError::EmptyChart);
    }

    let parsed = parse_with_config(text, &options.parser);
    log::debug!(
        "parsed {} lyric line(s) from {} physical line(s)",
        parsed.lines.len(),
        text.lines().count()
    );

    let matched = match_lines_with_config(&parsed.lines, slide_lines, &options.aligner);

    let mut warnings = Vec::new();
    for warning in parsed.warnings.iter().chain(matched.warnings.iter()) {
        push_warning(&mut warnings, warning);
    }
    if !matched.unmatched_lines.is_empty() {
        push_warning(&mut warnings, UNMATCHED_LINES_WARNING);
    }
    if matched.placements.is_empty() {
        push_warning(&mut warnings, NO_PLACEMENTS_WARNING);
    }

    Ok(MatchResult { warnings, ..matched })
}

/// Import with default options (notes included).
pub fn import(text: &str, slide_lines: &[SlideLine]) -> Result<MatchResult, ChartError> {
    import_chart(text, slide_lines, &ImportOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::UNATTACHED_NOTES_WARNING;

    fn slides() -> Vec<SlideLine> {
        vec![
            SlideLine::new("s1", 0, "Jesus loves me this I know"),
            SlideLine::new("s1", 1, "For the Bible tells me so"),
        ]
    }

    #[test]
    fn test_empty_chart_is_an_error() {
        assert!(matches!(import("", &slides()), Err(ChartError::EmptyChart)));
        assert!(matches!(import(" \n\t\n", &slides()), Err(ChartError::EmptyChart)));
    }

    #[test]
    fn test_clean_import_has_no_warnings() {
        let result = import("[G]Jesus loves me [C]this I know", &slides()).unwrap();
        assert_eq!(result.placements.len(), 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unmatched_lines_warning() {
        let result = import("[G]Jesus loves me this I know\n[D]Nothing like the slides at all", &slides())
            .unwrap();
        assert_eq!(result.warnings, vec![UNMATCHED_LINES_WARNING]);
        assert_eq!(result.unmatched_lines, vec!["Nothing like the slides at all"]);
    }

    #[test]
    fn test_no_placements_warning() {
        let result = import("Jesus loves me this I know", &slides()).unwrap();
        assert_eq!(result.warnings, vec![NO_PLACEMENTS_WARNING]);
    }

    #[test]
    fn test_parser_warnings_come_first() {
        let result = import("[G]Jesus loves me this I know\nNote: end softly", &slides()).unwrap();
        assert_eq!(result.warnings, vec![UNATTACHED_NOTES_WARNING]);
    }

    #[test]
    fn test_options_disable_notes() {
        let chart = "Note: gently\n[G]Jesus loves me this I know";
        let with_notes = import_chart(chart, &slides(), &ImportOptions::default()).unwrap();
        assert_eq!(with_notes.notes.len(), 1);

        let without = import_chart(chart, &slides(), &ImportOptions::with_notes(false)).unwrap();
        assert!(without.notes.is_empty());
        assert_eq!(without.placements.len(), 1);
    }

    #[test]
    fn test_result_serializes_for_callers() {
        let result = import("[G]Jesus loves me this I know", &slides()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["placements"][0]["slideId"], "s1");
        assert_eq!(json["summary"]["matchedLines"], 1);
        assert!(json["unmatchedLines"].as_array().unwrap().is_empty());
    }
}
