//! # Windowed Monotonic Aligner
//!
//! Matches parsed chart lines to the song's slide lines and projects their
//! chords and notes onto word starts in the slide text.
//!
//! ## Algorithm
//! A single cursor walks the slide lines. For each parsed line:
//!
//! 1. Normalize it; lines that normalize to nothing are skipped entirely.
//! 2. Score every slide line from the cursor to `cursor + window` and keep
//!    the best (the first one wins ties, an exact match stops the scan).
//! 3. Accept if the best score reaches the threshold for the line's length,
//!    which is stricter for short lines.
//! 4. On acceptance the cursor moves past the matched slide line. A slide line
//!    is consumed at most once and the cursor never moves back, so matched
//!    slide positions are strictly increasing.
//!
//! Rejected lines leave the cursor where it is and are reported in
//! `unmatched_lines`.
//!
//! ## Example
//! ```rust
//! use chart_import::{match_lines, parse, SlideLine};
//!
//! let parsed = parse("[G]Amazing grace how sweet the sound");
//! let slides = vec![SlideLine::new("s1", 0, "Amazing grace how sweet the sound")];
//!
//! let result = match_lines(&parsed.lines, &slides, true);
//! assert_eq!(result.placements.len(), 1);
//! assert_eq!(result.placements[0].char_index, 0);
//! assert_eq!(result.summary.matched_lines, 1);
//! ```

use crate::config::AlignerConfig;
use crate::normalize::{normalize_for_comparison, word_count};
use crate::similarity::score;
use crate::snap::snap_to_word;
use crate::types::{
    push_warning, ChartImportNote, ChartImportPlacement, MatchResult, ParsedLyricLine, SlideLine,
};

pub const UNLINKED_NOTES_WARNING: &str = "Some notes could not be linked to a lyric line.";

/// Best slide line found for one parsed line
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    slide_index: usize,
    score: f64,
}

/// Scan `[cursor, cursor + window]` (clamped to the slides) for the best score.
fn best_candidate(
    normalized: &str,
    normalized_slides: &[String],
    cursor: usize,
    window: usize,
) -> Option<Candidate> {
    let last = normalized_slides.len().checked_sub(1)?;
    if cursor > last {
        return None;
    }
    let end = last.min(cursor.saturating_add(window));

    let mut best: Option<Candidate> = None;
    for (slide_index, slide_text) in normalized_slides
        .iter()
        .enumerate()
        .take(end + 1)
        .skip(cursor)
    {
        let candidate_score = score(normalized, slide_text);
        log::trace!(
            "  candidate slide line {} scored {:.3}",
            slide_index,
            candidate_score
        );
        if best.map_or(true, |b| candidate_score > b.score) {
            best = Some(Candidate {
                slide_index,
                score: candidate_score,
            });
        }
        if candidate_score >= 1.0 {
            break;
        }
    }
    best
}

/// Running state of one alignment pass.
struct Aligner<'a> {
    slides: &'a [SlideLine],
    normalized_slides: Vec<String>,
    config: &'a AlignerConfig,
    cursor: usize,
    result: MatchResult,
}

impl<'a> Aligner<'a> {
    fn new(slides: &'a [SlideLine], config: &'a AlignerConfig) -> Self {
        Self {
            slides,
            normalized_slides: slides
                .iter()
                .map(|slide| normalize_for_comparison(&slide.text))
                .collect(),
            config,
            cursor: 0,
            result: MatchResult::default(),
        }
    }

    fn align_line(&mut self, line: &ParsedLyricLine) {
        let normalized = normalize_for_comparison(&line.text);
        if normalized.is_empty() {
            log::debug!(
                "line {}: nothing to compare, skipped",
                line.source_line_index
            );
            return;
        }

        self.result.summary.total_lines += 1;
        let threshold = self.config.threshold_for(word_count(&normalized));
        let best = best_candidate(
            &normalized,
            &self.normalized_slides,
            self.cursor,
            self.config.window,
        );

        match best {
            Some(candidate) if candidate.score >= threshold => {
                log::debug!(
                    "line {}: matched slide line {} (score {:.3})",
                    line.source_line_index,
                    candidate.slide_index,
                    candidate.score
                );
                self.cursor = candidate.slide_index + 1;
                self.result.summary.matched_lines += 1;
                let slides = self.slides;
                self.project(line, &slides[candidate.slide_index]);
            }
            _ => {
                log::debug!(
                    "line {}: no slide line reached {:.2} (best {:?})",
                    line.source_line_index,
                    threshold,
                    best.map(|c| c.score)
                );
                self.result.summary.unmatched_lines += 1;
                self.result.unmatched_lines.push(line.text.clone());
            }
        }
    }

    /// Emit placements and notes for a line matched to `slide`.
    fn project(&mut self, line: &ParsedLyricLine, slide: &SlideLine) {
        let max_index = slide.text.chars().count().saturating_sub(1);

        for chord in &line.chords {
            let clamped = chord.char_index.min(max_index);
            // A matched slide line always has words; 0 covers the empty case
            let char_index = snap_to_word(&slide.text, clamped).map_or(0, |w| w.start);
            self.result.placements.push(ChartImportPlacement {
                slide_id: slide.slide_id.clone(),
                line_index: slide.line_index,
                char_index,
                chord: chord.chord.clone(),
            });
        }

        if !self.config.include_notes || line.notes.is_empty() {
            return;
        }

        match snap_to_word(&slide.text, 0) {
            Some(first_word) => {
                for note in &line.notes {
                    self.result.notes.push(ChartImportNote {
                        text: note.clone(),
                        slide_id: slide.slide_id.clone(),
                        line_index: slide.line_index,
                        word_start: first_word.start,
                        word_text: first_word.word.clone(),
                    });
                }
            }
            None => push_warning(&mut self.result.warnings, UNLINKED_NOTES_WARNING),
        }
    }

    fn finish(mut self) -> MatchResult {
        self.result.summary.placement_count = self.result.placements.len();
        self.result.summary.note_count = self.result.notes.len();
        self.result
    }
}

/// Align parsed lines to slide lines with the default window and thresholds.
pub fn match_lines(
    parsed_lines: &[ParsedLyricLine],
    slide_lines: &[SlideLine],
    include_notes: bool,
) -> MatchResult {
    let config = AlignerConfig {
        include_notes,
        ..AlignerConfig::default()
    };
    match_lines_with_config(parsed_lines, slide_lines, &config)
}

pub fn match_lines_with_config(
    parsed_lines: &[ParsedLyricLine],
    slide_lines: &[SlideLine],
    config: &AlignerConfig,
) -> MatchResult {
    let mut aligner = Aligner::new(slide_lines, config);
    for line in parsed_lines {
        aligner.align_line(line);
    }
    let result = aligner.finish();
    log::debug!(
        "aligned {} of {} line(s), {} placement(s), {} note(s)",
        result.summary.matched_lines,
        result.summary.total_lines,
        result.summary.placement_count,
        result.summary.note_count
    );
    result
}
