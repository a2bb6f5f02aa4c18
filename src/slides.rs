//! # Slide Decks
//!
//! The aligner consumes a flat, ordered list of [`SlideLine`]s. Songs are
//! stored as slides, each holding several lines of lyric text, so this module
//! reads a deck and flattens it in performance order.
//!
//! A deck is YAML (or JSON, which YAML reads as well). Each slide gives its
//! lines either as a list or as one multi-line `text` body:
//!
//! ```yaml
//! slides:
//!   - id: verse-1
//!     lines:
//!       - Amazing grace how sweet the sound
//!       - That saved a wretch like me
//!   - id: verse-2
//!     text: |
//!       'Twas grace that taught my heart to fear
//!       And grace my fears relieved
//! ```
//!
//! The `slides:` wrapper is optional; a bare list of slides works too.
//!
//! ```rust
//! use chart_import::SlideDeck;
//!
//! let deck = SlideDeck::from_yaml("- id: a\n  lines: [one, two]\n- id: b\n  text: three\n")?;
//! let lines = deck.slide_lines();
//! assert_eq!(lines.len(), 3);
//! assert_eq!((lines[2].slide_id.as_str(), lines[2].line_index), ("b", 0));
//! # Ok::<(), chart_import::ChartError>(())
//! ```

use crate::error::ChartError;
use crate::types::SlideLine;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One slide of a song's deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub id: String,
    pub lines: Vec<String>,
}

impl Slide {
    pub fn new(id: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            id: id.into(),
            lines,
        }
    }

    /// Build a slide from a stored multi-line body.
    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, text.lines().map(str::to_string).collect())
    }
}

/// Slides of one song or arrangement, in performance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
}

/// Raw slide for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawSlide {
    id: String,
    lines: Option<Vec<String>>,
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawDeck {
    Wrapped { slides: Vec<RawSlide> },
    Bare(Vec<RawSlide>),
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Read a deck from YAML or JSON.
    pub fn from_yaml(content: &str) -> Result<Self, ChartError> {
        let raw: RawDeck = serde_yaml::from_str(content)
            .map_err(|e| ChartError::SlideDeckError(e.to_string()))?;
        let raw_slides = match raw {
            RawDeck::Wrapped { slides } => slides,
            RawDeck::Bare(slides) => slides,
        };

        let mut seen = HashSet::new();
        let mut slides = Vec::with_capacity(raw_slides.len());
        for raw_slide in raw_slides {
            let id = raw_slide.id.trim().to_string();
            if id.is_empty() {
                return Err(ChartError::SlideDeckError(
                    "slide id must not be empty".to_string(),
                ));
            }
            if !seen.insert(id.clone()) {
                return Err(ChartError::SlideDeckError(format!(
                    "duplicate slide id: {}",
                    id
                )));
            }

            let slide = match (raw_slide.lines, raw_slide.text) {
                (Some(lines), None) => Slide::new(id, lines),
                (None, Some(text)) => Slide::from_text(id, &text),
                (None, None) => Slide::new(id, Vec::new()),
                (Some(_), Some(_)) => {
                    return Err(ChartError::SlideDeckError(format!(
                        "slide {} has both lines and text",
                        id
                    )))
                }
            };
            slides.push(slide);
        }

        Ok(Self { slides })
    }

    /// Flatten into one `SlideLine` per physical line.
    ///
    /// `line_index` restarts at 0 on every slide. Blank lines are kept so
    /// indices line up with the stored slide text.
    pub fn slide_lines(&self) -> Vec<SlideLine> {
        self.slides
            .iter()
            .flat_map(|slide| {
                slide
                    .lines
                    .iter()
                    .enumerate()
                    .map(move |(index, text)| SlideLine::new(slide.id.clone(), index, text.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_deck() {
        let yaml = r#"
slides:
  - id: v1
    lines:
      - Amazing grace how sweet the sound
      - That saved a wretch like me
  - id: v2
    text: "I once was lost\nBut now am found"
"#;
        let deck = SlideDeck::from_yaml(yaml).unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[1].lines, vec!["I once was lost", "But now am found"]);

        let lines = deck.slide_lines();
        let keys: Vec<(&str, usize)> = lines
            .iter()
            .map(|l| (l.slide_id.as_str(), l.line_index))
            .collect();
        assert_eq!(keys, vec![("v1", 0), ("v1", 1), ("v2", 0), ("v2", 1)]);
    }

    #[test]
    fn test_json_deck() {
        let json = r#"[{"id": "s1", "lines": ["Jesus loves me"]}]"#;
        let deck = SlideDeck::from_yaml(json).unwrap();
        assert_eq!(deck.slide_lines()[0].text, "Jesus loves me");
    }

    #[test]
    fn test_blank_lines_keep_their_index() {
        let slide = Slide::from_text("s1", "one\n\nthree");
        let lines = SlideDeck::new(vec![slide]).slide_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].line_index, 2);
        assert_eq!(lines[2].text, "three");
    }

    #[test]
    fn test_slide_without_lines() {
        let deck = SlideDeck::from_yaml("- id: blank\n").unwrap();
        assert!(deck.slide_lines().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SlideDeck::from_yaml("- id: a\n- id: a\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid slide deck: duplicate slide id: a");
    }

    #[test]
    fn test_lines_and_text_rejected() {
        let err = SlideDeck::from_yaml("- id: a\n  lines: [x]\n  text: y\n").unwrap_err();
        assert!(matches!(err, ChartError::SlideDeckError(_)));
    }

    #[test]
    fn test_malformed_deck_rejected() {
        assert!(SlideDeck::from_yaml("slides: 3").is_err());
        assert!(SlideDeck::from_yaml("- lines: [x]").is_err());
    }
}
