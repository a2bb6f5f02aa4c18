//! # Import Options
//!
//! Tuning knobs for the parser and aligner. The defaults reproduce the
//! standard import behaviour; callers only need options to turn notes off or
//! to experiment with thresholds.
//!
//! Options can be read from YAML with kebab-case keys, every key optional:
//!
//! ```yaml
//! include-notes: true
//! window: 8
//! short-line-threshold: 0.75
//! long-line-threshold: 0.6
//! short-line-max-words: 2
//! chord-line-ratio: 0.6
//! chord-line-min-tokens: 2
//! ```
//!
//! ```rust
//! use chart_import::ImportOptions;
//!
//! let options = ImportOptions::from_yaml("include-notes: false\nwindow: 4\n")?;
//! assert!(!options.aligner.include_notes);
//! assert_eq!(options.aligner.window, 4);
//! assert_eq!(options.aligner.long_line_threshold, 0.6);
//! # Ok::<(), chart_import::ChartError>(())
//! ```

use crate::error::ChartError;
use serde::Deserialize;

/// Chord-only line detection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Share of tokens that must be chord-shaped for a chord-only line
    pub chord_line_ratio: f64,
    /// Fewest tokens a chord-only line can have
    pub chord_line_min_tokens: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            chord_line_ratio: 0.6,
            chord_line_min_tokens: 2,
        }
    }
}

/// Windowed alignment settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignerConfig {
    pub include_notes: bool,
    /// Slide lines considered past the cursor (the cursor line itself is extra)
    pub window: usize,
    /// Minimum score for lines of at most `short_line_max_words` words
    pub short_line_threshold: f64,
    /// Minimum score for longer lines
    pub long_line_threshold: f64,
    pub short_line_max_words: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            include_notes: true,
            window: 8,
            short_line_threshold: 0.75,
            long_line_threshold: 0.6,
            short_line_max_words: 2,
        }
    }
}

impl AlignerConfig {
    pub fn threshold_for(&self, word_count: usize) -> f64 {
        if word_count <= self.short_line_max_words {
            self.short_line_threshold
        } else {
            self.long_line_threshold
        }
    }
}

/// All options for one import request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOptions {
    pub parser: ParserConfig,
    pub aligner: AlignerConfig,
}

/// Raw options for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawImportOptions {
    include_notes: Option<bool>,
    window: Option<usize>,
    short_line_threshold: Option<f64>,
    long_line_threshold: Option<f64>,
    short_line_max_words: Option<usize>,
    chord_line_ratio: Option<f64>,
    chord_line_min_tokens: Option<usize>,
}

fn unit_interval(name: &str, value: f64) -> Result<f64, ChartError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ChartError::ConfigError(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )))
    }
}

impl ImportOptions {
    /// Default options with notes switched on or off.
    pub fn with_notes(include_notes: bool) -> Self {
        let mut options = Self::default();
        options.aligner.include_notes = include_notes;
        options
    }

    /// Parse options from a YAML document. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ChartError> {
        let raw: RawImportOptions = if content.trim().is_empty() {
            RawImportOptions::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ChartError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawImportOptions) -> Result<Self, ChartError> {
        let parser_defaults = ParserConfig::default();
        let aligner_defaults = AlignerConfig::default();

        let window = raw.window.unwrap_or(aligner_defaults.window);
        if window == 0 {
            return Err(ChartError::ConfigError(
                "window must be at least 1".to_string(),
            ));
        }

        let chord_line_min_tokens = raw
            .chord_line_min_tokens
            .unwrap_or(parser_defaults.chord_line_min_tokens);
        if chord_line_min_tokens == 0 {
            return Err(ChartError::ConfigError(
                "chord-line-min-tokens must be at least 1".to_string(),
            ));
        }

        let parser = ParserConfig {
            chord_line_ratio: unit_interval(
                "chord-line-ratio",
                raw.chord_line_ratio.unwrap_or(parser_defaults.chord_line_ratio),
            )?,
            chord_line_min_tokens,
        };

        let aligner = AlignerConfig {
            include_notes: raw.include_notes.unwrap_or(aligner_defaults.include_notes),
            window,
            short_line_threshold: unit_interval(
                "short-line-threshold",
                raw.short_line_threshold
                    .unwrap_or(aligner_defaults.short_line_threshold),
            )?,
            long_line_threshold: unit_interval(
                "long-line-threshold",
                raw.long_line_threshold
                    .unwrap_or(aligner_defaults.long_line_threshold),
            )?,
            short_line_max_words: raw
                .short_line_max_words
                .unwrap_or(aligner_defaults.short_line_max_words),
        };

        Ok(Self { parser, aligner })
    }
}
