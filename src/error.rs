//! # Error Types
//!
//! Errors raised by the outer surface of the importer: option loading,
//! slide-deck loading, and the caller-facing pipeline.
//!
//! The parsing and alignment stages themselves never fail. Anything they
//! cannot place is reported through the `warnings` list of the result.
//!
//! ## Usage
//! ```rust
//! use chart_import::{import, ChartError, SlideLine};
//!
//! let slides = vec![SlideLine::new("s1", 0, "Amazing grace")];
//! match import("   ", &slides) {
//!     Err(ChartError::EmptyChart) => {}
//!     other => panic!("expected EmptyChart, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Invalid import options.
    ///
    /// # Example
    /// ```
    /// # use chart_import::ChartError;
    /// let err = ChartError::ConfigError("window must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid options: window must be at least 1");
    /// ```
    #[error("Invalid options: {0}")]
    ConfigError(String),

    /// The slide deck document could not be read into slide lines.
    #[error("Invalid slide deck: {0}")]
    SlideDeckError(String),

    /// The extracted chart text contained nothing but whitespace.
    #[error("Chart text is empty")]
    EmptyChart,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
