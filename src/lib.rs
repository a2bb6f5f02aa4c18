pub mod aligner;
pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod similarity;
pub mod slides;
pub mod snap;
pub mod types;

pub use aligner::{match_lines, match_lines_with_config};
pub use api::{import, import_chart};
pub use chord::is_chord_token;
pub use config::{AlignerConfig, ImportOptions, ParserConfig};
pub use error::ChartError;
pub use parser::{parse, parse_with_config};
pub use slides::{Slide, SlideDeck};
pub use types::*;
