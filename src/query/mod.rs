//! Query-string render options.
//!
//! Parses strings like `?bar_width=3&bar_height=80&show_text=no` into
//! [`RenderOptions`], for callers that receive options over a URL or a
//! command line.
//!
//! # Example
//!
//! ```
//! use zenbarcode::query;
//!
//! let result = query::parse("bar_width=3&background_color=%23ff0000&show_text=off");
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.options.bar_width, 3);
//! assert_eq!(result.options.background_color, "#ff0000");
//! assert!(!result.options.show_text);
//! ```
//!
//! Values that do not parse keep their default and produce a
//! [`ParseWarning::ValueInvalid`]. Colors are passed through unchecked so that
//! building the renderer reports [`BarcodeError::InvalidColor`](crate::BarcodeError::InvalidColor).

mod parse;

use crate::options::RenderOptions;

/// Result of parsing an options query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Options with every recognized, well-formed key applied.
    pub options: RenderOptions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key is not a render option.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse an options query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (options, warnings) = parse::parse_query(query);
    ParseResult { options, warnings }
}
