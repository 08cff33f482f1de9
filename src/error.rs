//! Error types for encoding and rendering.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::code128::CodeSet;

/// Why a piece of input text cannot be encoded.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Data cannot be empty")]
    Empty,

    #[error("Data too long (max 48 characters, got {len})")]
    TooLong { len: usize },

    #[error("Data contains non-ASCII characters. Code 128 only supports ASCII characters (0-127)")]
    NonAscii,

    #[error("Character {ch:?} not supported in Code Set {code_set}")]
    UnsupportedChar { ch: char, code_set: CodeSet },
}

/// Errors surfaced by the encoder and the SVG renderer.
#[derive(Error, Debug)]
pub enum BarcodeError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("Invalid color format: {color:?}")]
    InvalidColor { color: String },

    #[error("Pattern too long: {len} bits (max 500)")]
    PatternTooLarge { len: usize },

    #[error("Text too long: {len} characters (max 100)")]
    TextTooLong { len: usize },

    #[error("Generated SVG would be too large: {width}x{height}")]
    ImageTooLarge { width: u64, height: u64 },

    #[error("Invalid file path provided: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Invalid filename format: {name:?}")]
    InvalidFilename { name: String },

    #[error("Failed to save SVG file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BarcodeError>;
