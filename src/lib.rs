//! Code 128 barcode encoding and SVG rendering.
//!
//! Text goes in, a `0`/`1` module pattern comes out of [`Code128`], and
//! [`SvgRenderer`] draws that pattern as a self-contained SVG document (string,
//! file or base64 `data:` URI). [`Barcode`] wires the two together.
//!
//! ```
//! use zenbarcode::{Code128, SvgRenderer};
//!
//! let pattern = Code128::new().generate("TEST123")?;
//! let svg = SvgRenderer::default().render(&pattern, "TEST123")?;
//! assert!(svg.contains(">TEST123</text>"));
//! # Ok::<(), zenbarcode::BarcodeError>(())
//! ```
//!
//! # Modules
//!
//! - [`code128`]: subset selection, symbol values, checksum, pattern assembly
//! - [`svg`]: bounded SVG output with clamped geometry and validated colors
//! - [`options`]: [`RenderOptions`] defaults, clamp limits, JSON overrides
//! - [`query`]: `key=value&...` option strings (feature `query`)
//!
//! Every input is size-capped (48 characters of data, 500 modules, 100
//! characters of label, 50000×10000 pixel canvas) so work is bounded for any
//! caller-supplied value.

#![forbid(unsafe_code)]

pub mod barcode;
pub mod code128;
pub mod color;
pub mod error;
pub mod options;
#[cfg(feature = "query")]
pub mod query;
pub mod svg;
mod tables;

pub use barcode::Barcode;
pub use code128::{Code128, CodeSet, Encoding};
pub use color::Color;
pub use error::{BarcodeError, InputError, Result};
pub use options::{Margins, RenderOptions};
pub use svg::SvgRenderer;
