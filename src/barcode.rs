//! One-call barcode generation.
//!
//! [`Barcode`] pairs the encoder with a set of [`RenderOptions`] so callers
//! can go from text to SVG without handling patterns themselves.
//!
//! ```
//! use zenbarcode::{Barcode, RenderOptions};
//!
//! let barcode = Barcode::with_options(RenderOptions::default().with_bar_width(3));
//! let svg = barcode.generate_svg("ORDER-42", None).unwrap();
//! assert!(svg.contains(">ORDER-42</text>"));
//! ```

use std::path::{Path, PathBuf};

use crate::code128::Code128;
use crate::error::Result;
use crate::options::RenderOptions;
use crate::svg::SvgRenderer;

/// Encoder plus render options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Barcode {
    coder: Code128,
    options: RenderOptions,
}

impl Barcode {
    /// Barcode generator with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            coder: Code128::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Binary module pattern for `code`.
    pub fn generate(&self, code: &str) -> Result<String> {
        Ok(self.coder.generate(code)?)
    }

    /// Same as [`generate`](Self::generate).
    pub fn binary_pattern(&self, code: &str) -> Result<String> {
        self.generate(code)
    }

    /// Whether `code` can be encoded.
    pub fn validate_code(&self, code: &str) -> bool {
        self.coder.validate_data(code)
    }

    /// Render `code` as SVG.
    ///
    /// The label is `text` when given and non-empty, otherwise `code` itself.
    pub fn generate_svg(&self, code: &str, text: Option<&str>) -> Result<String> {
        let pattern = self.generate(code)?;
        let label = text.filter(|t| !t.is_empty()).unwrap_or(code);
        self.renderer()?.render(&pattern, label)
    }

    /// Render `code` (labelled with itself) and write it to `path`.
    pub fn generate_svg_file(&self, code: &str, path: impl AsRef<Path>) -> Result<PathBuf> {
        let pattern = self.generate(code)?;
        self.renderer()?.render_to_file(&pattern, path, code)
    }

    /// Render `code` as a base64 `data:` URI.
    pub fn generate_svg_base64(&self, code: &str) -> Result<String> {
        let pattern = self.generate(code)?;
        self.renderer()?.render_to_base64(&pattern, code)
    }

    /// Base64 `data:` URI using default options except bar width and height.
    ///
    /// Ignores the options this generator was built with.
    pub fn generate_with_options(&self, code: &str, bar_width: i64, bar_height: i64) -> Result<String> {
        let pattern = self.generate(code)?;
        let options = RenderOptions::default()
            .with_bar_width(bar_width)
            .with_bar_height(bar_height);
        SvgRenderer::new(&options)?.render_to_base64(&pattern, code)
    }

    fn renderer(&self) -> Result<SvgRenderer> {
        SvgRenderer::new(&self.options)
    }
}
