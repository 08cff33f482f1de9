//! SVG rendering of Code 128 module patterns.
//!
//! Produces a flat document: a header sized to the canvas, one background
//! rectangle, one rectangle per `1` module, an optional centered label, and
//! the closing tag. Consumers rely on that order: the first `<rect>` is the
//! background and bar rectangles follow left to right.
//!
//! # Example
//!
//! ```
//! use zenbarcode::{Code128, RenderOptions, SvgRenderer};
//!
//! let pattern = Code128::new().generate("HELLO").unwrap();
//! let renderer = SvgRenderer::new(&RenderOptions::default()).unwrap();
//!
//! let svg = renderer.render(&pattern, "HELLO").unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.ends_with("</svg>"));
//! ```
//!
//! Every input is bounded: patterns up to 500 modules, labels up to 100
//! characters, canvases up to 50000×10000 pixels.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{BarcodeError, Result};
use crate::options::{BAR_HEIGHT, BAR_WIDTH, MARGIN, RenderOptions, TEXT_MARGIN, TEXT_SIZE};

/// Longest pattern, in modules, accepted by [`SvgRenderer::render`].
pub const MAX_PATTERN_LEN: usize = 500;
/// Longest label, in characters.
pub const MAX_TEXT_LEN: usize = 100;
/// Widest canvas in pixels.
pub const MAX_WIDTH: u64 = 50_000;
/// Tallest canvas in pixels.
pub const MAX_HEIGHT: u64 = 10_000;
/// Prefix of [`SvgRenderer::render_to_base64`] output.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

static SVG_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9_.-]+\.svg$").expect("filename pattern is valid"));

/// Canvas margins after clamping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct Edges {
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
}

/// Renders module patterns as SVG.
///
/// Every numeric field is kept inside its [`Limit`](crate::options::Limit)
/// and both colors are validated, whether set at construction or through the
/// setters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgRenderer {
    bar_width: u32,
    bar_height: u32,
    margins: Edges,
    background: Color,
    foreground: Color,
    show_text: bool,
    text_size: u32,
    text_margin: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            bar_width: 2,
            bar_height: 60,
            margins: Edges {
                left: 10,
                right: 10,
                top: 10,
                bottom: 10,
            },
            background: Color::white(),
            foreground: Color::black(),
            show_text: true,
            text_size: 12,
            text_margin: 5,
        }
    }
}

impl SvgRenderer {
    /// Build a renderer, clamping numeric options and validating colors.
    ///
    /// Fails with [`BarcodeError::InvalidColor`] if either color is malformed.
    pub fn new(options: &RenderOptions) -> Result<Self> {
        let background = Color::parse(&options.background_color)?;
        let foreground = Color::parse(&options.foreground_color)?;

        let mut renderer = Self {
            background,
            foreground,
            show_text: options.show_text,
            text_size: TEXT_SIZE.clamp(options.text_size),
            text_margin: TEXT_MARGIN.clamp(options.text_margin),
            ..Self::default()
        };
        let m = options.margins;
        renderer
            .set_bar_width(options.bar_width)
            .set_bar_height(options.bar_height)
            .set_margins(m.left, m.right, m.top, m.bottom);
        Ok(renderer)
    }

    pub fn bar_width(&self) -> u32 {
        self.bar_width
    }

    pub fn bar_height(&self) -> u32 {
        self.bar_height
    }

    /// Margins as `(left, right, top, bottom)`.
    pub fn margins(&self) -> (u32, u32, u32, u32) {
        let m = self.margins;
        (m.left, m.right, m.top, m.bottom)
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn foreground(&self) -> &Color {
        &self.foreground
    }

    pub fn show_text(&self) -> bool {
        self.show_text
    }

    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    pub fn text_margin(&self) -> u32 {
        self.text_margin
    }

    /// Set pixels per module, clamped to 1..=50.
    pub fn set_bar_width(&mut self, width: i64) -> &mut Self {
        self.bar_width = BAR_WIDTH.clamp(width);
        self
    }

    /// Set bar height, clamped to 10..=500.
    pub fn set_bar_height(&mut self, height: i64) -> &mut Self {
        self.bar_height = BAR_HEIGHT.clamp(height);
        self
    }

    /// Set all four margins, each clamped to 0..=100.
    pub fn set_margins(&mut self, left: i64, right: i64, top: i64, bottom: i64) -> &mut Self {
        self.margins = Edges {
            left: MARGIN.clamp(left),
            right: MARGIN.clamp(right),
            top: MARGIN.clamp(top),
            bottom: MARGIN.clamp(bottom),
        };
        self
    }

    /// Set background and foreground colors.
    ///
    /// Both are validated before either is applied.
    pub fn set_colors(&mut self, background: &str, foreground: &str) -> Result<&mut Self> {
        let background = Color::parse(background)?;
        let foreground = Color::parse(foreground)?;
        self.background = background;
        self.foreground = foreground;
        Ok(self)
    }

    pub fn set_show_text(&mut self, show: bool) -> &mut Self {
        self.show_text = show;
        self
    }

    /// Canvas `(width, height)` for a pattern and label, with all bounds checked.
    pub fn canvas_size(&self, pattern: &str, text: &str) -> Result<(u32, u32)> {
        let pattern_len = pattern.chars().count();
        if pattern_len > MAX_PATTERN_LEN {
            return Err(BarcodeError::PatternTooLarge { len: pattern_len });
        }
        let text_len = text.chars().count();
        if text_len > MAX_TEXT_LEN {
            return Err(BarcodeError::TextTooLong { len: text_len });
        }

        let m = self.margins;
        let width = pattern_len as u64 * self.bar_width as u64 + m.left as u64 + m.right as u64;
        let text_height = if self.draws_label(text) {
            self.text_size as u64 + self.text_margin as u64
        } else {
            0
        };
        let height = self.bar_height as u64 + m.top as u64 + m.bottom as u64 + text_height;

        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(BarcodeError::ImageTooLarge { width, height });
        }
        Ok((width as u32, height as u32))
    }

    /// Render `pattern` as an SVG document, labelled with `text`.
    ///
    /// An empty `text` (or `show_text == false`) omits the label.
    pub fn render(&self, pattern: &str, text: &str) -> Result<String> {
        let (width, height) = self.canvas_size(pattern, text)?;
        trace!(width, height, modules = pattern.len(), "rendering barcode svg");

        let mut svg = String::with_capacity(256 + pattern.len() * 64);

        svg.push_str(&format!(
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
        ));
        svg.push_str(&format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
            self.background
        ));

        let y = self.margins.top;
        let mut x = self.margins.left;
        for module in pattern.chars() {
            if module == '1' {
                svg.push_str(&format!(
                    r#"<rect x="{x}" y="{y}" width="{}" height="{}" fill="{}"/>"#,
                    self.bar_width, self.bar_height, self.foreground
                ));
            }
            x += self.bar_width;
        }

        if self.draws_label(text) {
            let text_y = self.margins.top + self.bar_height + self.text_margin + self.text_size;
            svg.push_str(&format!(
                r#"<text x="{}" y="{text_y}" font-family="monospace" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
                width / 2,
                self.text_size,
                self.foreground,
                escape_xml(text)
            ));
        }

        svg.push_str("</svg>");
        Ok(svg)
    }

    /// Render and write the SVG to `path`, returning the path.
    ///
    /// The parent directory must already exist. The file name must match
    /// `[A-Za-z0-9_.-]+\.svg` (extension case-insensitive). Nothing is
    /// created when validation fails.
    pub fn render_to_file(&self, pattern: &str, path: impl AsRef<Path>, text: &str) -> Result<PathBuf> {
        let svg = self.render(pattern, text)?;
        let path = path.as_ref();

        let invalid_path = || BarcodeError::InvalidPath {
            path: path.to_path_buf(),
        };
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let resolved = dir.canonicalize().map_err(|_| invalid_path())?;
        if resolved.components().any(|c| c == Component::ParentDir) {
            return Err(invalid_path());
        }

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if !SVG_FILENAME.is_match(name) {
            return Err(BarcodeError::InvalidFilename {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            });
        }

        if !resolved.is_dir() {
            return Err(invalid_path());
        }

        write_file(path, svg.as_bytes()).map_err(|source| BarcodeError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = svg.len(), "wrote barcode svg");
        Ok(path.to_path_buf())
    }

    /// Render and wrap the SVG in a `data:image/svg+xml;base64,` URI.
    pub fn render_to_base64(&self, pattern: &str, text: &str) -> Result<String> {
        let svg = self.render(pattern, text)?;
        Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(svg)))
    }

    fn draws_label(&self, text: &str) -> bool {
        self.show_text && !text.is_empty()
    }
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(contents)?;
    out.flush()
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
