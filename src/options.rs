//! Render options: typed defaults, clamp bounds and lenient overrides.
//!
//! [`RenderOptions`] carries what the caller asked for. Values may be out of
//! range or negative; [`SvgRenderer`](crate::SvgRenderer) clamps them into the
//! [`Limit`]s below when it is built, and validates the colors.

use serde_json::Value;

/// Inclusive clamp range for one numeric option.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Limit {
    pub min: u32,
    pub max: u32,
}

impl Limit {
    /// Clamp a requested value into this range.
    pub fn clamp(self, value: i64) -> u32 {
        num_traits::clamp(value, self.min as i64, self.max as i64) as u32
    }
}

/// Pixels per pattern module.
pub const BAR_WIDTH: Limit = Limit { min: 1, max: 50 };
/// Bar height in pixels.
pub const BAR_HEIGHT: Limit = Limit { min: 10, max: 500 };
/// Each of the four canvas margins.
pub const MARGIN: Limit = Limit { min: 0, max: 100 };
/// Label font size.
pub const TEXT_SIZE: Limit = Limit { min: 8, max: 72 };
/// Gap between the bars and the label.
pub const TEXT_MARGIN: Limit = Limit { min: 0, max: 50 };

/// Canvas margins in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Margins {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl Margins {
    pub const fn new(left: i64, right: i64, top: i64, bottom: i64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same margin on all four sides.
    pub const fn uniform(margin: i64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10)
    }
}

/// Requested renderer configuration.
///
/// `Default` matches the stock barcode configuration: 2px bars, 60px tall,
/// 10px margins, black on white, 12px label 5px below the bars.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub bar_width: i64,
    pub bar_height: i64,
    pub margins: Margins,
    /// Background color string, validated by the renderer.
    pub background_color: String,
    /// Bar and label color string, validated by the renderer.
    pub foreground_color: String,
    pub show_text: bool,
    pub text_size: i64,
    pub text_margin: i64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_width: 2,
            bar_height: 60,
            margins: Margins::default(),
            background_color: String::from("#FFFFFF"),
            foreground_color: String::from("#000000"),
            show_text: true,
            text_size: 12,
            text_margin: 5,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bar_width(mut self, width: i64) -> Self {
        self.bar_width = width;
        self
    }

    pub fn with_bar_height(mut self, height: i64) -> Self {
        self.bar_height = height;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_colors(mut self, background: impl Into<String>, foreground: impl Into<String>) -> Self {
        self.background_color = background.into();
        self.foreground_color = foreground.into();
        self
    }

    pub fn with_show_text(mut self, show: bool) -> Self {
        self.show_text = show;
        self
    }

    pub fn with_text_size(mut self, size: i64) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_text_margin(mut self, margin: i64) -> Self {
        self.text_margin = margin;
        self
    }

    /// Build options from a JSON object of overrides.
    ///
    /// Recognized keys are `bar_width`, `bar_height`, `margin_left`,
    /// `margin_right`, `margin_top`, `margin_bottom`, `background_color`,
    /// `foreground_color`, `show_text`, `text_size` and `text_margin`.
    /// A key holding the wrong JSON type (a string where an integer belongs,
    /// `null`, a number for a color, ...) keeps its default. Unknown keys and
    /// non-object input are ignored.
    ///
    /// ```
    /// use zenbarcode::RenderOptions;
    ///
    /// let opts = RenderOptions::from_json(&serde_json::json!({
    ///     "bar_width": 3,
    ///     "bar_height": "tall",
    ///     "show_text": false
    /// }));
    /// assert_eq!(opts.bar_width, 3);
    /// assert_eq!(opts.bar_height, 60);
    /// assert!(!opts.show_text);
    /// ```
    pub fn from_json(value: &Value) -> Self {
        let mut opts = Self::default();
        let int = |key: &str, field: &mut i64| {
            if let Some(v) = value.get(key).and_then(Value::as_i64) {
                *field = v;
            }
        };
        int("bar_width", &mut opts.bar_width);
        int("bar_height", &mut opts.bar_height);
        int("margin_left", &mut opts.margins.left);
        int("margin_right", &mut opts.margins.right);
        int("margin_top", &mut opts.margins.top);
        int("margin_bottom", &mut opts.margins.bottom);
        int("text_size", &mut opts.text_size);
        int("text_margin", &mut opts.text_margin);

        if let Some(c) = value.get("background_color").and_then(Value::as_str) {
            opts.background_color = String::from(c);
        }
        if let Some(c) = value.get("foreground_color").and_then(Value::as_str) {
            opts.foreground_color = String::from(c);
        }
        if let Some(show) = value.get("show_text").and_then(Value::as_bool) {
            opts.show_text = show;
        }
        opts
    }
}
