use serde::{Deserialize, Serialize};

use super::{
    Color, DEFAULT_LABEL_FONT, DropShadow, Font, SeriesBase, TooltipRenderer, palette,
};

/// Horizontal and vertical gap between a bar and its label, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPadding {
    pub x: f64,
    pub y: f64,
}

impl LabelPadding {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for LabelPadding {
    fn default() -> Self {
        Self::new(10.0, 10.0)
    }
}

/// Multi-metric series: one bar per entry of `y_fields` for every category,
/// stacked unless `grouped` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub base: SeriesBase,
    pub x_field: String,
    pub y_fields: Vec<String>,
    /// Display names for `y_fields`, matched by index.
    pub y_field_names: Vec<String>,
    pub grouped: bool,
    pub fills: Vec<Color>,
    pub strokes: Vec<Color>,
    pub line_width: f64,
    pub label_font: Font,
    pub label_padding: LabelPadding,
    pub shadow: Option<DropShadow>,
    pub tooltip_renderer: Option<TooltipRenderer>,
}

impl Default for BarSeries {
    fn default() -> Self {
        Self {
            base: SeriesBase::default(),
            x_field: String::new(),
            y_fields: Vec::new(),
            y_field_names: Vec::new(),
            grouped: false,
            fills: palette::default_fills(),
            strokes: palette::default_strokes(),
            line_width: 1.0,
            label_font: DEFAULT_LABEL_FONT.to_owned(),
            label_padding: LabelPadding::default(),
            shadow: None,
            tooltip_renderer: None,
        }
    }
}
