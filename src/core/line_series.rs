use super::{Color, SeriesBase, TooltipRenderer, palette};

/// Single-metric series drawn as a polyline through `(x_field, y_field)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub base: SeriesBase,
    pub x_field: String,
    pub y_field: String,
    /// Marker fill.
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    /// Whether point markers are drawn.
    pub marker: bool,
    pub marker_radius: f64,
    pub marker_line_width: f64,
    pub tooltip_renderer: Option<TooltipRenderer>,
}

impl Default for LineSeries {
    fn default() -> Self {
        Self {
            base: SeriesBase::default(),
            x_field: String::new(),
            y_field: String::new(),
            fill: palette::DEFAULT_FILLS[0],
            stroke: palette::DEFAULT_STROKES[0],
            line_width: 2.0,
            marker: false,
            marker_radius: 5.0,
            marker_line_width: 2.0,
            tooltip_renderer: None,
        }
    }
}
