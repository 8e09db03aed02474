use super::{
    Color, DEFAULT_LABEL_FONT, DropShadow, Font, SeriesBase, TooltipRenderer, palette,
};

/// Single-metric radial series: sector angles come from `angle_field`,
/// optional sector radii from `radius_field`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    pub base: SeriesBase,
    pub angle_field: String,
    pub radius_field: Option<String>,
    pub label_field: Option<String>,
    /// Whether sector labels are drawn.
    pub label: bool,
    pub label_font: Font,
    pub label_color: Color,
    /// Sectors narrower than this angle (degrees) get no label.
    pub label_min_angle: f64,
    pub callout_colors: Vec<Color>,
    pub callout_width: f64,
    pub callout_length: f64,
    pub callout_padding: f64,
    pub fills: Vec<Color>,
    pub strokes: Vec<Color>,
    /// Start angle offset in degrees.
    pub rotation: f64,
    pub outer_radius_offset: f64,
    /// Non-zero turns the pie into a doughnut.
    pub inner_radius_offset: f64,
    pub line_width: f64,
    pub shadow: Option<DropShadow>,
    pub tooltip_renderer: Option<TooltipRenderer>,
}

impl Default for PieSeries {
    fn default() -> Self {
        Self {
            base: SeriesBase::default(),
            angle_field: String::new(),
            radius_field: None,
            label_field: None,
            label: true,
            label_font: DEFAULT_LABEL_FONT.to_owned(),
            label_color: Color::BLACK,
            label_min_angle: 20.0,
            callout_colors: palette::default_strokes(),
            callout_width: 1.0,
            callout_length: 10.0,
            callout_padding: 3.0,
            fills: palette::default_fills(),
            strokes: palette::default_strokes(),
            rotation: 0.0,
            outer_radius_offset: 0.0,
            inner_radius_offset: 0.0,
            line_width: 1.0,
            shadow: None,
            tooltip_renderer: None,
        }
    }
}
