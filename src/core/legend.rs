use serde::{Deserialize, Serialize};

use super::{Color, DEFAULT_LABEL_FONT, Font};

/// Side of the chart the legend is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

/// Legend appearance owned by a chart.
///
/// The chart creates its legend once; configuration mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub marker_line_width: f64,
    pub marker_size: f64,
    pub marker_padding: f64,
    pub item_padding_x: f64,
    pub item_padding_y: f64,
    pub label_font: Font,
    pub label_color: Color,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            marker_line_width: 1.0,
            marker_size: 14.0,
            marker_padding: 4.0,
            item_padding_x: 16.0,
            item_padding_y: 8.0,
            label_font: DEFAULT_LABEL_FONT.to_owned(),
            label_color: Color::BLACK,
        }
    }
}
