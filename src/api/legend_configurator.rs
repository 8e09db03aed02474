use crate::core::Legend;

use super::LegendOptions;
use super::apply::{ApplyOptions, apply_fields};

impl ApplyOptions<LegendOptions> for Legend {
    fn apply_options(&mut self, options: &LegendOptions) {
        apply_fields!(self, options;
            marker_line_width,
            marker_size,
            marker_padding,
            item_padding_x,
            item_padding_y,
            label_font,
            label_color,
        );
    }
}

/// Updates a chart's legend in place. Repeated calls accumulate; a field set
/// by a later call wins.
pub fn init_legend(legend: &mut Legend, options: &LegendOptions) {
    legend.apply_options(options);
}
