use tracing::{debug, trace};

use crate::core::{Axis, AxisKind, AxisStyle, CategoryAxis, NumberAxis};
use crate::error::{ChartError, ChartResult};

use super::AxisOptions;
use super::apply::{ApplyOptions, apply_fields};

impl ApplyOptions<AxisOptions> for AxisStyle {
    fn apply_options(&mut self, options: &AxisOptions) {
        apply_fields!(self, options;
            line_width,
            line_color,
            tick_width,
            tick_size,
            tick_padding,
            tick_color,
            label_font,
            label_color,
            label_rotation,
            mirror_labels,
            parallel_labels,
            grid_style,
        );
    }
}

impl ApplyOptions<AxisOptions> for CategoryAxis {
    fn apply_options(&mut self, options: &AxisOptions) {
        self.style.apply_options(options);
        apply_fields!(self, options; padding_inner, padding_outer);
    }
}

impl ApplyOptions<AxisOptions> for NumberAxis {
    fn apply_options(&mut self, options: &AxisOptions) {
        self.style.apply_options(options);
        apply_fields!(self, options; domain, nice);
    }
}

/// Creates the axis variant named by `options.axis_type` and copies every
/// supplied field that the variant carries onto it.
///
/// Fails only when the discriminator names no known variant. Fields that
/// belong to the other variant are skipped.
pub fn create_axis(options: &AxisOptions) -> ChartResult<Axis> {
    let kind = AxisKind::from_name(&options.axis_type)
        .ok_or_else(|| ChartError::UnknownAxisKind(options.axis_type.clone()))?;

    let foreign_fields = match kind {
        AxisKind::Category => options.number_only_fields(),
        AxisKind::Number => options.category_only_fields(),
    };
    if !foreign_fields.is_empty() {
        debug!(
            kind = kind.name(),
            fields = ?foreign_fields,
            "skipping axis options of the other variant"
        );
    }

    let mut axis = Axis::new(kind);
    match &mut axis {
        Axis::Category(category) => category.apply_options(options),
        Axis::Number(number) => number.apply_options(options),
    }
    trace!(kind = kind.name(), "created axis");
    Ok(axis)
}
