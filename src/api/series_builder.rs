use tracing::trace;

use crate::core::{BarSeries, LineSeries, PieSeries, Series, SeriesBase, SeriesKind};

use super::SeriesOptions;
use super::apply::{ApplyOptions, apply_fields};
use super::shadow_builder::create_drop_shadow;

impl ApplyOptions<SeriesOptions> for SeriesBase {
    fn apply_options(&mut self, options: &SeriesOptions) {
        apply_fields!(self, options;
            some title,
            title_font,
            visible,
            show_in_legend,
            tooltip,
            data,
        );
    }
}

impl ApplyOptions<SeriesOptions> for LineSeries {
    fn apply_options(&mut self, options: &SeriesOptions) {
        self.base.apply_options(options);
        apply_fields!(self, options;
            x_field,
            y_field,
            fill,
            stroke,
            line_width,
            marker,
            marker_radius,
            marker_line_width,
            some tooltip_renderer,
        );
    }
}

impl ApplyOptions<SeriesOptions> for BarSeries {
    fn apply_options(&mut self, options: &SeriesOptions) {
        self.base.apply_options(options);
        apply_fields!(self, options;
            x_field,
            y_fields,
            y_field_names,
            grouped,
            fills,
            strokes,
            line_width,
            label_font,
            label_padding,
            some tooltip_renderer,
        );
        if let Some(shadow) = &options.shadow {
            self.shadow = Some(create_drop_shadow(Some(shadow)));
        }
    }
}

impl ApplyOptions<SeriesOptions> for PieSeries {
    fn apply_options(&mut self, options: &SeriesOptions) {
        self.base.apply_options(options);
        apply_fields!(self, options;
            callout_colors,
            callout_width,
            callout_length,
            callout_padding,
            label_font,
            label_color,
            label_min_angle,
            angle_field,
            some radius_field,
            some label_field,
            label,
            fills,
            strokes,
            rotation,
            outer_radius_offset,
            inner_radius_offset,
            line_width,
            some tooltip_renderer,
        );
        if let Some(shadow) = &options.shadow {
            self.shadow = Some(create_drop_shadow(Some(shadow)));
        }
    }
}

/// Applies the fields every series kind shares.
pub fn init_series(series: &mut Series, options: &SeriesOptions) {
    series.base_mut().apply_options(options);
}

pub fn init_line_series(series: &mut LineSeries, options: &SeriesOptions) {
    series.apply_options(options);
}

pub fn init_bar_series(series: &mut BarSeries, options: &SeriesOptions) {
    series.apply_options(options);
}

pub fn init_pie_series(series: &mut PieSeries, options: &SeriesOptions) {
    series.apply_options(options);
}

#[must_use]
pub fn create_line_series(options: &SeriesOptions) -> LineSeries {
    let mut series = LineSeries::default();
    init_line_series(&mut series, options);
    series
}

#[must_use]
pub fn create_bar_series(options: &SeriesOptions) -> BarSeries {
    let mut series = BarSeries::default();
    init_bar_series(&mut series, options);
    series
}

#[must_use]
pub fn create_pie_series(options: &SeriesOptions) -> PieSeries {
    let mut series = PieSeries::default();
    init_pie_series(&mut series, options);
    series
}

/// Creates and configures a series of the effective kind: `forced_kind`
/// when given, else the entry's own discriminator.
///
/// Returns `None` when neither names a known kind.
#[must_use]
pub fn create_series(options: &SeriesOptions, forced_kind: Option<SeriesKind>) -> Option<Series> {
    let kind = forced_kind.or_else(|| options.declared_kind())?;
    let series = match kind {
        SeriesKind::Line => Series::Line(create_line_series(options)),
        SeriesKind::Bar => Series::Bar(create_bar_series(options)),
        SeriesKind::Pie => Series::Pie(create_pie_series(options)),
    };
    trace!(kind = kind.name(), forced = forced_kind.is_some(), "created series");
    Some(series)
}
