use tracing::debug;

use crate::core::{
    CartesianChart, CartesianSeriesKind, ChartModel, Padding, PolarChart, PolarSeriesKind, Series,
    SeriesKind,
};
use crate::error::ChartResult;

use super::apply::{apply_fields, assign_with};
use super::axis_builder::create_axis;
use super::legend_configurator::init_legend;
use super::series_builder::create_series;
use super::{BaseChartOptions, CartesianChartOptions, PolarChartOptions, SeriesOptions};

/// Builds a two-axis chart; each series entry declares its own kind.
pub fn create_cartesian_chart(options: &CartesianChartOptions) -> ChartResult<CartesianChart> {
    build_cartesian_chart(options, None)
}

/// Builds a two-axis chart whose every series entry is read as a bar series.
pub fn create_bar_chart(options: &CartesianChartOptions) -> ChartResult<CartesianChart> {
    build_cartesian_chart(options, Some(CartesianSeriesKind::Bar))
}

/// Builds a two-axis chart whose every series entry is read as a line series.
pub fn create_line_chart(options: &CartesianChartOptions) -> ChartResult<CartesianChart> {
    build_cartesian_chart(options, Some(CartesianSeriesKind::Line))
}

/// Builds a radial chart; each series entry declares its own kind.
#[must_use]
pub fn create_polar_chart(options: &PolarChartOptions) -> PolarChart {
    init_polar_chart(PolarChart::new(), options, None)
}

/// Builds a radial chart for doughnut rendering. Series entries keep their
/// own kind; the hole comes from each pie entry's `inner_radius_offset`.
#[must_use]
pub fn create_doughnut_chart(options: &PolarChartOptions) -> PolarChart {
    init_polar_chart(PolarChart::new(), options, None)
}

/// Builds a radial chart whose every series entry is read as a pie series.
#[must_use]
pub fn create_pie_chart(options: &PolarChartOptions) -> PolarChart {
    init_polar_chart(PolarChart::new(), options, Some(PolarSeriesKind::Pie))
}

fn build_cartesian_chart(
    options: &CartesianChartOptions,
    forced_kind: Option<CartesianSeriesKind>,
) -> ChartResult<CartesianChart> {
    let x_axis = create_axis(&options.x_axis)?;
    let y_axis = create_axis(&options.y_axis)?;
    let chart = CartesianChart::new(x_axis, y_axis);
    Ok(init_cartesian_chart(chart, options, forced_kind))
}

#[must_use]
pub fn init_cartesian_chart(
    mut chart: CartesianChart,
    options: &CartesianChartOptions,
    forced_kind: Option<CartesianSeriesKind>,
) -> CartesianChart {
    init_chart(&mut chart, &options.chart, forced_kind.map(SeriesKind::from));
    chart
}

#[must_use]
pub fn init_polar_chart(
    mut chart: PolarChart,
    options: &PolarChartOptions,
    forced_kind: Option<PolarSeriesKind>,
) -> PolarChart {
    init_chart(&mut chart, &options.chart, forced_kind.map(SeriesKind::from));
    chart
}

/// Applies every present chart-level field to `chart`.
///
/// A present series list replaces the chart's series; entries whose kind
/// cannot be resolved are skipped and the rest keep their relative order.
pub fn init_chart<C: ChartModel + ?Sized>(
    chart: &mut C,
    options: &BaseChartOptions,
    forced_kind: Option<SeriesKind>,
) {
    let topology = chart.topology();
    let base = chart.base_mut();

    apply_fields!(base, options; some parent, width, height);
    if let Some(entries) = &options.series {
        base.series = create_series_list(entries, forced_kind);
    }
    assign_with(&mut base.padding, options.padding.as_ref(), |padding| {
        Padding::from_sides(padding.top, padding.right, padding.bottom, padding.left)
    });
    apply_fields!(base, options; legend_position, legend_padding);
    if let Some(legend) = &options.legend {
        init_legend(&mut base.legend, legend);
    }
    apply_fields!(base, options; data, some tooltip_class);

    debug!(
        ?topology,
        series_count = base.series.len(),
        forced_kind = forced_kind.map(SeriesKind::name),
        "materialized chart"
    );
}

fn create_series_list(
    entries: &[SeriesOptions],
    forced_kind: Option<SeriesKind>,
) -> Vec<Series> {
    let mut series = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match create_series(entry, forced_kind) {
            Some(instance) => series.push(instance),
            None => debug!(
                index,
                series_type = entry.series_type.as_deref(),
                "skipping series entry with unresolved kind"
            ),
        }
    }
    series
}
