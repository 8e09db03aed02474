//! Configuration materialization.
//!
//! Sparse option trees go in, configured chart instances come out. Every
//! entry point is a free function; nothing here keeps state between calls.

pub mod apply;
mod axis_builder;
mod axis_options;
mod chart_builder;
mod chart_options;
mod legend_configurator;
mod series_builder;
mod series_options;
mod shadow_builder;

pub use apply::ApplyOptions;
pub use axis_builder::create_axis;
pub use axis_options::AxisOptions;
pub use chart_builder::{
    create_bar_chart, create_cartesian_chart, create_doughnut_chart, create_line_chart,
    create_pie_chart, create_polar_chart, init_cartesian_chart, init_chart, init_polar_chart,
};
pub use chart_options::{
    BarChartOptions, BaseChartOptions, CartesianChartOptions, DoughnutChartOptions,
    LegendOptions, LineChartOptions, PaddingOptions, PieChartOptions, PolarChartOptions,
};
pub use legend_configurator::init_legend;
pub use series_builder::{
    create_bar_series, create_line_series, create_pie_series, create_series, init_bar_series,
    init_line_series, init_pie_series, init_series,
};
pub use series_options::{DropShadowOptions, SeriesOptions};
pub use shadow_builder::create_drop_shadow;
