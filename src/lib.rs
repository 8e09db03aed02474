//! chart-builder: turns declarative chart configuration into chart instances.
//!
//! Callers describe a chart as a tree of sparse option structs (axes, series,
//! legend, shadows, layout). The factories in [`api`] select the concrete
//! axis/series/chart variants, apply only the fields that were supplied and
//! hand back a fully wired [`core`] object graph for a renderer to own.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    AxisOptions, BaseChartOptions, CartesianChartOptions, DropShadowOptions, LegendOptions,
    PaddingOptions, PolarChartOptions, SeriesOptions, create_bar_chart, create_cartesian_chart,
    create_doughnut_chart, create_line_chart, create_pie_chart, create_polar_chart,
};
pub use crate::core::{Axis, CartesianChart, ChartModel, PolarChart, Series};
pub use error::{ChartError, ChartResult};
