use serde::{Deserialize, Serialize};

use crate::core::{Color, ContainerHandle, DataRecord, Font, LegendPosition};

use super::{AxisOptions, SeriesOptions};

/// Sparse chart padding. Missing sides follow the box shorthand, see
/// [`crate::core::Padding::from_sides`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingOptions {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl PaddingOptions {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }
}

/// Sparse legend appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    pub marker_line_width: Option<f64>,
    pub marker_size: Option<f64>,
    pub marker_padding: Option<f64>,
    pub item_padding_x: Option<f64>,
    pub item_padding_y: Option<f64>,
    pub label_font: Option<Font>,
    pub label_color: Option<Color>,
}

impl LegendOptions {
    #[must_use]
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = Some(marker_size);
        self
    }

    #[must_use]
    pub fn with_item_padding(mut self, x: f64, y: f64) -> Self {
        self.item_padding_x = Some(x);
        self.item_padding_y = Some(y);
        self
    }

    #[must_use]
    pub fn with_label_font(mut self, font: impl Into<Font>) -> Self {
        self.label_font = Some(font.into());
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }
}

/// Chart-level fields shared by every topology.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseChartOptions {
    pub parent: Option<ContainerHandle>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// When present, replaces the chart's series list.
    pub series: Option<Vec<SeriesOptions>>,
    pub padding: Option<PaddingOptions>,
    pub legend_position: Option<LegendPosition>,
    pub legend_padding: Option<f64>,
    pub legend: Option<LegendOptions>,
    pub data: Option<Vec<DataRecord>>,
    pub tooltip_class: Option<String>,
}

impl BaseChartOptions {
    #[must_use]
    pub fn with_parent(mut self, parent: ContainerHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<SeriesOptions>) -> Self {
        self.series = Some(series);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingOptions) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = Some(position);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataRecord>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Configuration for two-axis charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianChartOptions {
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    #[serde(flatten)]
    pub chart: BaseChartOptions,
}

impl CartesianChartOptions {
    #[must_use]
    pub fn new(x_axis: AxisOptions, y_axis: AxisOptions) -> Self {
        Self {
            x_axis,
            y_axis,
            chart: BaseChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_chart(mut self, chart: BaseChartOptions) -> Self {
        self.chart = chart;
        self
    }
}

/// Configuration for radial charts; they carry no axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarChartOptions {
    #[serde(flatten)]
    pub chart: BaseChartOptions,
}

impl PolarChartOptions {
    #[must_use]
    pub fn new(chart: BaseChartOptions) -> Self {
        Self { chart }
    }
}

pub type BarChartOptions = CartesianChartOptions;
pub type LineChartOptions = CartesianChartOptions;
pub type PieChartOptions = PolarChartOptions;
pub type DoughnutChartOptions = PolarChartOptions;
