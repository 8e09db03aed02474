use super::{Axis, ContainerHandle, DataRecord, Legend, LegendPosition, Padding, Series};

/// How a chart maps data onto the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartTopology {
    /// Rectangular grid bound to an x and a y axis.
    Cartesian,
    /// Radial layout without axes.
    Polar,
}

/// State shared by every chart topology.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBase {
    pub parent: Option<ContainerHandle>,
    pub width: f64,
    pub height: f64,
    pub series: Vec<Series>,
    pub padding: Padding,
    pub legend_position: LegendPosition,
    /// Gap between the legend and the series area, in pixels.
    pub legend_padding: f64,
    pub legend: Legend,
    pub data: Vec<DataRecord>,
    /// Name of the tooltip renderer/style class the host uses for this chart.
    pub tooltip_class: Option<String>,
}

impl Default for ChartBase {
    fn default() -> Self {
        Self {
            parent: None,
            width: 800.0,
            height: 400.0,
            series: Vec::new(),
            padding: Padding::default(),
            legend_position: LegendPosition::default(),
            legend_padding: 20.0,
            legend: Legend::default(),
            data: Vec::new(),
            tooltip_class: None,
        }
    }
}

/// Common surface of chart instances, used to configure any topology
/// through the same code path.
pub trait ChartModel {
    fn topology(&self) -> ChartTopology;
    fn base(&self) -> &ChartBase;
    fn base_mut(&mut self) -> &mut ChartBase;

    fn series(&self) -> &[Series] {
        &self.base().series
    }

    fn legend(&self) -> &Legend {
        &self.base().legend
    }
}

/// Two-axis chart hosting line and bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianChart {
    pub base: ChartBase,
    x_axis: Axis,
    y_axis: Axis,
}

impl CartesianChart {
    #[must_use]
    pub fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            base: ChartBase::default(),
            x_axis,
            y_axis,
        }
    }

    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }
}

impl ChartModel for CartesianChart {
    fn topology(&self) -> ChartTopology {
        ChartTopology::Cartesian
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }
}

/// Radial chart hosting pie series. Holds no axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarChart {
    pub base: ChartBase,
}

impl PolarChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartModel for PolarChart {
    fn topology(&self) -> ChartTopology {
        ChartTopology::Polar
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }
}
