pub mod axis;
pub mod bar_series;
pub mod chart;
pub mod legend;
pub mod line_series;
pub mod padding;
pub mod palette;
pub mod pie_series;
pub mod series;
pub mod shadow;
pub mod types;

pub use axis::{Axis, AxisKind, AxisStyle, CategoryAxis, GridStyle, NumberAxis};
pub use bar_series::{BarSeries, LabelPadding};
pub use chart::{CartesianChart, ChartBase, ChartModel, ChartTopology, PolarChart};
pub use legend::{Legend, LegendPosition};
pub use line_series::LineSeries;
pub use padding::Padding;
pub use pie_series::PieSeries;
pub use series::{CartesianSeriesKind, PolarSeriesKind, Series, SeriesBase, SeriesKind};
pub use shadow::DropShadow;
pub use types::{
    Color, ContainerHandle, DEFAULT_LABEL_FONT, DEFAULT_TITLE_FONT, DataRecord, Font, Offset,
    TooltipParams, TooltipRenderer,
};
