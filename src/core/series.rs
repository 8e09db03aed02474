use serde::{Deserialize, Serialize};

use super::{BarSeries, DEFAULT_TITLE_FONT, DataRecord, Font, LineSeries, PieSeries};

/// Closed set of series variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
    Bar,
    Pie,
}

impl SeriesKind {
    /// Resolves a configuration discriminator (`"line"` / `"bar"` / `"pie"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "pie" => Some(Self::Pie),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

/// Series kinds a cartesian chart can force onto its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartesianSeriesKind {
    Line,
    Bar,
}

impl From<CartesianSeriesKind> for SeriesKind {
    fn from(kind: CartesianSeriesKind) -> Self {
        match kind {
            CartesianSeriesKind::Line => Self::Line,
            CartesianSeriesKind::Bar => Self::Bar,
        }
    }
}

/// Series kinds a polar chart can force onto its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarSeriesKind {
    Pie,
}

impl From<PolarSeriesKind> for SeriesKind {
    fn from(kind: PolarSeriesKind) -> Self {
        match kind {
            PolarSeriesKind::Pie => Self::Pie,
        }
    }
}

/// Fields every series variant carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBase {
    pub title: Option<String>,
    pub title_font: Font,
    pub visible: bool,
    pub show_in_legend: bool,
    /// Whether hovering the series shows a tooltip.
    pub tooltip: bool,
    pub data: Vec<DataRecord>,
}

impl Default for SeriesBase {
    fn default() -> Self {
        Self {
            title: None,
            title_font: DEFAULT_TITLE_FONT.to_owned(),
            visible: true,
            show_in_legend: true,
            tooltip: false,
            data: Vec::new(),
        }
    }
}

/// Series instance owned by a chart. The variant never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line(LineSeries),
    Bar(BarSeries),
    Pie(PieSeries),
}

impl Series {
    /// Creates a series of `kind` with every field at its default.
    #[must_use]
    pub fn new(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Line => Self::Line(LineSeries::default()),
            SeriesKind::Bar => Self::Bar(BarSeries::default()),
            SeriesKind::Pie => Self::Pie(PieSeries::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Line(_) => SeriesKind::Line,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Pie(_) => SeriesKind::Pie,
        }
    }

    #[must_use]
    pub fn base(&self) -> &SeriesBase {
        match self {
            Self::Line(series) => &series.base,
            Self::Bar(series) => &series.base,
            Self::Pie(series) => &series.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut SeriesBase {
        match self {
            Self::Line(series) => &mut series.base,
            Self::Bar(series) => &mut series.base,
            Self::Pie(series) => &mut series.base,
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LineSeries> {
        match self {
            Self::Line(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bar(&self) -> Option<&BarSeries> {
        match self {
            Self::Bar(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pie(&self) -> Option<&PieSeries> {
        match self {
            Self::Pie(series) => Some(series),
            _ => None,
        }
    }
}

impl From<LineSeries> for Series {
    fn from(series: LineSeries) -> Self {
        Self::Line(series)
    }
}

impl From<BarSeries> for Series {
    fn from(series: BarSeries) -> Self {
        Self::Bar(series)
    }
}

impl From<PieSeries> for Series {
    fn from(series: PieSeries) -> Self {
        Self::Pie(series)
    }
}
