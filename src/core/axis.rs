use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use super::{Color, DEFAULT_LABEL_FONT, Font};

/// Closed set of axis variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    /// Discrete ordinal axis (band scale).
    Category,
    /// Continuous numeric axis (linear scale).
    Number,
}

impl AxisKind {
    /// Resolves a configuration discriminator (`"category"` / `"number"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "category" => Some(Self::Category),
            "number" => Some(Self::Number),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Number => "number",
        }
    }
}

/// Stroke used for one ring of grid lines.
///
/// When several styles are configured, successive grid lines cycle through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub stroke: Color,
    /// Dash/gap lengths in pixels; empty means a solid line.
    pub line_dash: SmallVec<[f64; 4]>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: Color::from_rgb8(219, 219, 219),
            line_dash: smallvec![4.0, 2.0],
        }
    }
}

/// Appearance shared by every axis variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub line_width: f64,
    pub line_color: Color,
    pub tick_width: f64,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub tick_color: Color,
    pub label_font: Font,
    pub label_color: Color,
    /// Label rotation in degrees.
    pub label_rotation: f64,
    pub mirror_labels: bool,
    pub parallel_labels: bool,
    pub grid_style: Vec<GridStyle>,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_color: Color::from_rgb8(195, 195, 195),
            tick_width: 1.0,
            tick_size: 6.0,
            tick_padding: 5.0,
            tick_color: Color::from_rgb8(195, 195, 195),
            label_font: DEFAULT_LABEL_FONT.to_owned(),
            label_color: Color::from_rgb8(87, 87, 87),
            label_rotation: 0.0,
            mirror_labels: false,
            parallel_labels: false,
            grid_style: vec![GridStyle::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub style: AxisStyle,
    /// Fraction of each band left empty between neighbouring categories.
    pub padding_inner: f64,
    /// Fraction of a band left empty before the first and after the last category.
    pub padding_outer: f64,
}

impl Default for CategoryAxis {
    fn default() -> Self {
        Self {
            style: AxisStyle::default(),
            padding_inner: 0.2,
            padding_outer: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberAxis {
    pub style: AxisStyle,
    pub domain: (f64, f64),
    /// Extend the domain to round tick values.
    pub nice: bool,
}

impl Default for NumberAxis {
    fn default() -> Self {
        Self {
            style: AxisStyle::default(),
            domain: (0.0, 1.0),
            nice: true,
        }
    }
}

/// Axis instance owned by a cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Axis {
    Category(CategoryAxis),
    Number(NumberAxis),
}

impl Axis {
    /// Creates an axis of `kind` with every field at its default.
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        match kind {
            AxisKind::Category => Self::Category(CategoryAxis::default()),
            AxisKind::Number => Self::Number(NumberAxis::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        match self {
            Self::Category(_) => AxisKind::Category,
            Self::Number(_) => AxisKind::Number,
        }
    }

    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        match self {
            Self::Category(axis) => &axis.style,
            Self::Number(axis) => &axis.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut AxisStyle {
        match self {
            Self::Category(axis) => &mut axis.style,
            Self::Number(axis) => &mut axis.style,
        }
    }

    #[must_use]
    pub fn as_category(&self) -> Option<&CategoryAxis> {
        match self {
            Self::Category(axis) => Some(axis),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<&NumberAxis> {
        match self {
            Self::Number(axis) => Some(axis),
            Self::Category(_) => None,
        }
    }
}
