use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of chart/series data, keyed by field name in insertion order.
pub type DataRecord = IndexMap<String, serde_json::Value>;

/// CSS-style font shorthand, e.g. `"bold 12px Verdana, sans-serif"`.
pub type Font = String;

pub const DEFAULT_LABEL_FONT: &str = "12px Verdana, sans-serif";
pub const DEFAULT_TITLE_FONT: &str = "bold 12px Verdana, sans-serif";

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// 2-D offset in pixels. Serialized as an `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Offset {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Offset> for (f64, f64) {
    fn from(offset: Offset) -> Self {
        (offset.x, offset.y)
    }
}

/// Identifier of the host container a chart is mounted into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerHandle(pub String);

impl ContainerHandle {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Input handed to a [`TooltipRenderer`] for one hovered datum.
#[derive(Debug, Clone, Copy)]
pub struct TooltipParams<'a> {
    pub datum: &'a DataRecord,
    pub title: Option<&'a str>,
    pub x_field: Option<&'a str>,
    pub y_field: Option<&'a str>,
}

type TooltipRendererFn = dyn Fn(&TooltipParams<'_>) -> String + Send + Sync;

/// Caller-supplied tooltip formatting callback.
///
/// Clones share the same callback; equality is identity of the callback.
#[derive(Clone)]
pub struct TooltipRenderer(Arc<TooltipRendererFn>);

impl TooltipRenderer {
    pub fn new(render: impl Fn(&TooltipParams<'_>) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    #[must_use]
    pub fn render(&self, params: &TooltipParams<'_>) -> String {
        (self.0)(params)
    }
}

impl PartialEq for TooltipRenderer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TooltipRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipRenderer(..)")
    }
}
