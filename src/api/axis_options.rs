use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisKind, Color, Font, GridStyle};

/// Sparse axis configuration.
///
/// `axis_type` selects the variant; every other field is optional and only
/// overrides the created axis' default when present. `padding_inner` and
/// `padding_outer` apply to category axes only, `domain` and `nice` to
/// number axes only; the other variant ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(rename = "type")]
    pub axis_type: String,
    pub line_width: Option<f64>,
    pub line_color: Option<Color>,
    pub tick_width: Option<f64>,
    pub tick_size: Option<f64>,
    pub tick_padding: Option<f64>,
    pub tick_color: Option<Color>,
    pub label_font: Option<Font>,
    pub label_color: Option<Color>,
    pub label_rotation: Option<f64>,
    pub mirror_labels: Option<bool>,
    pub parallel_labels: Option<bool>,
    pub grid_style: Option<Vec<GridStyle>>,
    pub padding_inner: Option<f64>,
    pub padding_outer: Option<f64>,
    pub domain: Option<(f64, f64)>,
    pub nice: Option<bool>,
}

impl AxisOptions {
    /// Options with only the discriminator set.
    #[must_use]
    pub fn new(axis_type: impl Into<String>) -> Self {
        Self {
            axis_type: axis_type.into(),
            line_width: None,
            line_color: None,
            tick_width: None,
            tick_size: None,
            tick_padding: None,
            tick_color: None,
            label_font: None,
            label_color: None,
            label_rotation: None,
            mirror_labels: None,
            parallel_labels: None,
            grid_style: None,
            padding_inner: None,
            padding_outer: None,
            domain: None,
            nice: None,
        }
    }

    #[must_use]
    pub fn category() -> Self {
        Self::new(AxisKind::Category.name())
    }

    #[must_use]
    pub fn number() -> Self {
        Self::new(AxisKind::Number.name())
    }

    #[must_use]
    pub fn with_line(mut self, width: f64, color: Color) -> Self {
        self.line_width = Some(width);
        self.line_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label_font(mut self, font: impl Into<Font>) -> Self {
        self.label_font = Some(font.into());
        self
    }

    #[must_use]
    pub fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_grid_style(mut self, grid_style: Vec<GridStyle>) -> Self {
        self.grid_style = Some(grid_style);
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = Some(inner);
        self.padding_outer = Some(outer);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    #[must_use]
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = Some(nice);
        self
    }

    /// Names of the set options that only category axes carry.
    pub(super) fn category_only_fields(&self) -> SmallVec<[&'static str; 2]> {
        let mut fields = SmallVec::new();
        if self.padding_inner.is_some() {
            fields.push("paddingInner");
        }
        if self.padding_outer.is_some() {
            fields.push("paddingOuter");
        }
        fields
    }

    /// Names of the set options that only number axes carry.
    pub(super) fn number_only_fields(&self) -> SmallVec<[&'static str; 2]> {
        let mut fields = SmallVec::new();
        if self.domain.is_some() {
            fields.push("domain");
        }
        if self.nice.is_some() {
            fields.push("nice");
        }
        fields
    }
}
