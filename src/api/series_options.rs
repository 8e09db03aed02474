use serde::{Deserialize, Serialize};

use crate::core::{Color, DataRecord, Font, LabelPadding, Offset, SeriesKind, TooltipRenderer};

/// Sparse drop-shadow configuration. Missing fields fall back to black,
/// a zero offset and no blur.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropShadowOptions {
    pub color: Option<Color>,
    pub offset: Option<Offset>,
    pub blur: Option<f64>,
}

impl DropShadowOptions {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Some(Offset::new(x, y));
        self
    }

    #[must_use]
    pub fn with_blur(mut self, blur: f64) -> Self {
        self.blur = Some(blur);
        self
    }
}

/// Sparse configuration for one series entry.
///
/// A single shape covers every series kind so the kind can be forced by the
/// chart entry point after the entry was written. Each kind reads only its
/// own fields:
///
/// - all kinds: `title`, `title_font`, `visible`, `show_in_legend`,
///   `tooltip`, `data`, `line_width`, `tooltip_renderer`
/// - line: `x_field`, `y_field`, `fill`, `stroke`, `marker`,
///   `marker_radius`, `marker_line_width`
/// - bar: `x_field`, `y_fields`, `y_field_names`, `grouped`, `fills`,
///   `strokes`, `label_font`, `label_padding`, `shadow`
/// - pie: `angle_field`, `radius_field`, `label_field`, `label`,
///   `label_font`, `label_color`, `label_min_angle`, `callout_colors`,
///   `callout_width`, `callout_length`, `callout_padding`, `fills`,
///   `strokes`, `rotation`, `outer_radius_offset`, `inner_radius_offset`,
///   `shadow`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesOptions {
    /// Kind discriminator: `"line"`, `"bar"` or `"pie"`.
    #[serde(rename = "type")]
    pub series_type: Option<String>,

    pub title: Option<String>,
    pub title_font: Option<Font>,
    pub visible: Option<bool>,
    pub show_in_legend: Option<bool>,
    pub tooltip: Option<bool>,
    pub data: Option<Vec<DataRecord>>,
    #[serde(skip)]
    pub tooltip_renderer: Option<TooltipRenderer>,

    pub x_field: Option<String>,
    pub y_field: Option<String>,
    pub y_fields: Option<Vec<String>>,
    pub y_field_names: Option<Vec<String>>,
    pub grouped: Option<bool>,

    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub fills: Option<Vec<Color>>,
    pub strokes: Option<Vec<Color>>,
    pub line_width: Option<f64>,

    pub marker: Option<bool>,
    pub marker_radius: Option<f64>,
    pub marker_line_width: Option<f64>,

    pub angle_field: Option<String>,
    pub radius_field: Option<String>,
    pub label_field: Option<String>,
    pub label: Option<bool>,
    pub label_font: Option<Font>,
    pub label_color: Option<Color>,
    pub label_min_angle: Option<f64>,
    pub label_padding: Option<LabelPadding>,

    pub callout_colors: Option<Vec<Color>>,
    pub callout_width: Option<f64>,
    pub callout_length: Option<f64>,
    pub callout_padding: Option<f64>,

    pub rotation: Option<f64>,
    pub outer_radius_offset: Option<f64>,
    pub inner_radius_offset: Option<f64>,

    pub shadow: Option<DropShadowOptions>,
}

impl SeriesOptions {
    /// Empty options declaring `kind`.
    #[must_use]
    pub fn of_kind(kind: SeriesKind) -> Self {
        Self::default().with_type(kind.name())
    }

    #[must_use]
    pub fn line(x_field: impl Into<String>, y_field: impl Into<String>) -> Self {
        let mut options = Self::of_kind(SeriesKind::Line);
        options.x_field = Some(x_field.into());
        options.y_field = Some(y_field.into());
        options
    }

    #[must_use]
    pub fn bar<I, S>(x_field: impl Into<String>, y_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::of_kind(SeriesKind::Bar);
        options.x_field = Some(x_field.into());
        options.y_fields = Some(y_fields.into_iter().map(Into::into).collect());
        options
    }

    #[must_use]
    pub fn pie(angle_field: impl Into<String>) -> Self {
        let mut options = Self::of_kind(SeriesKind::Pie);
        options.angle_field = Some(angle_field.into());
        options
    }

    /// Sets the raw discriminator; unknown names are kept and resolve to no series.
    #[must_use]
    pub fn with_type(mut self, series_type: impl Into<String>) -> Self {
        self.series_type = Some(series_type.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataRecord>) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: DropShadowOptions) -> Self {
        self.shadow = Some(shadow);
        self
    }

    #[must_use]
    pub fn with_tooltip_renderer(mut self, renderer: TooltipRenderer) -> Self {
        self.tooltip_renderer = Some(renderer);
        self
    }

    /// Resolves the declared discriminator, if it names a known kind.
    #[must_use]
    pub fn declared_kind(&self) -> Option<SeriesKind> {
        self.series_type.as_deref().and_then(SeriesKind::from_name)
    }
}
