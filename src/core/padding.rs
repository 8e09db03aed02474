use serde::{Deserialize, Serialize};

/// Space reserved around the chart's drawing area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Resolves box-shorthand sides: a missing `top` is 0, a missing
    /// `right` or `bottom` repeats `top`, a missing `left` repeats `right`.
    #[must_use]
    pub fn from_sides(
        top: Option<f64>,
        right: Option<f64>,
        bottom: Option<f64>,
        left: Option<f64>,
    ) -> Self {
        let top = top.unwrap_or(0.0);
        let right = right.unwrap_or(top);
        let bottom = bottom.unwrap_or(top);
        let left = left.unwrap_or(right);
        Self::new(top, right, bottom, left)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Padding;

    #[test]
    fn shorthand_repeats_missing_sides() {
        assert_eq!(
            Padding::from_sides(Some(5.0), None, None, None),
            Padding::uniform(5.0)
        );
        assert_eq!(
            Padding::from_sides(Some(5.0), Some(7.0), None, None),
            Padding::new(5.0, 7.0, 5.0, 7.0)
        );
        assert_eq!(
            Padding::from_sides(None, None, None, None),
            Padding::uniform(0.0)
        );
    }
}
