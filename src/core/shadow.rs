use serde::{Deserialize, Serialize};

use super::{Color, Offset};

/// Drop-shadow effect attached to a series' shapes.
///
/// Values are fixed at construction; build a new shadow to change one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    color: Color,
    offset: Offset,
    blur: f64,
}

impl DropShadow {
    #[must_use]
    pub const fn new(color: Color, offset: Offset, blur: f64) -> Self {
        Self {
            color,
            offset,
            blur,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub const fn blur(&self) -> f64 {
        self.blur
    }
}

impl Default for DropShadow {
    fn default() -> Self {
        Self::new(Color::BLACK, Offset::ZERO, 0.0)
    }
}
