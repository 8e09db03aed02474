use crate::core::{Color, DropShadow, Offset};

use super::DropShadowOptions;

/// Builds a drop shadow, filling every missing field with its baseline:
/// black, zero offset, no blur. `None` yields the all-defaults shadow.
#[must_use]
pub fn create_drop_shadow(options: Option<&DropShadowOptions>) -> DropShadow {
    let Some(options) = options else {
        return DropShadow::default();
    };
    DropShadow::new(
        options.color.unwrap_or(Color::BLACK),
        options.offset.unwrap_or(Offset::ZERO),
        options.blur.unwrap_or(0.0),
    )
}
