//! Filled quads addressed in NDC space

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;

use crate::ui::core::{ClickRegion, Viewport};

/// Fill an NDC rectangle with a solid color.
///
/// Degenerate or inverted rectangles draw nothing.
pub fn fill_ndc<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    color: Rgb565,
) -> Result<(), D::Error> {
    if x_max <= x_min || y_max <= y_min {
        return Ok(());
    }

    viewport
        .ndc_rect(ClickRegion::new(x_min, x_max, y_min, y_max))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Outline an NDC rectangle with a border of `thickness` NDC units.
pub fn outline_ndc<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
    region: ClickRegion,
    thickness: f32,
    color: Rgb565,
) -> Result<(), D::Error> {
    let ClickRegion {
        x_min,
        x_max,
        y_min,
        y_max,
    } = region;

    fill_ndc(display, viewport, x_min, x_max, y_max - thickness, y_max, color)?;
    fill_ndc(display, viewport, x_min, x_max, y_min, y_min + thickness, color)?;
    fill_ndc(display, viewport, x_min, x_min + thickness, y_min, y_max, color)?;
    fill_ndc(display, viewport, x_max - thickness, x_max, y_min, y_max, color)
}
