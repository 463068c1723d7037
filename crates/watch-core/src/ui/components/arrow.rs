// src/ui/components/arrow.rs
//! Arrow button drawn inside the same NDC region that is hit-tested
//! for navigation.

use crate::ui::core::{ClickRegion, Drawable, Viewport};
use crate::ui::styling::COLOR_TEXT;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};

/// Which way the arrow points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

/// Navigation arrow occupying a click region.
///
/// # Examples
/// ```ignore
/// let arrow = ArrowButton::new(
///     ClickRegion::new(0.6, 0.9, -0.1, 0.1),
///     ArrowDirection::Right,
///     viewport,
/// );
/// arrow.draw(&mut display)?;
/// ```
pub struct ArrowButton {
    region: ClickRegion,
    direction: ArrowDirection,
    bounds: Rectangle,
}

impl ArrowButton {
    pub fn new(region: ClickRegion, direction: ArrowDirection, viewport: Viewport) -> Self {
        Self {
            region,
            direction,
            bounds: viewport.ndc_rect(region),
        }
    }

    pub fn region(&self) -> ClickRegion {
        self.region
    }

    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }

    /// Triangle vertices inset into the button bounds.
    fn triangle(&self) -> Triangle {
        let Rectangle { top_left, size } = self.bounds;
        let w = size.width as i32;
        let h = size.height as i32;
        let inset_x = w / 6;
        let inset_y = h / 8;

        let left = top_left.x + inset_x;
        let right = top_left.x + w - 1 - inset_x;
        let top = top_left.y + inset_y;
        let bottom = top_left.y + h - 1 - inset_y;
        let mid_y = top_left.y + h / 2;

        match self.direction {
            ArrowDirection::Right => Triangle::new(
                Point::new(left, top),
                Point::new(left, bottom),
                Point::new(right, mid_y),
            ),
            ArrowDirection::Left => Triangle::new(
                Point::new(right, top),
                Point::new(right, bottom),
                Point::new(left, mid_y),
            ),
        }
    }
}

impl Drawable for ArrowButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.triangle()
            .into_styled(PrimitiveStyle::with_fill(COLOR_TEXT))
            .draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}
