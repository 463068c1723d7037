// src/ui/core.rs
//! Core UI types: screens, coordinate spaces and the drawable trait

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Screen identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Time,
    Heart,
    Battery,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Time, Screen::Heart, Screen::Battery];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Time => "Time",
            Screen::Heart => "Heart",
            Screen::Battery => "Battery",
        }
    }
}

/// A point in normalized device coordinates.
///
/// `x` grows to the right and `y` grows upwards, both spanning `[-1, 1]`
/// across the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcPoint {
    pub x: f32,
    pub y: f32,
}

impl NdcPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in NDC space with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickRegion {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl ClickRegion {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inclusive membership test.
    pub fn contains(&self, point: NdcPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}

/// Pixel dimensions of the surface being drawn to and clicked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a pixel position (origin top-left, y down) to NDC.
    pub fn pixel_to_ndc(&self, px: f32, py: f32) -> NdcPoint {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        NdcPoint::new(2.0 * px / w - 1.0, 1.0 - 2.0 * py / h)
    }

    /// Convert an NDC position to the nearest pixel.
    pub fn ndc_to_pixel(&self, point: NdcPoint) -> Point {
        let x = (point.x + 1.0) * 0.5 * self.width as f32;
        let y = (1.0 - point.y) * 0.5 * self.height as f32;
        Point::new(round_to_i32(x), round_to_i32(y))
    }

    /// Pixel rectangle covering an NDC region.
    pub fn ndc_rect(&self, region: ClickRegion) -> Rectangle {
        let top_left = self.ndc_to_pixel(NdcPoint::new(region.x_min, region.y_max));
        let bottom_right = self.ndc_to_pixel(NdcPoint::new(region.x_max, region.y_min));
        let size = bottom_right - top_left;
        Rectangle::new(top_left, Size::new(size.x.max(0) as u32, size.y.max(0) as u32))
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, self.height))
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;
}
