//! In-memory framebuffer with per-pixel change detection.
//!
//! Pages draw into this buffer instead of the window. After a frame is
//! drawn, only the rectangle containing changed pixels is copied to the
//! real display. Tests use it as a headless render target.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::ui::Viewport;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// Heap-allocated `DrawTarget<Color = Rgb565>` tracking a dirty bounding box.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a framebuffer filled with black pixels.
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width as usize;
        let height = viewport.height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
            dirty: None,
        }
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Region changed since the last flush.
    pub fn dirty_area(&self) -> Option<Rectangle> {
        self.dirty.map(DirtyRect::to_rectangle)
    }

    /// Number of pixels with exactly this color.
    pub fn count_color(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Copy the dirty region to `display`, then reset the dirty state.
    ///
    /// If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let area = rect.to_rectangle();

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            area.size.width, area.size.height, rect.min_x, rect.min_y
        );

        // Shared borrow of the pixels so the iterator does not capture `self`
        let pixels = &self.pixels;
        let stride = self.width;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }

    /// Repaint `area` of `display` from the buffer, whether or not it is dirty.
    ///
    /// Used to erase overlays drawn straight onto the display, such as the
    /// pointer. The area is clipped to the buffer.
    pub fn restore<D>(&self, display: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let x0 = area.top_left.x as usize;
        let x1 = bottom_right.x as usize;
        let pixels = &self.pixels;
        let stride = self.width;
        let pixel_iter = (area.top_left.y as usize..=bottom_right.y as usize).flat_map(move |y| {
            pixels[y * stride + x0..=y * stride + x1].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.width as i64;
        let h = self.height as i64;
        let x = i64::from(area.top_left.x);
        let y = i64::from(area.top_left.y);

        let x_start = x.clamp(0, w) as usize;
        let y_start = y.clamp(0, h) as usize;
        let x_end = (x + i64::from(area.size.width)).clamp(0, w) as usize;
        let y_end = (y + i64::from(area.size.height)).clamp(0, h) as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}
