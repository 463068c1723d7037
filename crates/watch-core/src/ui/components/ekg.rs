//! Procedural EKG trace.
//!
//! The waveform has a period of exactly one unit, so shifting it by any
//! whole number of units (as the scroll wrap does) is invisible.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::ui::core::{ClickRegion, Drawable, Viewport};

/// One heartbeat as `(phase, amplitude)` keyframes, linearly interpolated.
///
/// P wave, QRS complex, T wave. Starts and ends on the baseline.
const BEAT_KEYFRAMES: [(f32, f32); 13] = [
    (0.00, 0.0),
    (0.10, 0.0),
    (0.15, 0.15),
    (0.20, 0.0),
    (0.30, 0.0),
    (0.33, -0.15),
    (0.36, 1.0),
    (0.39, -0.35),
    (0.42, 0.0),
    (0.55, 0.0),
    (0.65, 0.3),
    (0.75, 0.0),
    (1.00, 0.0),
];

/// Fraction of the half-height used by the tallest peak
const AMPLITUDE_FILL: f32 = 0.8;

const TRACE_STROKE_PX: u32 = 2;

/// Fractional part in `[0, 1)`, also for negative input.
fn wrap_phase(phase: f32) -> f32 {
    let fract = phase - (phase as i64) as f32;
    if fract < 0.0 { fract + 1.0 } else { fract }
}

/// Waveform amplitude in `[-1, 1]` at any phase.
pub fn beat_amplitude(phase: f32) -> f32 {
    let t = wrap_phase(phase);
    for pair in BEAT_KEYFRAMES.windows(2) {
        let (t0, v0) = pair[0];
        let (t1, v1) = pair[1];
        if t >= t0 && t <= t1 {
            let span = t1 - t0;
            if span <= 0.0 {
                return v1;
            }
            return v0 + (v1 - v0) * (t - t0) / span;
        }
    }
    0.0
}

/// Scrolling EKG trace inside an NDC box.
///
/// `scale_x` is how many beats fit across the box; `scroll` shifts the
/// trace left by that many beats.
pub struct EkgTrace {
    bounds: Rectangle,
    scale_x: f32,
    scroll: f32,
    color: Rgb565,
}

impl EkgTrace {
    pub fn new(region: ClickRegion, viewport: Viewport, scale_x: f32, scroll: f32) -> Self {
        Self {
            bounds: viewport.ndc_rect(region),
            scale_x,
            scroll,
            color: Rgb565::GREEN,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Pixel y of the trace at column `column` (0 = left edge of the box).
    fn sample_y(&self, column: u32) -> i32 {
        let width = self.bounds.size.width.max(1) as f32;
        let height = self.bounds.size.height as f32;
        let u = column as f32 / width;
        let amplitude = beat_amplitude(u * self.scale_x + self.scroll);

        let center_y = self.bounds.top_left.y as f32 + height * 0.5;
        let y = center_y - amplitude * height * 0.5 * AMPLITUDE_FILL;
        y as i32
    }
}

impl Drawable for EkgTrace {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = PrimitiveStyle::with_stroke(self.color, TRACE_STROKE_PX);
        let left = self.bounds.top_left.x;
        let width = self.bounds.size.width;

        let mut previous = Point::new(left, self.sample_y(0));
        for column in 1..width {
            let next = Point::new(left + column as i32, self.sample_y(column));
            Line::new(previous, next).into_styled(style).draw(display)?;
            previous = next;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}
