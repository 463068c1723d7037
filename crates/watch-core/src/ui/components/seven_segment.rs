//! Seven-segment digit glyphs drawn from filled quads.
//!
//! Segment order: 0 top, 1 top-right, 2 bottom-right, 3 bottom,
//! 4 bottom-left, 5 top-left, 6 middle.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::fill_ndc;
use crate::ui::core::{NdcPoint, Viewport};

/// Lit segments for each decimal digit.
pub const DIGIT_SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],     // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],    // 2
    [true, true, true, true, false, false, true],    // 3
    [false, true, true, false, false, true, true],   // 4
    [true, false, true, true, false, true, true],    // 5
    [true, false, true, true, true, true, true],     // 6
    [true, true, true, false, false, false, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, true, false, true, true],     // 9
];

/// Segment thickness as a fraction of digit width
const THICKNESS_RATIO: f32 = 0.20;

/// Size and color of a digit, in NDC units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitStyle {
    pub width: f32,
    pub height: f32,
    pub color: Rgb565,
}

/// Draw a single digit centred on `center`. Values above 9 draw nothing.
pub fn draw_digit<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
    digit: u8,
    center: NdcPoint,
    style: &DigitStyle,
) -> Result<(), D::Error> {
    let Some(segments) = DIGIT_SEGMENTS.get(digit as usize) else {
        return Ok(());
    };

    for (index, lit) in segments.iter().enumerate() {
        if *lit {
            draw_segment(display, viewport, index, center, style)?;
        }
    }
    Ok(())
}

fn draw_segment<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
    index: usize,
    center: NdcPoint,
    style: &DigitStyle,
) -> Result<(), D::Error> {
    let thickness = style.width * THICKNESS_RATIO;
    let half_w = style.width * 0.5;
    let half_h = style.height * 0.5;
    let NdcPoint { x: cx, y: cy } = center;

    let (x_min, x_max, y_min, y_max) = match index {
        0 => (cx - half_w, cx + half_w, cy + half_h - thickness, cy + half_h),
        1 => (cx + half_w - thickness, cx + half_w, cy, cy + half_h),
        2 => (cx + half_w - thickness, cx + half_w, cy - half_h, cy),
        3 => (cx - half_w, cx + half_w, cy - half_h, cy - half_h + thickness),
        4 => (cx - half_w, cx - half_w + thickness, cy - half_h, cy),
        5 => (cx - half_w, cx - half_w + thickness, cy, cy + half_h),
        6 => (
            cx - half_w,
            cx + half_w,
            cy - thickness * 0.5,
            cy + thickness * 0.5,
        ),
        _ => return Ok(()),
    };

    fill_ndc(display, viewport, x_min, x_max, y_min, y_max, style.color)
}

/// Draw the two dots of a clock colon for a digit of height `size`.
pub fn draw_colon<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
    center: NdcPoint,
    size: f32,
    color: Rgb565,
) -> Result<(), D::Error> {
    let dot = size * 0.1;
    let offset = size * 0.2;
    let NdcPoint { x: cx, y: cy } = center;

    fill_ndc(display, viewport, cx - dot, cx + dot, cy + offset - dot, cy + offset + dot, color)?;
    fill_ndc(display, viewport, cx - dot, cx + dot, cy - offset - dot, cy - offset + dot, color)
}

/// Digits of `value` clamped to `0..=999`; at least two digits, zero padded.
pub fn number_digits(value: u16) -> heapless::Vec<u8, 3> {
    let value = value.min(999);
    let mut digits = heapless::Vec::new();
    if value >= 100 {
        digits.push((value / 100) as u8).ok();
    }
    digits.push(((value / 10) % 10) as u8).ok();
    digits.push((value % 10) as u8).ok();
    digits
}

/// Draw a two or three digit number centred horizontally on `center`.
pub fn draw_number<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    viewport: &Viewport,
    value: u16,
    center: NdcPoint,
    spacing: f32,
    style: &DigitStyle,
) -> Result<(), D::Error> {
    let digits = number_digits(value);
    let span = spacing * (digits.len() as f32 - 1.0);
    let start_x = center.x - span * 0.5;

    for (i, digit) in digits.iter().enumerate() {
        let x = start_x + spacing * i as f32;
        draw_digit(display, viewport, *digit, NdcPoint::new(x, center.y), style)?;
    }
    Ok(())
}
