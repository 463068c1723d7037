//! Color definitions for the watch face
//!
//! All colors are RGB565. To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Screen Backgrounds
// ============================================================================

/// Time screen background - deep navy
pub const COLOR_TIME_BACKGROUND: Rgb565 = Rgb565::new(26 >> 3, 26 >> 2, 77 >> 3);

/// Heart screen background - dark red
pub const COLOR_HEART_BACKGROUND: Rgb565 = Rgb565::new(77 >> 3, 0, 0);

/// Battery screen background - dark green
pub const COLOR_BATTERY_BACKGROUND: Rgb565 = Rgb565::new(0, 38 >> 2, 0);

// ============================================================================
// Foreground
// ============================================================================

/// Digits, outlines and arrows
pub const COLOR_TEXT: Rgb565 = Rgb565::new(31, 63, 31);

/// Signature overlay - white blended at ~40% over the backgrounds
pub const COLOR_SIGNATURE: Rgb565 = Rgb565::new(120 >> 3, 120 >> 2, 140 >> 3);

// ============================================================================
// Heart Screen
// ============================================================================

/// EKG box fill
pub const COLOR_EKG_BOX: Rgb565 = Rgb565::new(26 >> 3, 26 >> 2, 26 >> 3);

/// EKG baseline and trace
pub const COLOR_EKG_TRACE: Rgb565 = Rgb565::new(0, 204 >> 2, 0);

/// BPM level bar
pub const COLOR_BPM_BAR: Rgb565 = Rgb565::new(204 >> 3, 204 >> 2, 0);

/// Full-screen warning overlay
pub const COLOR_WARNING: Rgb565 = Rgb565::new(204 >> 3, 0, 0);

// ============================================================================
// Pointer
// ============================================================================

/// Heart-shaped mouse pointer - pink
pub const COLOR_CURSOR: Rgb565 = Rgb565::new(255 >> 3, 90 >> 2, 140 >> 3);

/// Dark edge around the pointer so it reads on the red warning overlay
pub const COLOR_CURSOR_OUTLINE: Rgb565 = Rgb565::new(40 >> 3, 0, 20 >> 3);

// ============================================================================
// Battery Levels
// ============================================================================

/// Charge above the low threshold
pub const COLOR_BATTERY_OK: Rgb565 = Rgb565::new(0, 204 >> 2, 0);

/// Charge at or below the low threshold
pub const COLOR_BATTERY_LOW: Rgb565 = Rgb565::new(204 >> 3, 204 >> 2, 0);

/// Charge at or below the critical threshold
pub const COLOR_BATTERY_CRITICAL: Rgb565 = Rgb565::new(204 >> 3, 0, 0);

/// Percent above which the fill is drawn as healthy
pub const BATTERY_LOW_PERCENT: u8 = 20;

/// Percent above which the fill is drawn as low rather than critical
pub const BATTERY_CRITICAL_PERCENT: u8 = 10;

/// Fill color for a given battery charge.
pub fn battery_color(percent: u8) -> Rgb565 {
    if percent > BATTERY_LOW_PERCENT {
        COLOR_BATTERY_OK
    } else if percent > BATTERY_CRITICAL_PERCENT {
        COLOR_BATTERY_LOW
    } else {
        COLOR_BATTERY_CRITICAL
    }
}
