//! Shared layout constants for watch pages
//!
//! All positions and sizes are in NDC units (`[-1, 1]` on both axes, y up).

use crate::ui::ClickRegion;

/// Signature box in the bottom-right corner of every screen
pub const SIGNATURE_REGION: ClickRegion = ClickRegion::new(0.55, 0.95, -0.95, -0.80);

/// Text drawn in the signature box
pub const SIGNATURE_TEXT: &str = "SmartWatch";

// ============================================================================
// Time Page
// ============================================================================

pub const TIME_DIGIT_WIDTH: f32 = 0.12;
pub const TIME_DIGIT_HEIGHT: f32 = 0.25;
/// Distance between the two digits of one field
pub const TIME_DIGIT_SPACING: f32 = 0.20;
/// Distance from a digit to the neighbouring colon
pub const TIME_COLON_GAP: f32 = 0.12;
/// Centre of the hours tens digit
pub const TIME_START_X: f32 = -0.65;

// ============================================================================
// Numbers (BPM and battery percent)
// ============================================================================

pub const NUMBER_DIGIT_WIDTH: f32 = 0.08;
pub const NUMBER_DIGIT_HEIGHT: f32 = 0.18;
pub const NUMBER_DIGIT_SPACING: f32 = 0.11;

// ============================================================================
// Heart Page
// ============================================================================

/// EKG graph area
pub const EKG_BOX: ClickRegion = ClickRegion::new(-0.6, 0.6, -0.3, 0.3);

/// Thickness of the EKG baseline
pub const EKG_BASELINE_THICKNESS: f32 = 0.02;

/// Vertical centre of the BPM number
pub const BPM_NUMBER_Y: f32 = 0.85;

/// BPM bar: left edge, full width and vertical extent
pub const BPM_BAR_X_MIN: f32 = -0.8;
pub const BPM_BAR_WIDTH: f32 = 1.6;
pub const BPM_BAR_Y_MIN: f32 = 0.6;
pub const BPM_BAR_Y_MAX: f32 = 0.7;

/// BPM range mapped onto the bar
pub const BPM_BAR_MIN: f32 = 60.0;
pub const BPM_BAR_MAX: f32 = 200.0;

/// Label shown on the warning overlay
pub const WARNING_TEXT: &str = "SLOW DOWN";

// ============================================================================
// Battery Page
// ============================================================================

/// Outer battery body
pub const BATTERY_BODY: ClickRegion = ClickRegion::new(-0.3, 0.3, -0.2, 0.2);

/// Terminal cap on the right side of the body
pub const BATTERY_CAP: ClickRegion = ClickRegion::new(0.3, 0.35, -0.05, 0.05);

/// Body outline thickness; the fill is inset by twice this
pub const BATTERY_BORDER: f32 = 0.01;

/// Vertical centre of the percent number
pub const BATTERY_NUMBER_Y: f32 = 0.6;
