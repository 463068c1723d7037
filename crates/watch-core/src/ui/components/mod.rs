//! Drawable building blocks for watch pages

pub mod arrow;
pub mod cursor;
pub mod ekg;
pub mod primitives;
pub mod seven_segment;

pub use arrow::{ArrowButton, ArrowDirection};
pub use cursor::HeartCursor;
pub use ekg::{EkgTrace, beat_amplitude};
pub use primitives::{fill_ndc, outline_ndc};
pub use seven_segment::{DigitStyle, draw_colon, draw_digit, draw_number};
