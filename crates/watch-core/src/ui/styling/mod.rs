//! Styling for the watch face

pub mod colors;

pub use colors::*;
