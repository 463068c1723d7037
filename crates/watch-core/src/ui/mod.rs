// src/ui/mod.rs
//! Watch UI system
//!
//! This module provides:
//! - Core types for screens, NDC coordinates and click regions
//! - Components drawn in NDC space (seven-segment digits, arrow buttons)
//! - The watch color palette

pub mod components;
pub mod core;
pub mod styling;

pub use components::{ArrowButton, ArrowDirection, DigitStyle, HeartCursor};
pub use core::{ClickRegion, Drawable, NdcPoint, Screen, Viewport};

/// Width of the simulated watch display in pixels
pub const DISPLAY_WIDTH_PX: u16 = 240;

/// Height of the simulated watch display in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;

/// Viewport covering the whole watch display
pub const DISPLAY_VIEWPORT: Viewport =
    Viewport::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32);
