//! Hardware-independent core of the smartwatch simulator
//!
//! This crate holds all platform-agnostic logic: the clock, heart-rate and
//! battery simulators, the screen navigator, the per-frame orchestrator and
//! the page renderer that draws a frame snapshot onto any
//! `DrawTarget<Color = Rgb565>`.
//!
//! It is `no_std` with `extern crate alloc` so the same code drives the
//! desktop simulator and headless tests.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod app;
pub mod config;
pub mod framebuffer;
pub mod input;
pub mod navigation;
pub mod pages;
pub mod sim;
pub mod ui;

pub use app::{FrameOutcome, Watch, WatchSnapshot};
pub use config::{BatteryConfig, ConfigError, FrameConfig, HeartConfig, WatchConfig};
pub use framebuffer::FrameBuffer;
pub use input::{InputState, PointerState};
pub use navigation::{Navigator, Transition};
pub use pages::WatchRenderer;
pub use sim::TimeOfDay;
pub use ui::{DISPLAY_VIEWPORT, Screen, Viewport};
