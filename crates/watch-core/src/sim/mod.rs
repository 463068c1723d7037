//! Time-driven simulators for the synthetic watch signals.
//!
//! Each simulator owns its state and is advanced with the current reading of
//! the monotonic frame clock, in seconds.

pub mod battery;
pub mod clock;
pub mod heart;

pub use battery::BatterySimulator;
pub use clock::{ClockSimulator, TimeOfDay};
pub use heart::{HeartReading, HeartSimulator, ekg_scale_for};
