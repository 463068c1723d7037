//! Simulated wall clock.
//!
//! Seeded once from the host's local time and then advanced purely by the
//! monotonic frame clock, in whole seconds.

use log::debug;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// A valid time of day, `HH:MM:SS` on a 24 hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeOfDay {
    /// Build a time of day, folding out-of-range fields with carry.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        let total = u32::from(hours) * SECONDS_PER_HOUR
            + u32::from(minutes) * SECONDS_PER_MINUTE
            + u32::from(seconds);
        Self::from_seconds_of_day(total % SECONDS_PER_DAY)
    }

    fn from_seconds_of_day(total: u32) -> Self {
        Self {
            hours: (total / SECONDS_PER_HOUR) as u8,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        u32::from(self.hours) * SECONDS_PER_HOUR
            + u32::from(self.minutes) * SECONDS_PER_MINUTE
            + u32::from(self.seconds)
    }

    /// Advance by `secs` whole seconds, wrapping at midnight.
    pub fn advanced_by(&self, secs: u64) -> Self {
        let step = (secs % u64::from(SECONDS_PER_DAY)) as u32;
        Self::from_seconds_of_day((self.seconds_of_day() + step) % SECONDS_PER_DAY)
    }
}

/// Clock that ticks forward in whole seconds from a seeded time of day.
#[derive(Debug, Clone)]
pub struct ClockSimulator {
    time: TimeOfDay,
    /// Frame-clock timestamp up to which whole seconds have been consumed
    last_tick: f64,
}

impl ClockSimulator {
    pub fn new(start: TimeOfDay, now: f64) -> Self {
        Self {
            time: start,
            last_tick: now,
        }
    }

    /// Consume every whole second elapsed since the last tick.
    ///
    /// The fractional remainder stays pending so that no time is lost
    /// between frames. A clock that appears to run backwards is ignored.
    pub fn tick(&mut self, now: f64) {
        let elapsed = now - self.last_tick;
        if elapsed < 1.0 {
            return;
        }

        // Truncation equals floor for the non-negative case handled here
        let steps = elapsed as u64;
        self.time = self.time.advanced_by(steps);
        self.last_tick += steps as f64;

        if steps > 1 {
            debug!("Clock caught up {} seconds after a stall", steps);
        }
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }
}
