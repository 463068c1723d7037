//! Compiled-in tuning constants for the watch simulators and frame loop.
//!
//! Every number the simulators depend on lives here so tests and hosts can
//! build a [`WatchConfig`] with different values. [`WatchConfig::default`]
//! carries the values the watch ships with.

use thiserror_no_std::Error;

/// Heart-rate simulator tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartConfig {
    /// Lower bound of the random resting target (BPM)
    pub rest_min_bpm: f32,
    /// Upper bound of the random resting target (BPM)
    pub rest_max_bpm: f32,
    /// Ceiling for both target and current BPM
    pub max_bpm: f32,
    /// Target increase per second while activity is held (BPM/s)
    pub ramp_rate: f32,
    /// Seconds between resting target re-rolls
    pub reroll_interval_secs: f64,
    /// Exponential smoothing rate of current towards target (1/s)
    pub smoothing_rate: f32,
    /// BPM at which the EKG trace is least compressed
    pub ekg_min_bpm: f32,
    /// BPM at which the EKG trace is most compressed
    pub ekg_max_bpm: f32,
    /// EKG scroll speed in waveform periods per second
    pub ekg_scroll_speed: f32,
    /// Magnitude at which the scroll offset is folded back
    pub ekg_scroll_wrap: f32,
    /// Current BPM above which the warning overlay is shown
    pub warning_bpm: f32,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            rest_min_bpm: 60.0,
            rest_max_bpm: 80.0,
            max_bpm: 210.0,
            ramp_rate: 40.0,
            reroll_interval_secs: 2.0,
            smoothing_rate: 2.0,
            ekg_min_bpm: 60.0,
            ekg_max_bpm: 200.0,
            ekg_scroll_speed: 0.5,
            ekg_scroll_wrap: 1000.0,
            warning_bpm: 200.0,
        }
    }
}

/// Battery simulator tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryConfig {
    /// Charge at startup (percent)
    pub initial_percent: u8,
    /// Seconds per one percent of depletion
    pub depletion_interval_secs: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            initial_percent: 100,
            depletion_interval_secs: 10.0,
        }
    }
}

/// Frame loop pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    /// Target frames per second
    pub target_fps: u32,
}

impl FrameConfig {
    /// Frame budget in nanoseconds.
    pub fn frame_budget_nanos(&self) -> u64 {
        1_000_000_000 / u64::from(self.target_fps.max(1))
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { target_fps: 75 }
    }
}

/// Complete watch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchConfig {
    pub heart: HeartConfig,
    pub battery: BatteryConfig,
    pub frame: FrameConfig,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("Resting BPM range is empty ({min} > {max})")]
    RestRange { min: f32, max: f32 },
    #[error("Resting BPM {rest} exceeds the maximum of {max}")]
    RestAboveMax { rest: f32, max: f32 },
    #[error("EKG BPM mapping range is empty ({min} >= {max})")]
    EkgRange { min: f32, max: f32 },
    #[error("Interval must be positive: {name}")]
    NonPositiveInterval { name: &'static str },
    #[error("Value must be finite: {name}")]
    NonFinite { name: &'static str },
    #[error("Value must not be negative: {name}")]
    Negative { name: &'static str },
    #[error("Battery initial charge {0} is above 100%")]
    InitialCharge(u8),
    #[error("Frame rate must be non-zero")]
    ZeroFrameRate,
}

impl WatchConfig {
    /// Check the invariants the simulators rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let heart = &self.heart;

        let floats = [
            ("heart.rest_min_bpm", heart.rest_min_bpm),
            ("heart.rest_max_bpm", heart.rest_max_bpm),
            ("heart.max_bpm", heart.max_bpm),
            ("heart.ramp_rate", heart.ramp_rate),
            ("heart.smoothing_rate", heart.smoothing_rate),
            ("heart.ekg_min_bpm", heart.ekg_min_bpm),
            ("heart.ekg_max_bpm", heart.ekg_max_bpm),
            ("heart.ekg_scroll_speed", heart.ekg_scroll_speed),
            ("heart.ekg_scroll_wrap", heart.ekg_scroll_wrap),
            ("heart.warning_bpm", heart.warning_bpm),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }
        for (name, value) in [
            ("heart.reroll_interval_secs", heart.reroll_interval_secs),
            (
                "battery.depletion_interval_secs",
                self.battery.depletion_interval_secs,
            ),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }

        // BPM is clamped to [0, max_bpm], so the whole resting range must sit in it
        for (name, value) in [
            ("heart.rest_min_bpm", heart.rest_min_bpm),
            ("heart.ramp_rate", heart.ramp_rate),
            ("heart.smoothing_rate", heart.smoothing_rate),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name });
            }
        }

        if heart.rest_min_bpm > heart.rest_max_bpm {
            return Err(ConfigError::RestRange {
                min: heart.rest_min_bpm,
                max: heart.rest_max_bpm,
            });
        }
        if heart.rest_max_bpm > heart.max_bpm {
            return Err(ConfigError::RestAboveMax {
                rest: heart.rest_max_bpm,
                max: heart.max_bpm,
            });
        }
        if heart.ekg_min_bpm >= heart.ekg_max_bpm {
            return Err(ConfigError::EkgRange {
                min: heart.ekg_min_bpm,
                max: heart.ekg_max_bpm,
            });
        }
        if heart.reroll_interval_secs <= 0.0 {
            return Err(ConfigError::NonPositiveInterval {
                name: "heart.reroll_interval_secs",
            });
        }
        if heart.ekg_scroll_wrap <= 0.0 {
            return Err(ConfigError::NonPositiveInterval {
                name: "heart.ekg_scroll_wrap",
            });
        }
        if self.battery.depletion_interval_secs <= 0.0 {
            return Err(ConfigError::NonPositiveInterval {
                name: "battery.depletion_interval_secs",
            });
        }
        if self.battery.initial_percent > 100 {
            return Err(ConfigError::InitialCharge(self.battery.initial_percent));
        }
        if self.frame.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        Ok(())
    }
}
