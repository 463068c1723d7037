//! Heart-rate simulator and the EKG animation parameters derived from it.
//!
//! The current BPM chases a target BPM with exponential smoothing. At rest
//! the target is re-rolled to a random resting value on a fixed interval;
//! while the activity input is held it ramps linearly towards the maximum.

use log::{debug, warn};
use rand::Rng;

use crate::config::HeartConfig;

/// Read-only view of the heart simulator used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartReading {
    pub bpm: f32,
    pub ekg_scale_x: f32,
    pub ekg_scroll: f32,
    pub warning: bool,
}

impl HeartReading {
    /// BPM rounded to the nearest whole beat for display.
    pub fn display_bpm(&self) -> u16 {
        (self.bpm.max(0.0) + 0.5) as u16
    }
}

/// Map a BPM onto the horizontal EKG compression factor in `[1, 3]`.
///
/// BPM is clamped to `[min_bpm, max_bpm]` first, so the factor is flat
/// outside that range.
pub fn ekg_scale_for(bpm: f32, min_bpm: f32, max_bpm: f32) -> f32 {
    let clamped = bpm.clamp(min_bpm, max_bpm);
    let alpha = ((clamped - min_bpm) / (max_bpm - min_bpm)).clamp(0.0, 1.0);
    1.0 + alpha * 2.0
}

/// Heart-rate simulator with an injected random source.
pub struct HeartSimulator<R: Rng> {
    config: HeartConfig,
    rng: R,
    current_bpm: f32,
    target_bpm: f32,
    last_reroll: f64,
    last_tick: f64,
    ekg_scale_x: f32,
    ekg_scroll: f32,
    /// Warning state after the previous tick, for logging the rising edge
    warned: bool,
}

impl<R: Rng> HeartSimulator<R> {
    /// Start at a random resting BPM, with current and target equal.
    pub fn new(config: HeartConfig, mut rng: R, now: f64) -> Self {
        let resting = roll_resting(&config, &mut rng);
        let mut sim = Self {
            config,
            rng,
            current_bpm: resting,
            target_bpm: resting,
            last_reroll: now,
            last_tick: now,
            ekg_scale_x: 1.0,
            ekg_scroll: 0.0,
            warned: false,
        };
        sim.ekg_scale_x = ekg_scale_for(resting, config.ekg_min_bpm, config.ekg_max_bpm);
        debug!("Heart simulator starting at {} BPM", resting);
        sim
    }

    /// Advance the simulation to `now`.
    ///
    /// A negative time step is treated as zero.
    pub fn tick(&mut self, now: f64, activity_held: bool) {
        let dt = (now - self.last_tick).max(0.0) as f32;
        self.last_tick = now;

        let cfg = self.config;

        if activity_held {
            self.target_bpm = (self.target_bpm + cfg.ramp_rate * dt).min(cfg.max_bpm);
        } else if now - self.last_reroll > cfg.reroll_interval_secs {
            self.target_bpm = roll_resting(&cfg, &mut self.rng);
            self.last_reroll = now;
            debug!("Resting BPM target re-rolled to {}", self.target_bpm);
        }

        let blend = (dt * cfg.smoothing_rate).min(1.0);
        self.current_bpm += (self.target_bpm - self.current_bpm) * blend;
        self.current_bpm = self.current_bpm.clamp(0.0, cfg.max_bpm);

        self.ekg_scale_x = ekg_scale_for(self.current_bpm, cfg.ekg_min_bpm, cfg.ekg_max_bpm);

        // Truncated remainder keeps the offset in (-wrap, wrap) after any gap
        self.ekg_scroll = (self.ekg_scroll + cfg.ekg_scroll_speed * dt) % cfg.ekg_scroll_wrap;

        let warning = self.is_warning();
        if warning && !self.warned {
            warn!("Heart rate above {} BPM", cfg.warning_bpm);
        }
        self.warned = warning;
    }

    pub fn current_bpm(&self) -> f32 {
        self.current_bpm
    }

    pub fn target_bpm(&self) -> f32 {
        self.target_bpm
    }

    pub fn ekg_scale_x(&self) -> f32 {
        self.ekg_scale_x
    }

    pub fn ekg_scroll(&self) -> f32 {
        self.ekg_scroll
    }

    /// True while the current BPM is above the warning threshold.
    pub fn is_warning(&self) -> bool {
        self.current_bpm > self.config.warning_bpm
    }

    pub fn reading(&self) -> HeartReading {
        HeartReading {
            bpm: self.current_bpm,
            ekg_scale_x: self.ekg_scale_x,
            ekg_scroll: self.ekg_scroll,
            warning: self.is_warning(),
        }
    }
}

fn roll_resting<R: Rng>(config: &HeartConfig, rng: &mut R) -> f32 {
    if config.rest_min_bpm >= config.rest_max_bpm {
        return config.rest_min_bpm;
    }
    rng.gen_range(config.rest_min_bpm..=config.rest_max_bpm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const FRAME: f64 = 1.0 / 75.0;

    fn simulator(seed: u64) -> HeartSimulator<SmallRng> {
        HeartSimulator::new(HeartConfig::default(), SmallRng::seed_from_u64(seed), 0.0)
    }

    #[test]
    fn test_starts_at_resting_bpm() {
        let sim = simulator(7);

        assert!((60.0..=80.0).contains(&sim.current_bpm()));
        assert_eq!(sim.current_bpm(), sim.target_bpm());
        assert!(!sim.is_warning());
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = simulator(42);
        let mut b = simulator(42);

        for frame in 1..=600 {
            let now = frame as f64 * FRAME;
            a.tick(now, false);
            b.tick(now, false);
        }

        assert_eq!(a.current_bpm(), b.current_bpm());
        assert_eq!(a.target_bpm(), b.target_bpm());
    }

    #[test]
    fn test_reroll_waits_for_interval() {
        let mut sim = simulator(3);
        let initial_target = sim.target_bpm();

        // Exactly at the interval is not yet "more than" the interval
        sim.tick(2.0, false);
        assert_eq!(sim.target_bpm(), initial_target);

        sim.tick(2.01, false);
        assert!((60.0..=80.0).contains(&sim.target_bpm()));
    }

    #[test]
    fn test_activity_ramps_target_linearly() {
        let mut sim = simulator(1);
        sim.current_bpm = 70.0;
        sim.target_bpm = 70.0;

        sim.tick(0.5, true);

        assert!((sim.target_bpm() - 90.0).abs() < 1e-4);
        // Half a second at rate 2/s blends the full way
        assert!((sim.current_bpm() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_blend_factor_is_clamped() {
        let mut sim = simulator(1);
        sim.current_bpm = 70.0;
        sim.target_bpm = 70.0;

        // dt = 10 s would overshoot without the clamp
        sim.tick(10.0, true);

        assert_eq!(sim.target_bpm(), 210.0);
        assert_eq!(sim.current_bpm(), 210.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut sim = simulator(5);
        sim.tick(1.0, false);
        let bpm = sim.current_bpm();
        let scroll = sim.ekg_scroll();

        sim.tick(0.5, true);

        assert_eq!(sim.current_bpm(), bpm);
        assert_eq!(sim.ekg_scroll(), scroll);
    }

    #[test]
    fn test_activity_scenario_triggers_warning() {
        let mut sim = simulator(9);
        sim.current_bpm = 70.0;
        sim.target_bpm = 70.0;

        // Three seconds of ramping at 40 BPM/s
        let mut now = 0.0;
        for _ in 0..225 {
            now += FRAME;
            sim.tick(now, true);
        }
        assert!((sim.target_bpm() - 190.0).abs() < 0.01);
        assert!(sim.current_bpm() < sim.target_bpm());

        let mut warned = false;
        for _ in 0..600 {
            now += FRAME;
            sim.tick(now, true);
            warned |= sim.is_warning();
        }

        assert_eq!(sim.target_bpm(), 210.0);
        assert!(warned);
        assert!(sim.current_bpm() > 200.0);
        assert!(sim.current_bpm() <= 210.0);
        assert!(210.0 - sim.current_bpm() < 0.01);
        assert!(sim.reading().warning);
    }

    #[test]
    fn test_ekg_scale_endpoints() {
        assert_eq!(ekg_scale_for(40.0, 60.0, 200.0), 1.0);
        assert_eq!(ekg_scale_for(60.0, 60.0, 200.0), 1.0);
        assert_eq!(ekg_scale_for(130.0, 60.0, 200.0), 2.0);
        assert_eq!(ekg_scale_for(200.0, 60.0, 200.0), 3.0);
        assert_eq!(ekg_scale_for(250.0, 60.0, 200.0), 3.0);
    }

    #[test]
    fn test_ekg_scroll_advances_and_wraps() {
        let mut sim = simulator(2);
        sim.tick(2.0, false);
        assert!((sim.ekg_scroll() - 1.0).abs() < 1e-5);

        sim.ekg_scroll = 999.9;
        sim.tick(2.4, false);
        assert!((sim.ekg_scroll() - 0.1).abs() < 1e-3);

        sim.ekg_scroll = -1000.5;
        sim.tick(2.4, false);
        assert!((sim.ekg_scroll() + 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_long_gap_wraps_scroll_in_one_tick() {
        let mut sim = simulator(2);

        // Three hours: 0.5 periods/s * 10800 s = 5400, folded to 400
        sim.tick(10_800.0, false);
        assert!((sim.ekg_scroll() - 400.0).abs() < 1e-2);

        // Sixty days: the offset stays small enough for a frame step to register
        sim.tick(10_800.0 + 60.0 * 86_400.0, false);
        let folded = sim.ekg_scroll();
        assert!(folded.abs() < 1000.0);

        sim.tick(10_800.0 + 60.0 * 86_400.0 + FRAME, false);
        assert!(sim.ekg_scroll() > folded);
    }

    #[test]
    fn test_display_bpm_rounds() {
        let reading = HeartReading {
            bpm: 72.5,
            ekg_scale_x: 1.0,
            ekg_scroll: 0.0,
            warning: false,
        };
        assert_eq!(reading.display_bpm(), 73);
    }

    proptest! {
        #[test]
        fn prop_bpm_stays_in_bounds(
            seed in any::<u64>(),
            steps in proptest::collection::vec((0.0f64..3.0, any::<bool>()), 1..200),
        ) {
            let mut sim = simulator(seed);
            let mut now = 0.0;
            for (dt, held) in steps {
                now += dt;
                sim.tick(now, held);
                prop_assert!(sim.current_bpm() >= 0.0);
                prop_assert!(sim.current_bpm() <= 210.0);
                prop_assert!(sim.target_bpm() >= 60.0);
                prop_assert!(sim.target_bpm() <= 210.0);
                prop_assert!(sim.ekg_scale_x() >= 1.0);
                prop_assert!(sim.ekg_scale_x() <= 3.0);
            }
        }

        #[test]
        fn prop_ekg_scale_monotonic(a in 0.0f32..260.0, b in 0.0f32..260.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ekg_scale_for(lo, 60.0, 200.0) <= ekg_scale_for(hi, 60.0, 200.0));
        }
    }
}
