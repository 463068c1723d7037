//! Frame orchestrator: owns every piece of watch state and advances it once
//! per frame in a fixed order.

use log::info;
use rand::Rng;

use crate::config::{ConfigError, WatchConfig};
use crate::input::InputState;
use crate::navigation::{Navigator, Transition};
use crate::sim::{BatterySimulator, ClockSimulator, HeartReading, HeartSimulator, TimeOfDay};
use crate::ui::Screen;

/// Read-only copy of the state the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchSnapshot {
    pub screen: Screen,
    pub time: TimeOfDay,
    pub heart: HeartReading,
    pub battery_percent: u8,
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Draw this snapshot and continue
    Render(WatchSnapshot),
    /// Exit was requested; stop the loop
    Exit,
}

/// The watch: clock, heart and battery simulators plus screen navigation.
pub struct Watch<R: Rng> {
    clock: ClockSimulator,
    heart: HeartSimulator<R>,
    battery: BatterySimulator,
    navigator: Navigator,
    last_transition: Option<Transition>,
}

impl<R: Rng> Watch<R> {
    /// Build the watch at frame-clock time `now`, with the clock showing `start`.
    ///
    /// Fails if `config` does not pass [`WatchConfig::validate`].
    pub fn new(
        config: &WatchConfig,
        start: TimeOfDay,
        rng: R,
        now: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            "Watch starting at {:02}:{:02}:{:02}",
            start.hours, start.minutes, start.seconds
        );

        Ok(Self {
            clock: ClockSimulator::new(start, now),
            heart: HeartSimulator::new(config.heart, rng, now),
            battery: BatterySimulator::new(config.battery, now),
            navigator: Navigator::new(),
            last_transition: None,
        })
    }

    /// Run one frame against the input sampled by the host.
    ///
    /// Order: clock, battery, heart (only while its screen is showing),
    /// navigation, exit check. The heart rate therefore holds still while
    /// another screen is visible.
    pub fn frame(&mut self, input: &InputState, now: f64) -> FrameOutcome {
        self.clock.tick(now);
        self.battery.tick(now);

        if self.navigator.active() == Screen::Heart {
            self.heart.tick(now, input.activity_held);
        }

        self.last_transition = self.navigator.handle_pointer(input.pointer, input.viewport);
        if let Some(transition) = self.last_transition {
            info!("Screen {} -> {}", transition.from.name(), transition.to.name());
        }

        if input.exit_requested {
            info!("Exit requested");
            return FrameOutcome::Exit;
        }

        FrameOutcome::Render(self.snapshot())
    }

    pub fn snapshot(&self) -> WatchSnapshot {
        WatchSnapshot {
            screen: self.navigator.active(),
            time: self.clock.time(),
            heart: self.heart.reading(),
            battery_percent: self.battery.percent(),
        }
    }

    pub fn active_screen(&self) -> Screen {
        self.navigator.active()
    }

    /// Transition applied by the most recent frame, if any.
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    pub fn clock(&self) -> &ClockSimulator {
        &self.clock
    }

    pub fn heart(&self) -> &HeartSimulator<R> {
        &self.heart
    }

    pub fn battery(&self) -> &BatterySimulator {
        &self.battery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerState;
    use crate::ui::Viewport;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEWPORT: Viewport = Viewport::new(200, 200);
    const FRAME: f64 = 1.0 / 75.0;

    fn watch() -> Watch<SmallRng> {
        Watch::new(
            &WatchConfig::default(),
            TimeOfDay::new(8, 30, 0),
            SmallRng::seed_from_u64(11),
            0.0,
        )
        .unwrap()
    }

    fn idle() -> InputState {
        InputState::idle(VIEWPORT)
    }

    /// Input with the button held over the right arrow.
    fn press_right() -> InputState {
        InputState {
            pointer: PointerState::new(175.0, 100.0, true),
            ..idle()
        }
    }

    fn press_left() -> InputState {
        InputState {
            pointer: PointerState::new(25.0, 100.0, true),
            ..idle()
        }
    }

    fn snapshot(outcome: FrameOutcome) -> WatchSnapshot {
        match outcome {
            FrameOutcome::Render(snapshot) => snapshot,
            FrameOutcome::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_initial_snapshot() {
        let watch = watch();
        let snap = watch.snapshot();

        assert_eq!(snap.screen, Screen::Time);
        assert_eq!(snap.time, TimeOfDay::new(8, 30, 0));
        assert_eq!(snap.battery_percent, 100);
    }

    #[test]
    fn test_clock_and_battery_run_on_every_screen() {
        let mut watch = watch();

        let snap = snapshot(watch.frame(&idle(), 25.0));

        assert_eq!(snap.screen, Screen::Time);
        assert_eq!(snap.time, TimeOfDay::new(8, 30, 25));
        assert_eq!(snap.battery_percent, 98);
    }

    #[test]
    fn test_heart_frozen_off_screen() {
        let mut watch = watch();
        let before = watch.heart().reading();

        for i in 1..=300 {
            let mut input = idle();
            input.activity_held = true;
            watch.frame(&input, i as f64 * FRAME);
        }

        assert_eq!(watch.heart().reading(), before);
    }

    #[test]
    fn test_heart_ticks_while_visible() {
        let mut watch = watch();
        watch.frame(&press_right(), FRAME);
        assert_eq!(watch.active_screen(), Screen::Heart);

        let start_bpm = watch.heart().current_bpm();
        let mut now = FRAME;
        for _ in 0..150 {
            now += FRAME;
            let mut input = idle();
            input.activity_held = true;
            watch.frame(&input, now);
        }

        assert!(watch.heart().current_bpm() > start_bpm);
        assert!(watch.heart().ekg_scroll() > 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = WatchConfig::default();
        config.heart.ekg_min_bpm = f32::NAN;

        let result = Watch::new(
            &config,
            TimeOfDay::new(8, 30, 0),
            SmallRng::seed_from_u64(11),
            0.0,
        );

        assert!(matches!(result, Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn test_heart_state_survives_screen_round_trip() {
        let mut watch = watch();
        let start_bpm = watch.heart().current_bpm();
        let mut held = idle();
        held.activity_held = true;

        let mut now = FRAME;
        watch.frame(&press_right(), now);
        for _ in 0..75 {
            now += FRAME;
            watch.frame(&held, now);
        }
        assert!(watch.heart().current_bpm() > start_bpm);

        now += FRAME;
        watch.frame(&press_left(), now);
        assert_eq!(watch.active_screen(), Screen::Time);
        let hidden = watch.heart().reading();

        // Thirty seconds on the time screen with activity held
        for _ in 0..300 {
            now += 0.1;
            watch.frame(&held, now);
        }
        assert_eq!(watch.heart().reading(), hidden);

        // Switching back shows the stored reading, not a fresh resting value
        now += FRAME;
        let snap = snapshot(watch.frame(&press_right(), now));
        assert_eq!(snap.screen, Screen::Heart);
        assert_eq!(snap.heart, hidden);

        // First visible tick applies the whole hidden interval, blend clamped to 1
        now += FRAME;
        watch.frame(&held, now);
        assert_eq!(watch.heart().target_bpm(), 210.0);
        assert!((watch.heart().current_bpm() - 210.0).abs() < 1e-3);
        assert!(watch.heart().ekg_scroll().abs() < 1000.0);
    }

    #[test]
    fn test_one_transition_per_press() {
        let mut watch = watch();

        watch.frame(&press_right(), FRAME);
        assert_eq!(
            watch.last_transition(),
            Some(Transition {
                from: Screen::Time,
                to: Screen::Heart
            })
        );

        // Held across frames: stays on Heart even though Heart also has a right arrow
        watch.frame(&press_right(), 2.0 * FRAME);
        assert_eq!(watch.active_screen(), Screen::Heart);
        assert_eq!(watch.last_transition(), None);

        watch.frame(&idle(), 3.0 * FRAME);
        watch.frame(&press_right(), 4.0 * FRAME);
        assert_eq!(watch.active_screen(), Screen::Battery);

        watch.frame(&idle(), 5.0 * FRAME);
        watch.frame(&press_left(), 6.0 * FRAME);
        assert_eq!(watch.active_screen(), Screen::Heart);
    }

    #[test]
    fn test_exit_request_stops_after_update() {
        let mut watch = watch();
        let mut input = idle();
        input.exit_requested = true;

        assert_eq!(watch.frame(&input, 12.0), FrameOutcome::Exit);
        // Simulators were still advanced this frame
        assert_eq!(watch.battery().percent(), 99);
        assert_eq!(watch.clock().time(), TimeOfDay::new(8, 30, 12));
    }

    #[test]
    fn test_switch_frame_renders_new_screen() {
        let mut watch = watch();

        let snap = snapshot(watch.frame(&press_right(), FRAME));

        assert_eq!(snap.screen, Screen::Heart);
    }
}
