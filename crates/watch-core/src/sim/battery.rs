//! Linear battery drain. There is no charging model.

use log::debug;

use crate::config::BatteryConfig;

/// Battery that loses one percent per depletion interval.
#[derive(Debug, Clone)]
pub struct BatterySimulator {
    percent: u8,
    interval: f64,
    last_depletion: f64,
}

impl BatterySimulator {
    pub fn new(config: BatteryConfig, now: f64) -> Self {
        Self {
            percent: config.initial_percent.min(100),
            interval: config.depletion_interval_secs,
            last_depletion: now,
        }
    }

    /// Apply every whole depletion interval elapsed since the last one.
    ///
    /// Several intervals in one call (e.g. after a stall) are all applied;
    /// the partial interval is carried to the next call.
    pub fn tick(&mut self, now: f64) {
        let elapsed = now - self.last_depletion;
        if elapsed < self.interval {
            return;
        }

        let steps = (elapsed / self.interval) as u64;
        self.last_depletion += steps as f64 * self.interval;

        let drop = steps.min(u64::from(u8::MAX)) as u8;
        self.percent = self.percent.saturating_sub(drop);
        debug!("Battery down {} step(s) to {}%", steps, self.percent);
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn last_depletion(&self) -> f64 {
        self.last_depletion
    }

    pub fn is_empty(&self) -> bool {
        self.percent == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn battery() -> BatterySimulator {
        BatterySimulator::new(BatteryConfig::default(), 0.0)
    }

    #[test]
    fn test_starts_full() {
        assert_eq!(battery().percent(), 100);
    }

    #[test]
    fn test_partial_interval_does_nothing() {
        let mut battery = battery();
        battery.tick(9.99);

        assert_eq!(battery.percent(), 100);
        assert_eq!(battery.last_depletion(), 0.0);
    }

    #[test]
    fn test_catch_up_keeps_remainder() {
        let mut battery = battery();
        battery.tick(25.0);

        assert_eq!(battery.percent(), 98);
        assert_eq!(battery.last_depletion(), 20.0);

        // The 5 s remainder counts towards the next interval
        battery.tick(30.0);
        assert_eq!(battery.percent(), 97);
    }

    #[test]
    fn test_drains_to_exactly_zero() {
        let mut battery = battery();
        battery.tick(99.0 * 10.0);
        assert_eq!(battery.percent(), 1);

        battery.tick(100.0 * 10.0);
        assert_eq!(battery.percent(), 0);
        assert!(battery.is_empty());

        battery.tick(1000.0 * 10.0);
        assert_eq!(battery.percent(), 0);

        battery.tick(1_000_000.0);
        assert_eq!(battery.percent(), 0);
    }

    #[test]
    fn test_backwards_time_is_ignored() {
        let mut battery = BatterySimulator::new(BatteryConfig::default(), 100.0);
        battery.tick(50.0);

        assert_eq!(battery.percent(), 100);
    }

    proptest! {
        #[test]
        fn prop_percent_non_increasing(
            deltas in proptest::collection::vec(0.0f64..40.0, 1..100),
        ) {
            let mut battery = battery();
            let mut now = 0.0;
            let mut previous = battery.percent();
            for dt in deltas {
                now += dt;
                battery.tick(now);
                prop_assert!(battery.percent() <= previous);
                previous = battery.percent();
            }
        }
    }
}
