//! Refresh driver for periodic mode re-evaluation.
//!
//! The driver is a wall-clock-based value with no internal thread or timer.
//! The caller polls `tick()` as often as it likes; the driver evaluates the
//! classifier on the first tick and then at most once per refresh period,
//! returning an [`Event`] for each evaluation. Cancellation is dropping the
//! driver.

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use super::{classify, DriveMode, TimeOfDay};
use crate::events::Event;

/// Default re-evaluation period: 60 real-world seconds.
pub const DEFAULT_REFRESH_PERIOD_MS: u64 = 60_000;

/// Periodically re-samples the clock and re-runs the mode classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshDriver {
    period_ms: u64,
    /// Epoch ms of the last evaluation, `None` before the first tick.
    #[serde(default)]
    last_eval_epoch_ms: Option<u64>,
    /// Mode produced by the last evaluation.
    #[serde(default)]
    current: Option<DriveMode>,
}

impl Default for RefreshDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshDriver {
    /// Create a driver with the default 60 s period.
    pub fn new() -> Self {
        Self::with_period_ms(DEFAULT_REFRESH_PERIOD_MS)
    }

    /// Create a driver with a custom period. Periods below 1 ms are clamped.
    pub fn with_period_ms(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            last_eval_epoch_ms: None,
            current: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Mode produced by the most recent evaluation, if any.
    pub fn current(&self) -> Option<DriveMode> {
        self.current
    }

    /// Poll with the real clock.
    pub fn tick(&mut self) -> Option<Event> {
        let now = Local::now();
        let epoch_ms = now.timestamp_millis().max(0) as u64;
        self.tick_at(epoch_ms, TimeOfDay::from_local(&now))
    }

    /// Poll with an explicit clock reading.
    ///
    /// Returns `None` when the refresh period has not yet elapsed. Otherwise
    /// evaluates the classifier and returns [`Event::ModeChanged`] when the
    /// variant differs from the previous evaluation, [`Event::ModeRefreshed`]
    /// when it does not. Each evaluation is independent and idempotent, so a
    /// missed or late poll needs no catch-up handling.
    pub fn tick_at(&mut self, epoch_ms: u64, time: TimeOfDay) -> Option<Event> {
        if let Some(last) = self.last_eval_epoch_ms {
            if epoch_ms.saturating_sub(last) < self.period_ms {
                return None;
            }
        }
        self.last_eval_epoch_ms = Some(epoch_ms);

        let mode = classify(time);
        let previous = self.current.replace(mode);
        let at = Utc::now();
        match previous {
            Some(prev) if prev != mode => Some(Event::ModeChanged {
                from: prev,
                to: mode,
                minutes: time.minutes(),
                at,
            }),
            _ => Some(Event::ModeRefreshed {
                mode,
                minutes: time.minutes(),
                at,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(minutes: u16) -> TimeOfDay {
        TimeOfDay::new(minutes).unwrap()
    }

    #[test]
    fn test_first_tick_always_evaluates() {
        let mut driver = RefreshDriver::new();
        let event = driver.tick_at(0, at(435));
        match event {
            Some(Event::ModeRefreshed { mode, minutes, .. }) => {
                assert_eq!(mode, DriveMode::Prime);
                assert_eq!(minutes, 435);
            }
            other => panic!("expected ModeRefreshed, got {other:?}"),
        }
        assert_eq!(driver.current(), Some(DriveMode::Prime));
    }

    #[test]
    fn test_tick_respects_period() {
        let mut driver = RefreshDriver::new();
        assert!(driver.tick_at(1_000, at(435)).is_some());
        // Polls inside the period are no-ops.
        assert!(driver.tick_at(1_500, at(435)).is_none());
        assert!(driver.tick_at(60_999, at(435)).is_none());
        // Exactly one period later it evaluates again.
        assert!(driver.tick_at(61_000, at(435)).is_some());
    }

    #[test]
    fn test_mode_change_emits_transition() {
        let mut driver = RefreshDriver::new();
        assert!(matches!(
            driver.tick_at(0, at(569)),
            Some(Event::ModeRefreshed { mode: DriveMode::Prime, .. })
        ));
        // 09:31 falls in the gap after the prime window.
        match driver.tick_at(60_000, at(571)) {
            Some(Event::ModeChanged { from, to, .. }) => {
                assert_eq!(from, DriveMode::Prime);
                assert_eq!(to, DriveMode::General);
            }
            other => panic!("expected ModeChanged, got {other:?}"),
        }
        assert_eq!(driver.current(), Some(DriveMode::General));
    }

    #[test]
    fn test_same_mode_refresh_is_not_a_change() {
        let mut driver = RefreshDriver::new();
        driver.tick_at(0, at(700));
        assert!(matches!(
            driver.tick_at(60_000, at(701)),
            Some(Event::ModeRefreshed { mode: DriveMode::Midday, .. })
        ));
    }

    #[test]
    fn test_custom_period() {
        let mut driver = RefreshDriver::with_period_ms(10);
        assert_eq!(driver.period_ms(), 10);
        assert!(driver.tick_at(0, at(0)).is_some());
        assert!(driver.tick_at(5, at(0)).is_none());
        assert!(driver.tick_at(10, at(0)).is_some());

        // Zero clamps rather than evaluating on every poll forever.
        assert_eq!(RefreshDriver::with_period_ms(0).period_ms(), 1);
    }

    #[test]
    fn test_repeated_evaluations_are_idempotent() {
        let mut a = RefreshDriver::new();
        let mut b = RefreshDriver::new();
        let ea = a.tick_at(0, at(960));
        let eb = b.tick_at(0, at(960));
        match (ea, eb) {
            (
                Some(Event::ModeRefreshed { mode: ma, minutes: na, .. }),
                Some(Event::ModeRefreshed { mode: mb, minutes: nb, .. }),
            ) => {
                assert_eq!(ma, mb);
                assert_eq!(na, nb);
                assert_eq!(ma.label(), mb.label());
                assert_eq!(ma.tip(), mb.tip());
            }
            other => panic!("expected two refresh events, got {other:?}"),
        }
    }
}
