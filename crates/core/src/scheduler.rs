//! Data-refresh and blink timers.
//!
//! Both timers are edge detectors over a wrapping millisecond counter. They
//! are polled once per loop iteration and never influence each other.

use crate::config::DashboardConfig;

/// One periodic timer: due once `interval_ms` has elapsed since it last fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u32,
    last_fired: u32,
}

impl IntervalTimer {
    /// A timer that counts from uptime zero.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_fired: 0,
        }
    }

    /// Whether the interval has elapsed at `now`. Safe across counter wrap.
    pub fn is_due(&self, now: u32) -> bool {
        now.wrapping_sub(self.last_fired) >= self.interval_ms
    }

    /// Restart the interval at `now`.
    pub fn reset(&mut self, now: u32) {
        self.last_fired = now;
    }

    /// Check and, if due, restart. Returns whether the timer fired.
    pub fn poll(&mut self, now: u32) -> bool {
        let due = self.is_due(now);
        if due {
            self.reset(now);
        }
        due
    }
}

/// The two timers driving the dashboard loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshScheduler {
    data: IntervalTimer,
    blink: IntervalTimer,
}

impl RefreshScheduler {
    pub fn new(data_interval_ms: u32, blink_interval_ms: u32) -> Self {
        Self {
            data: IntervalTimer::new(data_interval_ms),
            blink: IntervalTimer::new(blink_interval_ms),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.data_interval_ms(), config.blink_interval_ms())
    }

    /// Whether a data refresh should start at `now`.
    ///
    /// The data timer is reset separately, once the refresh has finished.
    pub fn data_due(&self, now: u32) -> bool {
        self.data.is_due(now)
    }

    /// Record that a data refresh completed at `now`.
    pub fn mark_data_synced(&mut self, now: u32) {
        self.data.reset(now);
    }

    /// Returns true at most once per blink interval.
    pub fn poll_blink(&mut self, now: u32) -> bool {
        self.blink.poll(now)
    }
}
