//! Runtime settings for the dashboard loop.

use std::time::Duration;

/// Timing and transport settings.
///
/// Endpoints are fixed in [`crate::sources`]; only timing is tunable.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Period between full data refreshes.
    pub data_interval: Duration,

    /// Period between time separator toggles.
    pub blink_interval: Duration,

    /// Pause between loop iterations.
    pub frame_delay: Duration,

    /// Upper bound on a single HTTP round trip.
    pub http_timeout: Duration,

    /// Toggle period of the status indicator while the network comes up.
    pub indicator_period: Duration,

    /// How long the "connected" splash stays on screen.
    pub splash_hold: Duration,

    /// Skip TLS certificate validation.
    pub accept_invalid_certs: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_interval: Duration::from_secs(10),
            blink_interval: Duration::from_secs(1),
            frame_delay: Duration::from_millis(100),
            http_timeout: Duration::from_secs(10),
            indicator_period: Duration::from_millis(600),
            splash_hold: Duration::from_secs(2),
            accept_invalid_certs: false,
        }
    }
}

impl DashboardConfig {
    pub fn data_interval_ms(&self) -> u32 {
        duration_ms(self.data_interval)
    }

    pub fn blink_interval_ms(&self) -> u32 {
        duration_ms(self.blink_interval)
    }
}

fn duration_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
