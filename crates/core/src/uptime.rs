//! Monotonic millisecond clock.

use tokio::time::Instant;

/// A monotonic millisecond counter that wraps at `u32::MAX`.
///
/// Callers must compare readings with `wrapping_sub`, never with `<`.
pub trait Uptime {
    fn millis(&self) -> u32;
}

/// Milliseconds since construction, backed by the tokio clock.
#[derive(Debug, Clone, Copy)]
pub struct TokioUptime {
    start: Instant,
}

impl TokioUptime {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for TokioUptime {
    fn default() -> Self {
        Self::new()
    }
}

impl Uptime for TokioUptime {
    fn millis(&self) -> u32 {
        // Truncation is the wrap.
        self.start.elapsed().as_millis() as u32
    }
}
