//! Status indicator blinking while the network comes up.
//!
//! The indicator runs on its own timer task and only ever flips one flag. It
//! shares nothing with the dashboard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::trace;

/// A single output line toggled by a periodic timer.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    lit: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start toggling every `period`. Replaces any running ticker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn attach(&mut self, period: Duration) {
        self.stop_ticker();

        let lit = self.lit.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let was_lit = lit.fetch_xor(true, Ordering::Relaxed);
                trace!(lit = !was_lit, "status indicator toggled");
            }
        }));
    }

    /// Stop toggling and leave the indicator steady off.
    pub fn detach(&mut self) {
        self.stop_ticker();
        self.lit.store(false, Ordering::Relaxed);
    }

    pub fn is_attached(&self) -> bool {
        self.task.is_some()
    }

    pub fn is_lit(&self) -> bool {
        self.lit.load(Ordering::Relaxed)
    }

    fn stop_ticker(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for StatusIndicator {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
