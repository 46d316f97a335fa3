//! The dashboard loop body.
//!
//! [`Dashboard`] owns the display state, the timers and the three sources.
//! One call to [`Dashboard::tick`] is one pass of the main loop: maybe
//! refresh, maybe blink, always render and present.

use tracing::{debug, warn};

use tickerboard_types::{DisplayState, Price, Temperature};

use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::render::{render, Canvas};
use crate::scheduler::RefreshScheduler;
use crate::sources::{ClockReading, DataSource};
use crate::uptime::Uptime;

/// The three sources feeding the panel.
#[derive(Debug, Clone)]
pub struct Sources<C, T, P> {
    pub clock: C,
    pub temperature: T,
    pub price: P,
}

/// Display state plus everything needed to keep it current.
pub struct Dashboard<C, T, P, U> {
    sources: Sources<C, T, P>,
    uptime: U,
    scheduler: RefreshScheduler,
    state: DisplayState,
}

impl<C, T, P, U> Dashboard<C, T, P, U>
where
    C: DataSource<Value = ClockReading>,
    T: DataSource<Value = Temperature>,
    P: DataSource<Value = Price>,
    U: Uptime,
{
    /// Create a dashboard showing the default placeholders.
    pub fn new(sources: Sources<C, T, P>, uptime: U, config: &DashboardConfig) -> Self {
        Self {
            sources,
            uptime,
            scheduler: RefreshScheduler::from_config(config),
            state: DisplayState::default(),
        }
    }

    /// Current display snapshot.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Fetch all three values in order and restart the data interval.
    ///
    /// A failed source leaves its field untouched.
    pub async fn refresh_all(&mut self) {
        if let Some(reading) = settle(self.sources.clock.name(), self.sources.clock.fetch().await) {
            self.state.time = reading.time;
            self.state.date = reading.date;
        }

        if let Some(temperature) = settle(
            self.sources.temperature.name(),
            self.sources.temperature.fetch().await,
        ) {
            self.state.temperature = temperature;
        }

        if let Some(price) = settle(self.sources.price.name(), self.sources.price.fetch().await) {
            self.state.price = price;
        }

        self.scheduler.mark_data_synced(self.uptime.millis());

        match serde_json::to_string(&self.state) {
            Ok(snapshot) => debug!("Display state: {}", snapshot),
            Err(e) => debug!("Display state not serializable: {}", e),
        }
    }

    /// Run one loop iteration and draw the result.
    ///
    /// Draw failures are logged; the next iteration tries again.
    pub async fn tick<K: Canvas + ?Sized>(&mut self, canvas: &mut K) {
        if self.scheduler.data_due(self.uptime.millis()) {
            self.refresh_all().await;
        }

        if self.scheduler.poll_blink(self.uptime.millis()) {
            self.state.blink = !self.state.blink;
        }

        if let Err(e) = render(&self.state).draw_to(canvas) {
            warn!("Failed to draw frame: {}", e);
        }
    }
}

/// Log a failed fetch and turn it into "no change".
fn settle<V>(source: &str, result: Result<V, FetchError>) -> Option<V> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Keeping previous {} value: {}", source, e);
            None
        }
    }
}
