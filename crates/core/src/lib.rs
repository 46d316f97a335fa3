//! Tickerboard core
//!
//! Fetch, schedule and render logic for a 128x64 desk display showing the
//! local time, the outside temperature and the ETH/EUR price.
//!
//! # Features
//!
//! - **Stale-on-failure sources**: a failed fetch never blanks a field
//! - **Independent timers** for data refresh and separator blink
//! - **Pure layout**: [`render`] maps a [`DisplayState`] to draw commands
//!
//! # Example
//!
//! ```no_run
//! use tickerboard_core::{
//!     ClockSource, Dashboard, DashboardConfig, HttpFetcher, PriceSource, Sources,
//!     TemperatureSource, TokioUptime,
//! };
//! # use tickerboard_core::{Canvas, DisplayError};
//! # struct Panel;
//! # impl Canvas for Panel {
//! #     fn clear(&mut self) -> Result<(), DisplayError> { Ok(()) }
//! #     fn set_cursor(&mut self, _: u16, _: u16) -> Result<(), DisplayError> { Ok(()) }
//! #     fn set_text_size(&mut self, _: u8) -> Result<(), DisplayError> { Ok(()) }
//! #     fn print(&mut self, _: &str) -> Result<(), DisplayError> { Ok(()) }
//! #     fn present(&mut self) -> Result<(), DisplayError> { Ok(()) }
//! # }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::default();
//!     let http = HttpFetcher::new(&config)?;
//!     let sources = Sources {
//!         clock: ClockSource::new(http.clone()),
//!         temperature: TemperatureSource::new(http.clone()),
//!         price: PriceSource::new(http),
//!     };
//!
//!     let mut panel = Panel;
//!     let mut dashboard = Dashboard::new(sources, TokioUptime::new(), &config);
//!     dashboard.refresh_all().await;
//!     loop {
//!         dashboard.tick(&mut panel).await;
//!         tokio::time::sleep(config.frame_delay).await;
//!     }
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod indicator;
pub mod render;
pub mod scheduler;
pub mod sources;
pub mod uptime;

#[cfg(test)]
mod testing;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, Sources};
pub use error::{DisplayError, FetchError};
pub use http::HttpFetcher;
pub use indicator::StatusIndicator;
pub use render::{
    render, render_splash, Canvas, DrawCommand, Frame, PRICE_LABEL, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use scheduler::{IntervalTimer, RefreshScheduler};
pub use sources::{
    decode_clock, decode_price, decode_temperature, parse_datetime, ClockReading, ClockSource,
    DataSource, PriceSource, TemperatureSource,
};
pub use uptime::{TokioUptime, Uptime};

pub use tickerboard_types::DisplayState;
