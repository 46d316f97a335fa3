//! Tickerboard
//!
//! A desk display showing the local time, the outside temperature and the
//! ETH/EUR price on a 128x64 monochrome panel.
//!
//! # Features
//!
//! - **Periodic refresh** of all three values every 10 seconds
//! - **Stale-on-failure**: a network blip keeps the last good values on screen
//! - **Blinking separator** on the clock, toggled every second
//!
//! The fetch, schedule and layout logic lives in `tickerboard-core`; the
//! value types live in `tickerboard-types`. Both are re-exported here.

pub mod console;

pub use console::ConsoleCanvas;
pub use tickerboard_core::{
    decode_clock, decode_price, decode_temperature, render, render_splash, Canvas, ClockReading,
    ClockSource, Dashboard, DashboardConfig, DataSource, DisplayError, FetchError, HttpFetcher,
    PriceSource, RefreshScheduler, Sources, StatusIndicator, TemperatureSource, TokioUptime,
};
pub use tickerboard_types::{DateStamp, DisplayState, Month, Price, Temperature, TimeOfDay};
