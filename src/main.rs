//! Tickerboard
//!
//! Boots the panel, brings up the HTTPS client and runs the refresh/render
//! loop forever.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```

use anyhow::Context;
use tracing::info;

use tickerboard::{
    render_splash, ClockSource, ConsoleCanvas, Dashboard, DashboardConfig, HttpFetcher,
    PriceSource, Sources, StatusIndicator, TemperatureSource, TokioUptime,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    info!("Starting tickerboard");

    let config = DashboardConfig::default();
    let mut canvas = ConsoleCanvas::new();

    // Blink the indicator until the network is up
    let mut indicator = StatusIndicator::new();
    indicator.attach(config.indicator_period);

    // A panel that cannot show the boot splash is fatal
    render_splash(2, "Connecting WiFi...")
        .draw_to(&mut canvas)
        .context("display bring-up failed")?;

    let http = HttpFetcher::new(&config).context("failed to build HTTPS client")?;

    indicator.detach();
    render_splash(3, "WiFi connected!")
        .draw_to(&mut canvas)
        .context("display bring-up failed")?;
    tokio::time::sleep(config.splash_hold).await;

    let sources = Sources {
        clock: ClockSource::new(http.clone()),
        temperature: TemperatureSource::new(http.clone()),
        price: PriceSource::new(http),
    };
    let mut dashboard = Dashboard::new(sources, TokioUptime::new(), &config);

    info!(
        "Refreshing every {:?}, blinking every {:?}",
        config.data_interval, config.blink_interval
    );

    // Initial sync before the first frame
    dashboard.refresh_all().await;

    loop {
        dashboard.tick(&mut canvas).await;
        tokio::time::sleep(config.frame_delay).await;
    }
}
