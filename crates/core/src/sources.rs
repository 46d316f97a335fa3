//! The three remote data sources and their payload decoders.
//!
//! Each source performs one GET and decodes the body into one display value.
//! Decoding lives in free functions so it can be exercised without a network.

use std::collections::HashMap;
use std::future::Future;

use chrono::{Datelike, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info};

use tickerboard_types::{DateStamp, Month, Price, Temperature, TimeOfDay};

use crate::error::FetchError;
use crate::http::HttpFetcher;

/// WorldTimeAPI endpoint for the local timezone.
pub const TIME_URL: &str = "https://worldtimeapi.org/api/timezone/Europe/Madrid";

/// wttr.in endpoint returning only the current temperature.
pub const TEMPERATURE_URL: &str = "https://wttr.in/Zaragoza?format=%t";

/// CoinGecko simple price endpoint.
pub const PRICE_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=ethereum&vs_currencies=eur";

/// Asset id queried from CoinGecko.
pub const PRICE_ASSET: &str = "ethereum";

/// Quote currency queried from CoinGecko.
pub const PRICE_CURRENCY: &str = "eur";

/// Unit suffix appended by the weather service.
const CELSIUS_SUFFIX: &str = "°C";

/// A fetch-and-decode unit producing one display value.
pub trait DataSource {
    type Value;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Fetch and decode. Runs to completion or until the transport times out.
    fn fetch(&self) -> impl Future<Output = Result<Self::Value, FetchError>> + Send;
}

/// Time and date from one clock sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub time: TimeOfDay,
    pub date: DateStamp,
}

/// WorldTimeAPI response; only `datetime` is used.
#[derive(Debug, Deserialize)]
struct TimePayload {
    datetime: String,
}

/// Decode a WorldTimeAPI body.
pub fn decode_clock(body: &str) -> Result<ClockReading, FetchError> {
    let payload: TimePayload = serde_json::from_str(body).map_err(FetchError::parse)?;
    parse_datetime(&payload.datetime)
}

/// Split a `YYYY-MM-DDTHH:MM...` string into time of day and date stamp.
///
/// Anything after the first 16 characters (seconds, fraction, offset) is
/// ignored. A month outside 1-12 is rejected.
pub fn parse_datetime(datetime: &str) -> Result<ClockReading, FetchError> {
    let prefix = datetime
        .get(..16)
        .ok_or_else(|| FetchError::Parse(format!("datetime too short: {:?}", datetime)))?;

    let stamp = NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M")
        .map_err(|e| FetchError::Parse(format!("bad datetime {:?}: {}", datetime, e)))?;

    let month = Month::from_number(stamp.month())
        .ok_or_else(|| FetchError::Parse(format!("month out of range in {:?}", datetime)))?;

    Ok(ClockReading {
        time: TimeOfDay::from(stamp.time()),
        date: DateStamp::new(stamp.day() as u8, month),
    })
}

/// Decode a wttr.in body: drop the unit, keep the rest verbatim.
pub fn decode_temperature(body: &str) -> Temperature {
    Temperature::new(body.replace(CELSIUS_SUFFIX, ""))
}

/// Decode a CoinGecko body shaped `{asset: {currency: number}}`.
pub fn decode_price(body: &str, asset: &str, currency: &str) -> Result<Price, FetchError> {
    let quotes: HashMap<String, HashMap<String, f64>> =
        serde_json::from_str(body).map_err(FetchError::parse)?;

    let value = quotes
        .get(asset)
        .and_then(|by_currency| by_currency.get(currency))
        .copied()
        .ok_or_else(|| FetchError::Parse(format!("no {}/{} quote in response", asset, currency)))?;

    if !value.is_finite() {
        return Err(FetchError::Parse(format!("non-finite price {}", value)));
    }

    Ok(Price(value.trunc() as i64))
}

/// Current local time and date.
#[derive(Debug, Clone)]
pub struct ClockSource {
    http: HttpFetcher,
    url: String,
}

impl ClockSource {
    pub fn new(http: HttpFetcher) -> Self {
        Self {
            http,
            url: TIME_URL.to_string(),
        }
    }

    /// Create a source reading from a custom endpoint.
    pub fn with_url(http: HttpFetcher, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

impl DataSource for ClockSource {
    type Value = ClockReading;

    fn name(&self) -> &'static str {
        "clock"
    }

    async fn fetch(&self) -> Result<ClockReading, FetchError> {
        let body = self.http.get_text(&self.url).await?;
        debug!("WorldTimeAPI response: {}", body);

        let reading = decode_clock(&body)?;
        info!("Clock synced: {} {}", reading.time, reading.date);
        Ok(reading)
    }
}

/// Outside temperature.
#[derive(Debug, Clone)]
pub struct TemperatureSource {
    http: HttpFetcher,
    url: String,
}

impl TemperatureSource {
    pub fn new(http: HttpFetcher) -> Self {
        Self {
            http,
            url: TEMPERATURE_URL.to_string(),
        }
    }

    /// Create a source reading from a custom endpoint.
    pub fn with_url(http: HttpFetcher, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

impl DataSource for TemperatureSource {
    type Value = Temperature;

    fn name(&self) -> &'static str {
        "temperature"
    }

    async fn fetch(&self) -> Result<Temperature, FetchError> {
        let body = self.http.get_text(&self.url).await?;
        let temperature = decode_temperature(&body);
        info!("Temperature: {}", temperature);
        Ok(temperature)
    }
}

/// ETH/EUR spot price.
#[derive(Debug, Clone)]
pub struct PriceSource {
    http: HttpFetcher,
    url: String,
    asset: &'static str,
    currency: &'static str,
}

impl PriceSource {
    pub fn new(http: HttpFetcher) -> Self {
        Self {
            http,
            url: PRICE_URL.to_string(),
            asset: PRICE_ASSET,
            currency: PRICE_CURRENCY,
        }
    }

    /// Create a source reading the ETH/EUR quote from a custom endpoint.
    pub fn with_url(http: HttpFetcher, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
            asset: PRICE_ASSET,
            currency: PRICE_CURRENCY,
        }
    }
}

impl DataSource for PriceSource {
    type Value = Price;

    fn name(&self) -> &'static str {
        "price"
    }

    async fn fetch(&self) -> Result<Price, FetchError> {
        let body = self.http.get_text(&self.url).await?;
        debug!("CoinGecko response: {}", body);

        let price = decode_price(&body, self.asset, self.currency)?;
        info!("{}/{}: {}", self.asset, self.currency, price);
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::testing::serve_once;

    fn http() -> HttpFetcher {
        HttpFetcher::new(&DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_decode_clock() {
        let body = r#"{"abbreviation":"CET","datetime":"2024-03-07T14:05:33+01:00","day_of_week":4}"#;
        let reading = decode_clock(body).unwrap();

        assert_eq!(reading.time.to_string(), "14:05");
        assert_eq!(reading.date.to_string(), "07.MAR");
    }

    #[test]
    fn test_parse_datetime_with_fraction() {
        let reading = parse_datetime("2024-12-24T09:41:02.123456+01:00").unwrap();
        assert_eq!(reading.time, TimeOfDay::new(9, 41).unwrap());
        assert_eq!(reading.date, DateStamp::new(24, Month::December));
    }

    #[test]
    fn test_month_out_of_range_is_parse_error() {
        assert!(matches!(
            parse_datetime("2024-13-07T14:05:33+01:00"),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(
            parse_datetime("2024-00-07T14:05:33+01:00"),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_datetime() {
        assert!(matches!(parse_datetime("2024-03-07"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_datetime("2024-03-07T1x:05"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_datetime(""), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_decode_clock_bad_json() {
        assert!(matches!(decode_clock("<html>"), Err(FetchError::Parse(_))));
        assert!(matches!(decode_clock(r#"{"utc_offset":"+01:00"}"#), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_decode_temperature() {
        assert_eq!(decode_temperature("+9°C").as_str(), "+9");
        assert_eq!(decode_temperature("-12°C").as_str(), "-12");
        // Passthrough: no numeric validation.
        assert_eq!(decode_temperature("Unknown location").as_str(), "Unknown location");
    }

    #[test]
    fn test_decode_price() {
        let price = decode_price(r#"{"ethereum":{"eur":3123.78}}"#, "ethereum", "eur").unwrap();
        assert_eq!(price, Price(3123));
    }

    #[test]
    fn test_decode_price_truncates_toward_zero() {
        let price = decode_price(r#"{"ethereum":{"eur":-0.99}}"#, "ethereum", "eur").unwrap();
        assert_eq!(price, Price(0));

        let price = decode_price(r#"{"ethereum":{"eur":2500}}"#, "ethereum", "eur").unwrap();
        assert_eq!(price, Price(2500));
    }

    #[test]
    fn test_decode_price_missing_quote() {
        assert!(matches!(
            decode_price(r#"{"ethereum":{"usd":3400.1}}"#, "ethereum", "eur"),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(
            decode_price(r#"{}"#, "ethereum", "eur"),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(
            decode_price(r#"{"ethereum":{"eur":"3123"}}"#, "ethereum", "eur"),
            Err(FetchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_clock_source_fetch() {
        let url = serve_once("200 OK", r#"{"datetime":"2024-03-07T14:05:33+01:00"}"#).await;
        let reading = ClockSource::with_url(http(), &url).fetch().await.unwrap();
        assert_eq!(reading.time.to_string(), "14:05");
        assert_eq!(reading.date.to_string(), "07.MAR");

        let url = serve_once("503 Service Unavailable", "").await;
        let result = ClockSource::with_url(http(), &url).fetch().await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_temperature_source_fetch() {
        let url = serve_once("200 OK", "+9°C").await;
        let temperature = TemperatureSource::with_url(http(), &url).fetch().await.unwrap();
        assert_eq!(temperature.as_str(), "+9");

        let url = serve_once("503 Service Unavailable", "+9°C").await;
        let result = TemperatureSource::with_url(http(), &url).fetch().await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_price_source_fetch() {
        let url = serve_once("200 OK", r#"{"ethereum":{"eur":3123.78}}"#).await;
        let price = PriceSource::with_url(http(), &url).fetch().await.unwrap();
        assert_eq!(price, Price(3123));

        let url = serve_once("503 Service Unavailable", r#"{"ethereum":{"eur":3123.78}}"#).await;
        let result = PriceSource::with_url(http(), &url).fetch().await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
