//! Display value types for the tickerboard.
//!
//! Everything the panel shows lives in one [`DisplayState`] record. The
//! field types carry their own formatting so the renderer only has to place
//! strings on screen.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Month of the year, mapped onto the fixed abbreviation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Look up a month by its 1-based number. Anything outside 1-12 is `None`.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = number.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    /// Three-letter abbreviation shown on the panel.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::January => "ENE",
            Month::February => "FEB",
            Month::March => "MAR",
            Month::April => "ABR",
            Month::May => "MAY",
            Month::June => "JUN",
            Month::July => "JUL",
            Month::August => "AGO",
            Month::September => "SEP",
            Month::October => "OCT",
            Month::November => "NOV",
            Month::December => "DIC",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hour, 0-23
    pub hour: u8,

    /// Minute, 0-59
    pub minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Format as `HH:MM`, or `HH MM` when the separator is blanked.
    pub fn render(&self, separator_visible: bool) -> String {
        let separator = if separator_visible { ':' } else { ' ' };
        format!("{:02}{}{:02}", self.hour, separator, self.minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

/// Day of month plus month, shown as `DD.MMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStamp {
    /// Day of the month, 1-31
    pub day: u8,

    pub month: Month,
}

impl DateStamp {
    pub fn new(day: u8, month: Month) -> Self {
        Self { day, month }
    }
}

impl Default for DateStamp {
    fn default() -> Self {
        Self::new(1, Month::January)
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{}", self.day, self.month)
    }
}

/// Outside temperature as delivered by the weather service, unit stripped.
///
/// The text is passed through untouched; no numeric validation happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(pub String);

impl Temperature {
    /// Shown until the first successful fetch.
    pub const UNKNOWN: &'static str = "N/A";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::new(Self::UNKNOWN)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spot price in whole currency units (fraction truncated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub i64);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Last synced time of day
    pub time: TimeOfDay,

    /// Last synced date, from the same fetch as `time`
    pub date: DateStamp,

    /// Last fetched outside temperature
    pub temperature: Temperature,

    /// Last fetched spot price
    pub price: Price,

    /// Whether the time separator is currently drawn
    pub blink: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            time: TimeOfDay::default(),
            date: DateStamp::default(),
            temperature: Temperature::default(),
            price: Price::default(),
            blink: true,
        }
    }
}
