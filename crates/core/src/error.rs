//! Error types for fetching and drawing.

use std::fmt::Display;

/// Why a data source could not produce a value.
///
/// Every variant is handled the same way by the dashboard: log it and keep
/// the previous value on screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection failure, timeout or a non-200 status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body arrived but did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn transport(err: impl Display) -> Self {
        FetchError::Transport(err.to_string())
    }

    pub fn parse(err: impl Display) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Errors reported by a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// Communication with the panel failed
    #[error("display communication failed")]
    Communication,

    /// Cursor placed outside the panel
    #[error("cursor ({x}, {y}) is outside the panel")]
    InvalidCoordinates { x: u16, y: u16 },

    /// Text scale of zero or beyond what the panel supports
    #[error("unsupported text size {0}")]
    InvalidTextSize(u8),
}
