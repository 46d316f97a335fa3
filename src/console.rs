//! Console stand-in for the OLED panel.
//!
//! Keeps the text runs of the current frame and logs the composed frame on
//! present, but only when it differs from the previous one.

use tracing::{info, trace};

use tickerboard_core::{Canvas, DisplayError, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Glyph cell width at text size 1, in pixels.
const GLYPH_WIDTH: u16 = 6;

/// Largest text size the driver accepts.
const MAX_TEXT_SIZE: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextRun {
    x: u16,
    y: u16,
    text: String,
}

/// A 128x64 canvas that renders to the log.
#[derive(Debug)]
pub struct ConsoleCanvas {
    runs: Vec<TextRun>,
    cursor: (u16, u16),
    text_size: u8,
    last_frame: Option<String>,
}

impl ConsoleCanvas {
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            cursor: (0, 0),
            text_size: 1,
            last_frame: None,
        }
    }

    /// The back buffer as one line: rows top to bottom, runs left to right.
    pub fn frame_text(&self) -> String {
        let mut runs: Vec<&TextRun> = self.runs.iter().collect();
        runs.sort_by_key(|run| (run.y, run.x));

        let mut rows: Vec<(u16, Vec<&str>)> = Vec::new();
        for run in runs {
            match rows.last_mut() {
                Some((y, texts)) if *y == run.y => texts.push(run.text.as_str()),
                _ => rows.push((run.y, vec![run.text.as_str()])),
            }
        }

        rows.iter()
            .map(|(_, texts)| texts.join(" "))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }
}

impl Default for ConsoleCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for ConsoleCanvas {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.runs.clear();
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return Err(DisplayError::InvalidCoordinates { x, y });
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn set_text_size(&mut self, size: u8) -> Result<(), DisplayError> {
        if size == 0 || size > MAX_TEXT_SIZE {
            return Err(DisplayError::InvalidTextSize(size));
        }
        self.text_size = size;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let (x, y) = self.cursor;
        self.runs.push(TextRun {
            x,
            y,
            text: text.to_string(),
        });

        let advance = u16::try_from(text.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_mul(GLYPH_WIDTH)
            .saturating_mul(u16::from(self.text_size));
        self.cursor.0 = x.saturating_add(advance);
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        let frame = self.frame_text();
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            trace!("frame unchanged");
        } else {
            info!("[{}]", frame);
            self.last_frame = Some(frame);
        }
        Ok(())
    }
}
