//! Screen layout for the 128x64 panel.
//!
//! Rendering is split in two: [`render`] turns a [`DisplayState`] into a
//! [`Frame`] of draw commands, and [`Frame::draw_to`] replays those commands
//! on a [`Canvas`]. The first half is pure and is what the tests check.

use tickerboard_types::DisplayState;

use crate::error::DisplayError;

/// Panel width in pixels.
pub const SCREEN_WIDTH: u16 = 128;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u16 = 64;

/// Label printed next to the price.
pub const PRICE_LABEL: &str = "ETH/EUR";

/// Draw primitives offered by the display driver.
pub trait Canvas {
    /// Blank the whole back buffer.
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the text cursor to a pixel position.
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError>;

    /// Set the font scale (1 = 6x8 glyph cell).
    fn set_text_size(&mut self, size: u8) -> Result<(), DisplayError>;

    /// Print text at the cursor, advancing it.
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Push the back buffer to the panel.
    fn present(&mut self) -> Result<(), DisplayError>;
}

/// One draw primitive with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    SetCursor { x: u16, y: u16 },
    SetTextSize(u8),
    Print(String),
    Present,
}

/// An ordered list of draw commands making up one screen update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Append a block of text at a position and scale.
    fn text(&mut self, x: u16, y: u16, size: u8, text: impl Into<String>) {
        self.commands.push(DrawCommand::SetTextSize(size));
        self.commands.push(DrawCommand::SetCursor { x, y });
        self.commands.push(DrawCommand::Print(text.into()));
    }

    /// Strings printed by this frame, in draw order.
    pub fn printed(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replay the frame on a canvas, stopping at the first error.
    pub fn draw_to<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), DisplayError> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => canvas.clear()?,
                DrawCommand::SetCursor { x, y } => canvas.set_cursor(*x, *y)?,
                DrawCommand::SetTextSize(size) => canvas.set_text_size(*size)?,
                DrawCommand::Print(text) => canvas.print(text)?,
                DrawCommand::Present => canvas.present()?,
            }
        }
        Ok(())
    }
}

/// Lay out the dashboard.
///
/// The frame always starts with a clear and ends with a single present.
pub fn render(state: &DisplayState) -> Frame {
    let mut frame = Frame::new();
    frame.commands.push(DrawCommand::Clear);

    // Price with its unit label on the top row
    frame.text(20, 0, 2, state.price.to_string());
    frame.text(70, 0, 1, PRICE_LABEL);

    // Date left, temperature right on the second row
    frame.text(0, 20, 2, state.date.to_string());
    frame.text(90, 20, 2, state.temperature.as_str());

    // Time at the bottom, separator blanked on the off phase
    frame.text(0, 43, 3, state.time.render(state.blink));

    frame.commands.push(DrawCommand::Present);
    frame
}

/// A single line of small text, used for the boot messages.
pub fn render_splash(x: u16, message: &str) -> Frame {
    let mut frame = Frame::new();
    frame.commands.push(DrawCommand::Clear);
    frame.text(x, 0, 1, message);
    frame.commands.push(DrawCommand::Present);
    frame
}
