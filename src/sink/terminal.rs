//! Terminal panel emulator.
//!
//! Renders matrix frames into a terminal, two vertical pixels per
//! character cell via the upper-half-block glyph (foreground = top
//! pixel, background = bottom pixel). All ANSI output for one frame is
//! accumulated and flushed in a single `write()` syscall to prevent
//! tearing.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::{DisplaySink, SinkError};
use crate::buffer::{PixelBuffer, Rgb};

/// Upper half block: paints the top pixel with fg, bottom with bg.
const HALF_BLOCK: &str = "\u{2580}";

/// Pre-allocated buffer for building ANSI escape sequences.
struct AnsiBuffer {
    data: Vec<u8>,
    last_fg: Option<Rgb>,
    last_bg: Option<Rgb>,
}

impl AnsiBuffer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            last_fg: None,
            last_bg: None,
        }
    }

    /// Clear for a new frame; color state does not survive frames.
    fn clear(&mut self) {
        self.data.clear();
        self.last_fg = None;
        self.last_bg = None;
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    fn cursor_move(&mut self, x: u16, y: u16) {
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    /// Emit one character cell covering a vertical pixel pair.
    ///
    /// Color sequences are only written when they change, which keeps
    /// frames of mostly-dark panels small.
    fn push_pixel_pair(&mut self, top: Rgb, bottom: Rgb) {
        if self.last_fg != Some(top) {
            let _ = write!(self.data, "\x1b[38;2;{};{};{}m", top.r, top.g, top.b);
            self.last_fg = Some(top);
        }
        if self.last_bg != Some(bottom) {
            let _ = write!(self.data, "\x1b[48;2;{};{};{}m", bottom.r, bottom.g, bottom.b);
            self.last_bg = Some(bottom);
        }
        self.data.extend_from_slice(HALF_BLOCK.as_bytes());
    }

    /// Reset all attributes.
    fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
        self.last_fg = None;
        self.last_bg = None;
    }

    /// Flush to a writer in a single syscall.
    fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

/// LED panel emulator backed by a terminal.
///
/// Construction takes over the terminal (raw mode, alternate screen,
/// hidden cursor); dropping the sink restores it.
pub struct TerminalSink {
    output: AnsiBuffer,
    stdout: Stdout,
}

impl TerminalSink {
    /// Take over the terminal and prepare for frame output.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or alternate screen setup fails.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self {
            output: AnsiBuffer::with_capacity(65536),
            stdout,
        })
    }
}

impl DisplaySink for TerminalSink {
    fn emit(&mut self, frame: &PixelBuffer) -> Result<(), SinkError> {
        self.output.clear();

        // Two pixel rows per character row; an odd trailing row pairs
        // with an unlit bottom half.
        let char_rows = frame.height().div_ceil(2);
        for row in 0..char_rows {
            self.output.cursor_move(0, row as u16);
            let top_y = row * 2;
            for x in 0..frame.width() {
                let top = frame.get(x, top_y).unwrap_or(Rgb::OFF);
                let bottom = frame.get(x, top_y + 1).unwrap_or(Rgb::OFF);
                self.output.push_pixel_pair(top, bottom);
            }
        }
        self.output.reset_attrs();

        self.output.flush_to(&mut self.stdout)?;
        Ok(())
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
