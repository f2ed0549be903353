//! Terminal surface the navigator and renderer draw through.
//!
//! # Module Structure
//!
//! - `console` - Surface backed by crossterm on a real terminal
//! - `scripted` - In-memory surface with scripted input, for tests and demos
//! - `caps` - Terminal capability detection

mod caps;
mod console;
mod scripted;

use std::io;

use crossterm::event::KeyEvent;

use crate::render::ColorPair;

pub use caps::{detect_capabilities, TerminalCapabilities};
pub use console::ConsoleSurface;
pub use scripted::{LineRead, ScriptedSurface};

/// Area erased by `Surface::clear`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearRegion {
    /// Whole screen
    All,
    /// From the cursor to the end of the screen
    FromCursorDown,
    /// The row the cursor is on
    CurrentLine,
    /// From the cursor to the end of its row
    UntilNewLine,
}

/// Primitive terminal operations.
///
/// Calls are synchronous and ordered; output may be buffered until `flush`.
/// Reads block until the user provides input.
pub trait Surface {
    /// Take over the terminal (raw input, hidden cursor)
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Hand the terminal back in the state `enter` found it
    fn leave(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> io::Result<()>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()>;

    fn clear(&mut self, region: ClearRegion) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Width and height in cells
    fn viewport_size(&self) -> io::Result<(u16, u16)>;

    /// Block until a key event arrives
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Read a line of text, echoing it as it is typed.
    ///
    /// Returns `None` if the user cancelled the edit.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Audible alert
    fn beep(&mut self) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
