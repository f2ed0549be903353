//! Surface backed by crossterm.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};
use unicode_width::UnicodeWidthChar;

use super::{ClearRegion, Surface};
use crate::render::ColorPair;

/// Real terminal, drawn on the alternate screen in raw mode
pub struct ConsoleSurface<W: Write = Stdout> {
    out: W,
    raw: bool,
}

impl ConsoleSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, raw: false }
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.out.queue(EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.flush()
    }

    fn leave(&mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(cursor::Show)?;
        self.out.queue(LeaveAlternateScreen)?;
        self.out.flush()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        // Swapping default colours shows nothing; use reverse video instead.
        if colors.swapped && colors.uses_default() {
            let base = colors.reversed();
            self.out.queue(SetForegroundColor(base.foreground))?;
            self.out.queue(SetBackgroundColor(base.background))?;
            self.out.queue(SetAttribute(Attribute::Reverse))?;
        } else {
            self.out.queue(SetAttribute(Attribute::NoReverse))?;
            self.out.queue(SetForegroundColor(colors.foreground))?;
            self.out.queue(SetBackgroundColor(colors.background))?;
        }
        Ok(())
    }

    fn clear(&mut self, region: ClearRegion) -> io::Result<()> {
        let kind = match region {
            ClearRegion::All => ClearType::All,
            ClearRegion::FromCursorDown => ClearType::FromCursorDown,
            ClearRegion::CurrentLine => ClearType::CurrentLine,
            ClearRegion::UntilNewLine => ClearType::UntilNewLine,
        };
        self.out.queue(terminal::Clear(kind))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(cursor::Show)?;
        } else {
            self.out.queue(cursor::Hide)?;
        }
        Ok(())
    }

    fn viewport_size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.out.flush()?;
        self.next_key()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        loop {
            let key = self.next_key()?;
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Enter => return Ok(Some(line)),
                KeyCode::Esc => return Ok(None),
                KeyCode::Char('c') if ctrl => return Ok(None),
                KeyCode::Backspace => {
                    if let Some(c) = line.pop() {
                        let w = c.width().unwrap_or(0) as u16;
                        if w > 0 {
                            self.out.queue(cursor::MoveLeft(w))?;
                            self.out.queue(Print(" ".repeat(w as usize)))?;
                            self.out.queue(cursor::MoveLeft(w))?;
                        }
                    }
                }
                KeyCode::Char(c) if !ctrl => {
                    line.push(c);
                    self.out.queue(Print(c))?;
                }
                _ => continue,
            }
            self.out.flush()?;
        }
    }

    fn beep(&mut self) -> io::Result<()> {
        self.out.queue(Print('\x07'))?;
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for ConsoleSurface<W> {
    fn drop(&mut self) {
        if self.raw {
            let _ = self.leave();
        }
    }
}
