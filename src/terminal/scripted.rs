//! In-memory surface: a cell grid plus queues of scripted input.
//!
//! Reading past the end of the script fails with `UnexpectedEof`, so a
//! navigator driven by an incomplete script stops instead of blocking.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use super::{ClearRegion, Surface};
use crate::render::ColorPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    swapped: bool,
}

const BLANK: Cell = Cell {
    ch: ' ',
    swapped: false,
};

/// Marks the cells covered by the right half of a wide character
const WIDE_TAIL: char = '\0';

/// Surface state at the moment `read_line` was called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRead {
    pub cursor: (u16, u16),
    pub colors: ColorPair,
    pub cursor_visible: bool,
}

#[derive(Debug)]
pub struct ScriptedSurface {
    width: u16,
    height: u16,
    cells: Vec<Vec<Cell>>,
    cursor: (u16, u16),
    colors: ColorPair,
    cursor_visible: bool,
    keys: VecDeque<KeyEvent>,
    lines: VecDeque<Option<String>>,
    line_reads: Vec<LineRead>,
    beeps: usize,
    flushes: usize,
    entered: bool,
}

impl ScriptedSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![BLANK; width as usize]; height as usize],
            cursor: (0, 0),
            colors: ColorPair::default(),
            cursor_visible: true,
            keys: VecDeque::new(),
            lines: VecDeque::new(),
            line_reads: Vec::new(),
            beeps: 0,
            flushes: 0,
            entered: false,
        }
    }

    /// Queue key presses without modifiers
    pub fn with_keys(mut self, codes: impl IntoIterator<Item = KeyCode>) -> Self {
        for code in codes {
            self.push_key(KeyEvent::new(code, KeyModifiers::NONE));
        }
        self
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    /// Queue a line for the next `read_line`
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(Some(line.into()));
    }

    /// Queue a cancelled edit for the next `read_line`
    pub fn push_cancel(&mut self) {
        self.lines.push_back(None);
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// One record per `read_line` call, in call order
    pub fn line_reads(&self) -> &[LineRead] {
        &self.line_reads
    }

    pub fn beeps(&self) -> usize {
        self.beeps
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Whether `enter` was called without a matching `leave`
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Text of one row, trailing blanks removed
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|cells| {
                let text: String = cells
                    .iter()
                    .map(|c| c.ch)
                    .filter(|&ch| ch != WIDE_TAIL)
                    .collect();
                text.trim_end().to_string()
            })
            .unwrap_or_default()
    }

    /// Whole screen, one line per row, with trailing blank rows removed
    pub fn screen(&self) -> String {
        let mut rows: Vec<String> = (0..self.height).map(|r| self.row_text(r)).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    /// Rows containing reverse-coloured cells, as `(row, highlighted text)`
    pub fn highlighted(&self) -> Vec<(u16, String)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(row, cells)| {
                let text: String = cells
                    .iter()
                    .filter(|c| c.swapped && c.ch != WIDE_TAIL)
                    .map(|c| c.ch)
                    .collect();
                (!text.is_empty()).then(|| (row as u16, text))
            })
            .collect()
    }

    fn blank_row_from(&mut self, row: u16, col: u16) {
        if let Some(cells) = self.cells.get_mut(row as usize) {
            for cell in cells.iter_mut().skip(col as usize) {
                *cell = BLANK;
            }
        }
    }

    /// Write `ch` at the cursor and advance by its display width
    fn put(&mut self, ch: char) {
        let (col, row) = self.cursor;
        let width = ch.width().unwrap_or(0).max(1);
        let swapped = self.colors.swapped;
        if let Some(cells) = self.cells.get_mut(row as usize) {
            for (i, cell) in cells.iter_mut().skip(col as usize).take(width).enumerate() {
                let ch = if i == 0 { ch } else { WIDE_TAIL };
                *cell = Cell { ch, swapped };
            }
        }
        self.cursor.0 = col.saturating_add(width as u16);
    }
}

impl Surface for ScriptedSurface {
    fn enter(&mut self) -> io::Result<()> {
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.entered = false;
        Ok(())
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.cursor = (col, row);
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            self.put(ch);
        }
        Ok(())
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        self.colors = colors;
        Ok(())
    }

    fn clear(&mut self, region: ClearRegion) -> io::Result<()> {
        let (col, row) = self.cursor;
        match region {
            ClearRegion::All => {
                for r in 0..self.height {
                    self.blank_row_from(r, 0);
                }
            }
            ClearRegion::FromCursorDown => {
                self.blank_row_from(row, col);
                for r in row.saturating_add(1)..self.height {
                    self.blank_row_from(r, 0);
                }
            }
            ClearRegion::CurrentLine => self.blank_row_from(row, 0),
            ClearRegion::UntilNewLine => self.blank_row_from(row, col),
        }
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn viewport_size(&self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.line_reads.push(LineRead {
            cursor: self.cursor,
            colors: self.colors,
            cursor_visible: self.cursor_visible,
        });
        let line = self
            .lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "line script exhausted"))?;
        if let Some(text) = &line {
            self.write(text)?;
        }
        Ok(line)
    }

    fn beep(&mut self) -> io::Result<()> {
        self.beeps += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_clear_until_newline() {
        let mut s = ScriptedSurface::new(10, 3);
        s.set_cursor(0, 1).unwrap();
        s.write("abcdef").unwrap();
        s.set_cursor(3, 1).unwrap();
        s.clear(ClearRegion::UntilNewLine).unwrap();
        assert_eq!(s.row_text(1), "abc");
    }

    #[test]
    fn writes_past_the_edge_are_clipped() {
        let mut s = ScriptedSurface::new(4, 1);
        s.write("abcdefgh").unwrap();
        assert_eq!(s.screen(), "abcd");
    }

    #[test]
    fn highlighted_tracks_swapped_colors() {
        let mut s = ScriptedSurface::new(10, 2);
        s.write("ab").unwrap();
        s.set_colors(ColorPair::default().reversed()).unwrap();
        s.write("cd").unwrap();
        assert_eq!(s.highlighted(), vec![(0, "cd".to_string())]);
    }

    #[test]
    fn exhausted_script_is_eof() {
        let mut s = ScriptedSurface::new(1, 1);
        let err = s.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn wide_chars_take_two_cells() {
        let mut s = ScriptedSurface::new(10, 1);
        s.write("日本x").unwrap();
        assert_eq!(s.cursor(), (5, 0));
        assert_eq!(s.row_text(0), "日本x");

        s.set_cursor(4, 0).unwrap();
        s.write("y").unwrap();
        assert_eq!(s.row_text(0), "日本y");
    }

    #[test]
    fn read_line_records_surface_state() {
        let mut s = ScriptedSurface::new(10, 2);
        s.push_line("ok");
        s.set_cursor(3, 1).unwrap();
        s.set_colors(ColorPair::default().reversed()).unwrap();
        s.read_line().unwrap();

        let read = s.line_reads()[0];
        assert_eq!(read.cursor, (3, 1));
        assert!(read.colors.swapped);
        assert!(read.cursor_visible);
        assert_eq!(s.row_text(1), "   ok");
    }
}
