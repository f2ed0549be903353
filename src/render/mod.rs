//! Paints a menu onto a `Surface`.
//!
//! Layout: the title on row 0, `title_gap` blank rows, then one entry per
//! `height` rows starting at `first_entry_row()`, indented by the menu
//! margin. The bottom row is reserved for the status line when enabled.
//! When the entries do not fit, leading entries are scrolled off so the
//! selected one stays in view.
//! Every row written is cleared to its end and everything below the last
//! entry is erased, so a smaller frame never leaves stale text behind.

mod colors;
pub mod glyphs;

use std::io;

use crossterm::event::KeyModifiers;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::menu::{EntryId, Menu};
use crate::terminal::{ClearRegion, Surface};

pub use colors::{parse_color, ColorPair};

/// Visual settings for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub colors: ColorPair,
    /// Blank rows between the title and the first entry
    pub title_gap: u16,
    /// Keep a help/status line on the bottom row
    pub help_line: bool,
    pub unicode: bool,
    /// Modifier named by the quit hint on the help line
    pub hard_exit: KeyModifiers,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            colors: ColorPair::default(),
            title_gap: 1,
            help_line: true,
            unicode: false,
            hard_exit: KeyModifiers::CONTROL,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn set_hard_exit(&mut self, hard_exit: KeyModifiers) {
        self.style.hard_exit = hard_exit;
    }

    pub fn first_entry_row(&self) -> u16 {
        1 + self.style.title_gap
    }

    /// First row past the entry area for a viewport `height` rows tall
    pub fn body_end(&self, height: u16) -> u16 {
        if self.style.help_line {
            height.saturating_sub(1)
        } else {
            height
        }
    }

    /// Index of the first entry drawn when the entry area is `body_rows` tall.
    ///
    /// Leading entries are skipped until the selected entry ends inside the
    /// area. The result depends only on the menu, so redraws are stable.
    pub fn first_visible(&self, menu: &Menu, body_rows: u16) -> usize {
        let Some(selected) = menu.selected_position() else {
            return 0;
        };
        let entries = menu.entries();
        let selected_end: u32 = entries
            .iter()
            .take(selected + 1)
            .map(|e| u32::from(e.height))
            .sum();

        let mut start = 0u32;
        for (pos, entry) in entries.iter().take(selected).enumerate() {
            if selected_end - start <= u32::from(body_rows) {
                return pos;
            }
            start += u32::from(entry.height);
        }
        selected
    }

    /// Screen row of the entry with `id` in a viewport `height` rows tall,
    /// or `None` when it is scrolled out of the entry area
    pub fn entry_row(&self, menu: &Menu, id: EntryId, height: u16) -> Option<u16> {
        let body_end = self.body_end(height);
        let first = self.first_visible(menu, body_end.saturating_sub(self.first_entry_row()));
        let mut row = self.first_entry_row();
        for entry in menu.entries().iter().skip(first) {
            if row >= body_end {
                return None;
            }
            if entry.id() == id {
                return Some(row);
            }
            row = row.saturating_add(entry.height);
        }
        None
    }

    /// Cell where the value of an input entry starts: just after `"<label>: "`
    pub fn value_origin(&self, menu: &Menu, id: EntryId, height: u16) -> Option<(u16, u16)> {
        let row = self.entry_row(menu, id, height)?;
        let entry = menu.entry(id)?;
        let label_width = u16::try_from(entry.label.width()).unwrap_or(u16::MAX);
        let col = menu.margin.saturating_add(label_width).saturating_add(2);
        Some((col, row))
    }

    /// Draw the whole frame for `menu`
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, menu: &Menu) -> io::Result<()> {
        let (width, height) = surface.viewport_size()?;
        let normal = self.style.colors;
        let highlight = normal.reversed();
        let body_end = self.body_end(height);
        let first = self.first_visible(menu, body_end.saturating_sub(self.first_entry_row()));

        surface.set_colors(normal)?;
        surface.set_cursor(0, 0)?;
        surface.write(&fit_width(&menu.title, width))?;
        surface.clear(ClearRegion::UntilNewLine)?;
        for row in 1..self.first_entry_row().min(body_end) {
            surface.set_cursor(0, row)?;
            surface.clear(ClearRegion::CurrentLine)?;
        }

        let margin = " ".repeat(menu.margin as usize);
        let selected = menu.selected_position();
        let mut row = self.first_entry_row();
        for (pos, entry) in menu.entries().iter().enumerate().skip(first) {
            if row >= body_end {
                break;
            }
            let is_selected = selected == Some(pos);
            let line = format!("{margin}{}", entry.display_text(self.style.unicode));

            surface.set_cursor(0, row)?;
            if is_selected {
                surface.set_colors(highlight)?;
            }
            surface.write(&fit_width(&line, width))?;
            if is_selected {
                surface.set_colors(normal)?;
            }
            surface.clear(ClearRegion::UntilNewLine)?;

            for extra in 1..entry.height {
                let r = row.saturating_add(extra);
                if r >= body_end {
                    break;
                }
                surface.set_cursor(0, r)?;
                surface.clear(ClearRegion::CurrentLine)?;
            }
            row = row.saturating_add(entry.height);
        }

        if row < body_end {
            surface.set_cursor(0, row)?;
            surface.clear(ClearRegion::FromCursorDown)?;
        }
        self.render_status_line(surface)
    }

    /// Redraw only the bottom row, erasing any stray echoed input
    pub fn render_status_line<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        let (width, height) = surface.viewport_size()?;
        if height == 0 {
            return surface.flush();
        }
        surface.set_colors(self.style.colors)?;
        surface.set_cursor(0, height - 1)?;
        if self.style.help_line {
            let help = glyphs::help_line(self.style.unicode, self.style.hard_exit);
            surface.write(&fit_width(&help, width))?;
            surface.clear(ClearRegion::UntilNewLine)?;
        } else {
            surface.clear(ClearRegion::CurrentLine)?;
        }
        surface.flush()
    }

    /// Clear the screen and draw `menu` from scratch
    pub fn refresh<S: Surface + ?Sized>(&self, surface: &mut S, menu: &Menu) -> io::Result<()> {
        surface.set_colors(self.style.colors)?;
        surface.clear(ClearRegion::All)?;
        self.render(surface, menu)
    }
}

/// Longest prefix of `text` that fits in `max` terminal cells
fn fit_width(text: &str, max: u16) -> String {
    let mut used = 0usize;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max as usize {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
