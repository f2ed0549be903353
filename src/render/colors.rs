use crossterm::style::Color;

/// Foreground/background pair threaded through rendering.
///
/// `swapped` records that the pair is the reverse of the configured one, so
/// a surface can fall back to the reverse-video attribute when either colour
/// is the terminal default and swapping would be invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
    pub swapped: bool,
}

impl ColorPair {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            swapped: false,
        }
    }

    /// The same pair with foreground and background exchanged
    pub fn reversed(self) -> Self {
        Self {
            foreground: self.background,
            background: self.foreground,
            swapped: !self.swapped,
        }
    }

    /// Whether either side is the terminal's own default colour
    pub fn uses_default(&self) -> bool {
        self.foreground == Color::Reset || self.background == Color::Reset
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(Color::Reset, Color::Reset)
    }
}

/// Parse a colour name such as `grey`, `dark_blue` or `reset`
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    match name.as_str() {
        "reset" | "default" | "" => Some(Color::Reset),
        other => Color::try_from(other).ok(),
    }
}
