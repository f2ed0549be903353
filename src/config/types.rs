//! Configuration type definitions

use std::path::Path;

use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};

use crate::error::MenuResult;
use crate::menu::DEFAULT_MARGIN;
use crate::navigator::KeyBindings;
use crate::render::{parse_color, ColorPair, RenderStyle};

use super::loader;

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Indent applied to entries of menus built by the application
    #[serde(default = "default_margin")]
    pub margin: u16,

    /// Blank rows between the title and the first entry
    #[serde(default = "default_title_gap")]
    pub title_gap: u16,

    #[serde(default = "default_true")]
    pub help_line: bool,

    /// `None` follows the terminal's locale
    #[serde(default)]
    pub unicode: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            title_gap: default_title_gap(),
            help_line: true,
            unicode: None,
        }
    }
}

fn default_margin() -> u16 {
    DEFAULT_MARGIN
}

fn default_title_gap() -> u16 {
    1
}

fn default_true() -> bool {
    true
}

/// Colour configuration, crossterm colour names or `reset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_color")]
    pub foreground: String,

    #[serde(default = "default_color")]
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            foreground: default_color(),
            background: default_color(),
        }
    }
}

fn default_color() -> String {
    "reset".to_string()
}

/// Modifier that turns a back key into a hard exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Control,
    Alt,
    Shift,
}

impl ModifierKey {
    pub fn as_modifiers(self) -> KeyModifiers {
        match self {
            ModifierKey::Control => KeyModifiers::CONTROL,
            ModifierKey::Alt => KeyModifiers::ALT,
            ModifierKey::Shift => KeyModifiers::SHIFT,
        }
    }
}

/// Key configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeysConfig {
    #[serde(default)]
    pub vim: bool,

    #[serde(default)]
    pub hard_exit: ModifierKey,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub colors: ColorConfig,

    #[serde(default)]
    pub keys: KeysConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> MenuResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Colours for normal text. Unknown names fall back to the terminal default.
    pub fn color_pair(&self) -> ColorPair {
        let resolve = |name: &str| {
            parse_color(name).unwrap_or_else(|| {
                tracing::warn!(color = name, "unknown colour name, using terminal default");
                crossterm::style::Color::Reset
            })
        };
        ColorPair::new(
            resolve(&self.colors.foreground),
            resolve(&self.colors.background),
        )
    }

    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings {
            vim: self.keys.vim,
            hard_exit: self.keys.hard_exit.as_modifiers(),
        }
    }

    /// Renderer settings; `terminal_unicode` decides when the file leaves it open
    pub fn render_style(&self, terminal_unicode: bool) -> RenderStyle {
        RenderStyle {
            colors: self.color_pair(),
            title_gap: self.display.title_gap,
            help_line: self.display.help_line,
            unicode: self.display.unicode.unwrap_or(terminal_unicode),
            hard_exit: self.keys.hard_exit.as_modifiers(),
        }
    }
}
