//! Glyphs drawn by the renderer, with ASCII fallbacks.

use crossterm::event::KeyModifiers;

pub mod icons {
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const MOVE: &str = "↑↓ move";
    pub const SELECT: &str = "↵/→ select";
    pub const BACK: &str = "←/Esc back";
    pub const BACK_KEY: &str = "←";
}

pub mod icons_ascii {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const MOVE: &str = "Up/Down move";
    pub const SELECT: &str = "Enter select";
    pub const BACK: &str = "Esc back";
    pub const BACK_KEY: &str = "Esc";
}

const REFRESH: &str = "F5 redraw";
const GAP: &str = "   ";

pub fn checkbox(checked: bool, unicode: bool) -> &'static str {
    match (checked, unicode) {
        (true, true) => icons::CHECKED,
        (false, true) => icons::UNCHECKED,
        (true, false) => icons_ascii::CHECKED,
        (false, false) => icons_ascii::UNCHECKED,
    }
}

/// `Ctrl`, `Alt+Shift`, ... for the modifiers in `mods`
pub fn modifier_label(mods: KeyModifiers) -> String {
    let names = [
        (KeyModifiers::CONTROL, "Ctrl"),
        (KeyModifiers::ALT, "Alt"),
        (KeyModifiers::SHIFT, "Shift"),
    ];
    names
        .iter()
        .filter(|(m, _)| mods.contains(*m))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join("+")
}

/// Key hints for the status line. The quit hint names `hard_exit`; it is left
/// out when no modifier is bound.
pub fn help_line(unicode: bool, hard_exit: KeyModifiers) -> String {
    let (moves, select, back, back_key) = if unicode {
        (icons::MOVE, icons::SELECT, icons::BACK, icons::BACK_KEY)
    } else {
        (
            icons_ascii::MOVE,
            icons_ascii::SELECT,
            icons_ascii::BACK,
            icons_ascii::BACK_KEY,
        )
    };

    let mut parts = vec![moves.to_string(), select.to_string(), back.to_string()];
    let modifier = modifier_label(hard_exit);
    if !modifier.is_empty() {
        parts.push(format!("{modifier}+{back_key} quit"));
    }
    parts.push(REFRESH.to_string());
    parts.join(GAP)
}
