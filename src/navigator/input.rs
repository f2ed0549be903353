//! Keyboard mapping for the navigator.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the navigator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move the selection up
    Up,
    /// Move the selection down
    Down,
    /// Activate the selected entry
    Activate,
    /// Go to the parent menu; `hard` leaves the navigator from any depth
    Back { hard: bool },
    /// Clear and redraw the whole frame
    Refresh,
    /// Unbound key
    Stray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Accept h/j/k/l as arrow keys
    pub vim: bool,
    /// Modifier that turns a back key into a hard exit
    pub hard_exit: KeyModifiers,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            vim: false,
            hard_exit: KeyModifiers::CONTROL,
        }
    }
}

/// Convert a keyboard event to a NavAction. Key releases map to `None`.
pub fn key_to_action(key: KeyEvent, bindings: &KeyBindings) -> Option<NavAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let hard = !bindings.hard_exit.is_empty() && key.modifiers.contains(bindings.hard_exit);

    let action = match key.code {
        KeyCode::Up => NavAction::Up,
        KeyCode::Down => NavAction::Down,
        KeyCode::Enter | KeyCode::Right => NavAction::Activate,
        KeyCode::Left | KeyCode::Esc | KeyCode::Backspace => NavAction::Back { hard },
        KeyCode::F(5) => NavAction::Refresh,
        // Raw mode swallows SIGINT, so Ctrl-C is read as a key.
        KeyCode::Char('c') if ctrl => NavAction::Back { hard: true },
        KeyCode::Char('l') if ctrl => NavAction::Refresh,
        KeyCode::Char('k') if bindings.vim => NavAction::Up,
        KeyCode::Char('j') if bindings.vim => NavAction::Down,
        KeyCode::Char('l') if bindings.vim => NavAction::Activate,
        KeyCode::Char('h') if bindings.vim => NavAction::Back { hard },
        _ => NavAction::Stray,
    };
    Some(action)
}
