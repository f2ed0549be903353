//! termenu - keyboard-driven hierarchical menus for character terminals
//!
//! Applications build a `MenuTree` of `Menu`s holding `Entry`s, hand it to a
//! `Navigator` together with a terminal `Surface`, and call `run()`. The
//! navigator interprets arrow/enter/escape keys, runs entry actions and keeps
//! the screen in step with the selection.

pub mod config;
pub mod error;
pub mod menu;
pub mod navigator;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{
    Action, ActionContext, Activation, Entry, EntryId, EntryKind, Menu, MenuId, MenuTree, Value,
};
pub use navigator::{ExitReason, KeyBindings, NavAction, NavState, Navigator};
pub use render::{ColorPair, RenderStyle, Renderer};
pub use terminal::{ClearRegion, ConsoleSurface, LineRead, ScriptedSurface, Surface};
