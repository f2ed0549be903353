//! Navigation state machine.
//!
//! The navigator owns the menu tree and a surface, reads one key at a time
//! and redraws after every state change:
//!
//! ```text
//! Idle --start--> Active(menu) --Edit--> Editing(menu, entry) --line--> Active(menu)
//!                    |
//!                    +--back at root / hard exit / exit action--> Terminated
//! ```

mod input;

use std::io;

use crate::error::{MenuError, MenuResult};
use crate::menu::{Activation, EntryId, MenuId, MenuTree};
use crate::render::Renderer;
use crate::terminal::{ClearRegion, Surface};

pub use input::{key_to_action, KeyBindings, NavAction};

/// Why the navigator stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Back key pressed in a menu with no parent
    RootBack,
    /// Back key pressed with the hard-exit modifier held
    HardExit,
    /// An exit action ran
    Requested(u8),
}

impl ExitReason {
    /// Process exit code the host application may use
    pub fn code(&self) -> u8 {
        match self {
            ExitReason::RootBack | ExitReason::HardExit => 0,
            ExitReason::Requested(code) => *code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Active(MenuId),
    Editing { menu: MenuId, entry: EntryId },
    Terminated(ExitReason),
}

pub struct Navigator<S: Surface> {
    tree: MenuTree,
    root: MenuId,
    surface: S,
    renderer: Renderer,
    keys: KeyBindings,
    state: NavState,
}

impl<S: Surface> Navigator<S> {
    /// Create a navigator over `tree`, starting at `root`
    pub fn new(tree: MenuTree, root: MenuId, surface: S) -> MenuResult<Self> {
        tree.menu(root)?;
        Ok(Self {
            tree,
            root,
            surface,
            renderer: Renderer::default(),
            keys: KeyBindings::default(),
            state: NavState::Idle,
        })
    }

    /// Use `renderer`; its quit hint follows the current key bindings
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self.renderer.set_hard_exit(self.keys.hard_exit);
        self
    }

    pub fn with_key_bindings(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self.renderer.set_hard_exit(keys.hard_exit);
        self
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Menu currently shown, if the loop has started and not ended
    pub fn current(&self) -> Option<MenuId> {
        match self.state {
            NavState::Active(menu) | NavState::Editing { menu, .. } => Some(menu),
            NavState::Idle | NavState::Terminated(_) => None,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut self.tree
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (MenuTree, S) {
        (self.tree, self.surface)
    }

    /// Run until the user leaves the root menu or an exit action fires.
    ///
    /// The terminal is restored before returning, also when a read or
    /// write fails.
    pub fn run(&mut self) -> MenuResult<ExitReason> {
        let result = self.start().and_then(|()| self.drive());
        let restored = self.finish();
        let reason = result?;
        restored?;
        Ok(reason)
    }

    fn drive(&mut self) -> MenuResult<ExitReason> {
        loop {
            if let NavState::Terminated(reason) = self.state {
                return Ok(reason);
            }
            self.step()?;
        }
    }

    /// Take over the surface and show the root menu
    pub fn start(&mut self) -> MenuResult<()> {
        if self.state != NavState::Idle {
            return Ok(());
        }
        self.surface.enter()?;
        self.surface.set_cursor_visible(false)?;
        self.enter_menu(self.root)?;
        tracing::debug!(root = %self.root, "navigator started");
        self.renderer.refresh(&mut self.surface, self.tree.menu(self.root)?)?;
        Ok(())
    }

    /// Process one unit of input: a key while active, a line while editing
    pub fn step(&mut self) -> MenuResult<()> {
        match self.state {
            NavState::Idle => self.start(),
            NavState::Active(_) => {
                let key = self.surface.read_key()?;
                if let Some(action) = key_to_action(key, &self.keys) {
                    tracing::trace!(?key, ?action, "key");
                    self.handle_action(action)?;
                }
                Ok(())
            }
            NavState::Editing { menu, entry } => self.edit_value(menu, entry),
            NavState::Terminated(_) => Ok(()),
        }
    }

    /// Apply a navigation action to the current menu
    pub fn handle_action(&mut self, action: NavAction) -> MenuResult<()> {
        let NavState::Active(current) = self.state else {
            return Ok(());
        };

        match action {
            NavAction::Up => {
                self.tree.menu_mut(current)?.move_selection_up();
                self.render()
            }
            NavAction::Down => {
                self.tree.menu_mut(current)?.move_selection_down();
                self.render()
            }
            NavAction::Activate => {
                let activation = self.tree.activate(current)?;
                self.apply(current, activation)
            }
            NavAction::Back { hard: true } => {
                self.terminate(ExitReason::HardExit);
                Ok(())
            }
            NavAction::Back { hard: false } => self.ascend(current),
            NavAction::Refresh => {
                let menu = self.tree.menu(current)?;
                self.renderer.refresh(&mut self.surface, menu)?;
                Ok(())
            }
            NavAction::Stray => {
                self.renderer.render_status_line(&mut self.surface)?;
                Ok(())
            }
        }
    }

    fn apply(&mut self, current: MenuId, activation: Activation) -> MenuResult<()> {
        match activation {
            Activation::Stay | Activation::Invoke(_) => self.render(),
            Activation::Descend(target) => {
                match self.tree.attach(target, current) {
                    Ok(()) => self.enter_menu(target)?,
                    Err(err) => self.alert(&err)?,
                }
                self.render()
            }
            Activation::Ascend => self.ascend(current),
            Activation::Exit(code) => {
                self.terminate(ExitReason::Requested(code));
                Ok(())
            }
            Activation::Edit(entry) => {
                tracing::debug!(menu = %current, entry = %entry, "editing value");
                self.state = NavState::Editing {
                    menu: current,
                    entry,
                };
                Ok(())
            }
        }
    }

    fn ascend(&mut self, current: MenuId) -> MenuResult<()> {
        match self.tree.parent_of(current) {
            Some(parent) => {
                self.enter_menu(parent)?;
                self.render()
            }
            None => {
                self.terminate(ExitReason::RootBack);
                Ok(())
            }
        }
    }

    /// Make `id` the current menu with its first selectable entry selected
    fn enter_menu(&mut self, id: MenuId) -> MenuResult<()> {
        self.tree.menu_mut(id)?.reset_selection();
        tracing::debug!(menu = %id, depth = self.tree.depth(id), "entered menu");
        self.state = NavState::Active(id);
        Ok(())
    }

    fn terminate(&mut self, reason: ExitReason) {
        tracing::debug!(?reason, "navigator terminated");
        self.state = NavState::Terminated(reason);
    }

    fn alert(&mut self, err: &MenuError) -> io::Result<()> {
        tracing::warn!("{err}");
        self.surface.beep()
    }

    /// Read a new value for `entry` in place, with reversed colours
    fn edit_value(&mut self, menu: MenuId, entry: EntryId) -> MenuResult<()> {
        self.state = NavState::Active(menu);
        let (_, height) = self.surface.viewport_size()?;
        let origin = self.renderer.value_origin(self.tree.menu(menu)?, entry, height);
        let Some((col, row)) = origin else {
            tracing::debug!(entry = %entry, "no room to edit value");
            return self.render();
        };

        let normal = self.renderer.style().colors;
        self.surface.set_colors(normal)?;
        self.surface.set_cursor(col, row)?;
        self.surface.clear(ClearRegion::UntilNewLine)?;
        self.surface.set_colors(normal.reversed())?;
        self.surface.set_cursor_visible(true)?;
        self.surface.flush()?;

        let line = self.surface.read_line();
        self.surface.set_cursor_visible(false)?;
        self.surface.set_colors(normal)?;

        match line? {
            None => tracing::debug!(entry = %entry, "edit cancelled"),
            Some(text) => {
                let target = self.tree.menu_mut(menu)?.entry_mut(entry);
                if let Some(target) = target {
                    if let Err(err) = target.set_value_from_str(&text) {
                        self.alert(&err)?;
                    }
                }
            }
        }
        self.render()
    }

    fn render(&mut self) -> MenuResult<()> {
        if let Some(current) = self.current() {
            let menu = self.tree.menu(current)?;
            self.renderer.render(&mut self.surface, menu)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> MenuResult<()> {
        self.surface.set_colors(self.renderer.style().colors)?;
        self.surface.clear(ClearRegion::All)?;
        self.surface.set_cursor(0, 0)?;
        self.surface.set_cursor_visible(true)?;
        self.surface.leave()?;
        Ok(())
    }
}
