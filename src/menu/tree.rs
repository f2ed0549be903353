//! Arena of menus linked by parent handles.
//!
//! Menus never own each other: a submenu entry holds a `MenuId` and the
//! parent link is a plain handle set when the submenu is entered. Handles
//! are only ever appended, so a `MenuId` stays valid for the tree's lifetime.

use std::fmt;

use crate::error::{MenuError, MenuResult};

use super::entry::{Action, EntryId};
use super::node::{Activation, Menu};

/// Handle to a menu inside a `MenuTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub usize);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct MenuTree {
    menus: Vec<Menu>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `menu` into the arena and return its handle
    pub fn insert(&mut self, menu: Menu) -> MenuId {
        self.menus.push(menu);
        MenuId(self.menus.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn contains(&self, id: MenuId) -> bool {
        id.0 < self.menus.len()
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.0)
    }

    pub fn get_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id.0)
    }

    pub fn menu(&self, id: MenuId) -> MenuResult<&Menu> {
        self.get(id).ok_or(MenuError::UnknownMenu { id })
    }

    pub fn menu_mut(&mut self, id: MenuId) -> MenuResult<&mut Menu> {
        self.get_mut(id).ok_or(MenuError::UnknownMenu { id })
    }

    pub fn parent_of(&self, id: MenuId) -> Option<MenuId> {
        self.get(id).and_then(Menu::parent)
    }

    /// Link `child` under `parent`, replacing any previous parent.
    ///
    /// Rejected when `child` is `parent` itself or one of its ancestors.
    pub fn attach(&mut self, child: MenuId, parent: MenuId) -> MenuResult<()> {
        self.menu(child)?;
        self.menu(parent)?;
        if self.find_ancestor(parent, |id, _| id == child).is_some() {
            return Err(MenuError::CyclicParent { child, parent });
        }
        self.menus[child.0].set_parent(Some(parent));
        Ok(())
    }

    /// Clear the parent link of `id`, making it a root
    pub fn detach(&mut self, id: MenuId) -> MenuResult<()> {
        self.menu_mut(id)?.set_parent(None);
        Ok(())
    }

    /// Walk from `start` up through parent links and return the first menu
    /// (starting with `start` itself) for which `pred` holds.
    pub fn find_ancestor(
        &self,
        start: MenuId,
        mut pred: impl FnMut(MenuId, &Menu) -> bool,
    ) -> Option<MenuId> {
        let mut current = start;
        // A tree can be no deeper than its node count.
        for _ in 0..self.menus.len() {
            let menu = self.get(current)?;
            if pred(current, menu) {
                return Some(current);
            }
            current = menu.parent()?;
        }
        None
    }

    /// Topmost menu reachable from `id` through parent links
    pub fn root_of(&self, id: MenuId) -> MenuId {
        self.find_ancestor(id, |_, menu| menu.parent().is_none())
            .unwrap_or(id)
    }

    /// Number of parent links between `id` and its root
    pub fn depth(&self, id: MenuId) -> usize {
        let mut depth = 0;
        self.find_ancestor(id, |_, menu| {
            if menu.parent().is_none() {
                true
            } else {
                depth += 1;
                false
            }
        });
        depth
    }

    /// Activate the selected entry of menu `id`, running its callback if it
    /// has one. Never returns `Activation::Invoke`.
    pub fn activate(&mut self, id: MenuId) -> MenuResult<Activation> {
        let activation = self.menu_mut(id)?.activate_selected();
        let Activation::Invoke(entry_id) = activation else {
            return Ok(activation);
        };

        let taken = self.menus[id.0]
            .entry_mut(entry_id)
            .and_then(|e| e.action.take());
        let Some(Action::Callback(mut callback)) = taken else {
            return Ok(Activation::Stay);
        };

        let mut ctx = ActionContext {
            tree: &mut *self,
            menu: id,
            entry: entry_id,
            request: None,
        };
        callback(&mut ctx);
        let request = ctx.request;

        let menu = &mut self.menus[id.0];
        if let Some(entry) = menu.entry_mut(entry_id) {
            // The callback may have rebound its own action.
            if entry.action.is_none() {
                entry.action = Some(Action::Callback(callback));
            }
        }
        menu.clamp_selection();

        tracing::trace!(menu = %id, entry = %entry_id, ?request, "callback finished");
        Ok(request.unwrap_or(Activation::Stay))
    }
}

/// Access handed to entry callbacks while they run
pub struct ActionContext<'a> {
    tree: &'a mut MenuTree,
    menu: MenuId,
    entry: EntryId,
    request: Option<Activation>,
}

impl ActionContext<'_> {
    /// Menu the activated entry belongs to
    pub fn menu_id(&self) -> MenuId {
        self.menu
    }

    /// The activated entry
    pub fn entry_id(&self) -> EntryId {
        self.entry
    }

    pub fn tree(&self) -> &MenuTree {
        &*self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut *self.tree
    }

    /// The menu the activated entry belongs to
    pub fn menu(&mut self) -> &mut Menu {
        &mut self.tree.menus[self.menu.0]
    }

    /// Root of the tree the current menu hangs from
    pub fn root(&self) -> MenuId {
        self.tree.root_of(self.menu)
    }

    /// Enter `target` once the callback returns
    pub fn descend(&mut self, target: MenuId) {
        self.request = Some(Activation::Descend(target));
    }

    /// Return to the parent menu once the callback returns
    pub fn ascend(&mut self) {
        self.request = Some(Activation::Ascend);
    }

    /// Stop navigation once the callback returns
    pub fn exit(&mut self, code: u8) {
        self.request = Some(Activation::Exit(code));
    }

    /// Check the activated checkbox and uncheck every other checkbox in the
    /// same non-zero group. Entries only behave as a radio set when their
    /// callback calls this.
    pub fn check_exclusively(&mut self) {
        let entry_id = self.entry;
        let menu = self.menu();
        let Some(group) = menu.entry(entry_id).and_then(|e| e.group()) else {
            return;
        };
        let ids: Vec<EntryId> = menu
            .entries()
            .iter()
            .filter(|e| group != 0 && e.group() == Some(group))
            .map(|e| e.id)
            .collect();
        for id in ids {
            if let Some(entry) = menu.entry_mut(id) {
                entry.set_checked(false);
            }
        }
        if let Some(entry) = menu.entry_mut(entry_id) {
            entry.set_checked(true);
        }
    }
}
