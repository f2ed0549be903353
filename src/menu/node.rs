//! A single menu: titled, ordered entries plus the selection cursor.
//!
//! The cursor indexes the *selectable* subsequence of the entries, never the
//! raw list. It is clamped at both ends and is `None` exactly when no entry
//! is selectable.

use std::collections::HashSet;

use crate::error::{MenuError, MenuResult};

use super::entry::{Action, Entry, EntryId, EntryKind};
use super::tree::MenuId;

/// Indent used when a menu does not set its own
pub const DEFAULT_MARGIN: u16 = 2;

/// Result of activating the selected entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Nothing beyond local state changed
    Stay,
    /// Enter the given menu
    Descend(MenuId),
    /// Return to the parent menu
    Ascend,
    /// Stop navigation with an exit code
    Exit(u8),
    /// Start editing the value of an input entry
    Edit(EntryId),
    /// A callback must be run with tree access; resolved by `MenuTree::activate`
    Invoke(EntryId),
}

#[derive(Debug)]
pub struct Menu {
    pub title: String,
    pub margin: u16,
    entries: Vec<Entry>,
    parent: Option<MenuId>,
    selected: Option<usize>,
}

impl Menu {
    /// Create an empty menu
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            margin: DEFAULT_MARGIN,
            entries: Vec::new(),
            parent: None,
            selected: None,
        }
    }

    /// Create a menu from `entries`, rejecting duplicate identities
    pub fn try_from_entries(
        title: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> MenuResult<Self> {
        let entries: Vec<Entry> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(MenuError::DuplicateIdentity { id: entry.id });
            }
        }

        let mut menu = Self::new(title);
        menu.entries = entries;
        menu.reset_selection();
        Ok(menu)
    }

    /// Create a menu from `entries`, falling back to an empty menu when two
    /// entries share an identity
    pub fn from_entries(title: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        let title = title.into();
        match Self::try_from_entries(title.clone(), entries) {
            Ok(menu) => menu,
            Err(err) => {
                tracing::warn!(menu = %title, "{err}; menu left empty");
                Self::new(title)
            }
        }
    }

    pub fn with_margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Parent menu, if this menu has been entered from another one
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<MenuId>) {
        self.parent = parent;
    }

    /// Append an entry. Fails without touching the menu if the id is taken.
    pub fn add_entry(&mut self, entry: Entry) -> MenuResult<()> {
        if self.entry(entry.id).is_some() {
            tracing::debug!(menu = %self.title, id = %entry.id, "rejected duplicate entry");
            return Err(MenuError::DuplicateIdentity { id: entry.id });
        }

        let selectable = entry.is_selectable();
        self.entries.push(entry);
        if selectable && self.selected.is_none() {
            self.selected = Some(0);
        }
        Ok(())
    }

    /// Remove and return the entry with `id`.
    ///
    /// If it was selected, selection moves to the first remaining selectable
    /// entry; otherwise the same entry stays selected.
    pub fn remove_entry(&mut self, id: EntryId) -> MenuResult<Entry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(MenuError::UnknownEntry { id })?;

        let selected_id = self.selected_entry().map(|e| e.id);
        let removed = self.entries.remove(pos);

        match selected_id {
            Some(sel) if sel != id => self.select_id(sel),
            _ => self.reset_selection(),
        }
        Ok(removed)
    }

    /// Swap in `entry` for the entry with the same id, keeping its position.
    ///
    /// The selection follows the previously selected entry while it is still
    /// selectable and is clamped otherwise.
    pub fn replace_entry(&mut self, entry: Entry) -> MenuResult<Entry> {
        let id = entry.id;
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(MenuError::UnknownEntry { id })?;

        let selected_id = self.selected_entry().map(|e| e.id);
        let old = std::mem::replace(&mut self.entries[pos], entry);

        match selected_id {
            Some(sel) if self.entry(sel).is_some_and(Entry::is_selectable) => self.select_id(sel),
            _ => self.clamp_selection(),
        }
        Ok(old)
    }

    /// Entries that navigation can land on, in display order
    pub fn selectable_entries(&self) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.is_selectable()).collect()
    }

    fn selectable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_selectable()).count()
    }

    /// Index of the selection within `selectable_entries()`
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Position of the selected entry in the raw entry list
    pub fn selected_position(&self) -> Option<usize> {
        let index = self.selected?;
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_selectable())
            .nth(index)
            .map(|(pos, _)| pos)
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_position().map(|pos| &self.entries[pos])
    }

    pub fn selected_entry_mut(&mut self) -> Option<&mut Entry> {
        let pos = self.selected_position()?;
        self.entries.get_mut(pos)
    }

    pub fn is_selected(&self, id: EntryId) -> bool {
        self.selected_entry().is_some_and(|e| e.id == id)
    }

    /// Move the selection one selectable entry up. Returns whether it moved.
    pub fn move_selection_up(&mut self) -> bool {
        match self.selected {
            Some(index) if index > 0 => {
                self.selected = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the selection one selectable entry down. Returns whether it moved.
    pub fn move_selection_down(&mut self) -> bool {
        match self.selected {
            Some(index) if index + 1 < self.selectable_count() => {
                self.selected = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Select the first selectable entry, or nothing
    pub fn reset_selection(&mut self) {
        self.selected = if self.selectable_count() > 0 {
            Some(0)
        } else {
            None
        };
    }

    /// Re-establish the selection invariant after entries were edited in place
    pub fn clamp_selection(&mut self) {
        let count = self.selectable_count();
        self.selected = match (self.selected, count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), _) => Some(index.min(count - 1)),
        };
    }

    fn select_id(&mut self, id: EntryId) {
        self.selected = self
            .entries
            .iter()
            .filter(|e| e.is_selectable())
            .position(|e| e.id == id);
        if self.selected.is_none() {
            self.reset_selection();
        }
    }

    /// Activate the selected entry.
    ///
    /// Checkboxes toggle before any bound callback runs. Returns
    /// `Activation::Stay` when nothing is selected.
    pub fn activate_selected(&mut self) -> Activation {
        let Some(entry) = self.selected_entry_mut() else {
            return Activation::Stay;
        };

        if let EntryKind::Checkbox { checked, .. } = &mut entry.kind {
            *checked = !*checked;
        }
        if let EntryKind::Input { .. } = entry.kind {
            return Activation::Edit(entry.id);
        }

        match &entry.action {
            None => Activation::Stay,
            Some(Action::Submenu(target)) => Activation::Descend(*target),
            Some(Action::Exit(code)) => Activation::Exit(*code),
            Some(Action::Callback(_)) => Activation::Invoke(entry.id),
        }
    }

    /// Re-order entries by identity, keeping the same entry selected
    pub fn sort_by_id(&mut self, descending: bool) {
        let selected_id = self.selected_entry().map(|e| e.id);
        if descending {
            self.entries.sort_by(|a, b| b.id.cmp(&a.id));
        } else {
            self.entries.sort_by_key(|e| e.id);
        }
        if let Some(id) = selected_id {
            self.select_id(id);
        }
    }
}
