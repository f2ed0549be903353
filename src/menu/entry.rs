//! Menu entries and the scalar values they edit.

use std::fmt;

use crate::error::{MenuError, MenuResult};

use super::tree::{ActionContext, MenuId};

/// Identity of an entry, unique within its menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A typed scalar held by an input entry.
///
/// Edits keep the type of the current value: a `Int` entry only ever
/// accepts text that parses as an `i64`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Text(String),
}

impl Value {
    /// Name of the value type, used in parse errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::UInt(_) => "unsigned integer",
            Value::Float(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Char(_) => "character",
            Value::Text(_) => "text",
        }
    }

    /// Parse `input` as a value of the same type as `self`.
    ///
    /// Surrounding whitespace is ignored for everything except text.
    pub fn parse_same_type(&self, input: &str) -> MenuResult<Value> {
        let trimmed = input.trim();
        let parsed = match self {
            Value::Int(_) => trimmed.parse().ok().map(Value::Int),
            Value::UInt(_) => trimmed.parse().ok().map(Value::UInt),
            Value::Float(_) => trimmed.parse().ok().map(Value::Float),
            Value::Bool(_) => parse_bool(trimmed).map(Value::Bool),
            Value::Char(_) => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Value::Char(c)),
                    _ => None,
                }
            }
            Value::Text(_) => Some(Value::Text(input.to_string())),
        };

        parsed.ok_or_else(|| MenuError::ValueParse {
            input: input.to_string(),
            expected: self.type_name(),
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// Callback run when an entry is activated
pub type Callback = Box<dyn FnMut(&mut ActionContext<'_>)>;

/// What activating an entry does
pub enum Action {
    /// Enter another menu; its parent link is set to the menu left behind
    Submenu(MenuId),
    /// Stop the navigator and report `code` to the caller
    Exit(u8),
    /// Run arbitrary code against the menu tree
    Callback(Callback),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Submenu(id) => f.debug_tuple("Submenu").field(id).finish(),
            Action::Exit(code) => f.debug_tuple("Exit").field(code).finish(),
            Action::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Kind-specific part of an entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// Plain line, never selectable
    Text,
    /// Runs the bound action
    Action,
    /// Toggles on activation. `group` is metadata only: entries sharing a
    /// group are not cleared automatically.
    Checkbox { checked: bool, group: u32 },
    /// Opens the inline editor for `value`
    Input { value: Value },
}

/// One line item of a menu.
///
/// Identity and kind are fixed once the entry is built; only the state a
/// kind carries (checked flag, value) changes in place. Swapping the kind
/// goes through `Menu::replace_entry` so the selection stays valid.
#[derive(Debug)]
pub struct Entry {
    pub(super) id: EntryId,
    pub label: String,
    pub(super) kind: EntryKind,
    pub action: Option<Action>,
    /// Terminal rows occupied by this entry
    pub height: u16,
}

impl Entry {
    fn new(id: impl Into<EntryId>, label: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            action: None,
            height: 1,
        }
    }

    /// Create a non-selectable line of text
    pub fn text(id: impl Into<EntryId>, label: impl Into<String>) -> Self {
        Self::new(id, label, EntryKind::Text)
    }

    /// Create an entry running `callback` on activation
    pub fn action(
        id: impl Into<EntryId>,
        label: impl Into<String>,
        callback: impl FnMut(&mut ActionContext<'_>) + 'static,
    ) -> Self {
        Self::new(id, label, EntryKind::Action).on_activate(callback)
    }

    /// Create an entry descending into `submenu`
    pub fn submenu(id: impl Into<EntryId>, label: impl Into<String>, submenu: MenuId) -> Self {
        let mut entry = Self::new(id, label, EntryKind::Action);
        entry.action = Some(Action::Submenu(submenu));
        entry
    }

    /// Create an entry that stops the navigator with `code`
    pub fn exit(id: impl Into<EntryId>, label: impl Into<String>, code: u8) -> Self {
        let mut entry = Self::new(id, label, EntryKind::Action);
        entry.action = Some(Action::Exit(code));
        entry
    }

    /// Create an unchecked checkbox. `group` 0 means ungrouped.
    pub fn checkbox(id: impl Into<EntryId>, label: impl Into<String>, group: u32) -> Self {
        Self::new(
            id,
            label,
            EntryKind::Checkbox {
                checked: false,
                group,
            },
        )
    }

    /// Create an editable value entry
    pub fn input(id: impl Into<EntryId>, label: impl Into<String>, value: Value) -> Self {
        Self::new(id, label, EntryKind::Input { value })
    }

    /// Bind a callback, replacing any existing action
    pub fn on_activate(mut self, callback: impl FnMut(&mut ActionContext<'_>) + 'static) -> Self {
        self.action = Some(Action::Callback(Box::new(callback)));
        self
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height.max(1);
        self
    }

    /// Set the initial state of a checkbox; ignored for other kinds
    pub fn with_checked(mut self, value: bool) -> Self {
        if let EntryKind::Checkbox { checked, .. } = &mut self.kind {
            *checked = value;
        }
        self
    }

    /// Identity within the owning menu. Read-only from outside the crate:
    ///
    /// ```compile_fail
    /// let mut entry = termenu::Entry::text(1, "a");
    /// entry.id = termenu::EntryId(2);
    /// ```
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// ```compile_fail
    /// let mut entry = termenu::Entry::exit(1, "a", 0);
    /// entry.kind = termenu::EntryKind::Text;
    /// ```
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Whether navigation can land on this entry
    pub fn is_selectable(&self) -> bool {
        !matches!(self.kind, EntryKind::Text)
    }

    pub fn is_checked(&self) -> Option<bool> {
        match self.kind {
            EntryKind::Checkbox { checked, .. } => Some(checked),
            _ => None,
        }
    }

    pub fn set_checked(&mut self, value: bool) {
        if let EntryKind::Checkbox { checked, .. } = &mut self.kind {
            *checked = value;
        }
    }

    pub fn group(&self) -> Option<u32> {
        match self.kind {
            EntryKind::Checkbox { group, .. } => Some(group),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match &self.kind {
            EntryKind::Input { value } => Some(value),
            _ => None,
        }
    }

    /// Replace the value of an input entry with text parsed as the same type.
    ///
    /// On failure the current value is kept.
    pub fn set_value_from_str(&mut self, input: &str) -> MenuResult<()> {
        match &mut self.kind {
            EntryKind::Input { value } => {
                *value = value.parse_same_type(input)?;
                Ok(())
            }
            _ => Err(MenuError::ValueParse {
                input: input.to_string(),
                expected: "an input entry",
            }),
        }
    }

    /// Text drawn for this entry, without margin
    pub fn display_text(&self, unicode: bool) -> String {
        use crate::render::glyphs;

        match &self.kind {
            EntryKind::Text | EntryKind::Action => self.label.clone(),
            EntryKind::Checkbox { checked, .. } => {
                format!("{} {}", glyphs::checkbox(*checked, unicode), self.label)
            }
            EntryKind::Input { value } => format!("{}: {}", self.label, value),
        }
    }
}
