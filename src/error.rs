//! Error types for termenu
//!
//! Uses `thiserror` for library errors. Everything except `Io` is recovered
//! locally by the navigator; only terminal failures escape `Navigator::run`.

use std::path::PathBuf;
use thiserror::Error;

use crate::menu::{EntryId, MenuId};

/// Result type alias for termenu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// An entry with this identity already lives in the menu
    #[error("duplicate entry id {id}")]
    DuplicateIdentity { id: EntryId },

    /// No entry with this identity lives in the menu
    #[error("no entry with id {id}")]
    UnknownEntry { id: EntryId },

    /// Menu handle does not belong to this tree
    #[error("no menu with id {id}")]
    UnknownMenu { id: MenuId },

    /// Linking `child` under `parent` would turn the tree into a cycle
    #[error("menu {child} cannot be attached under {parent}: it is an ancestor")]
    CyclicParent { child: MenuId, parent: MenuId },

    /// Edited text does not convert to the entry's value type
    #[error("cannot read '{input}' as {expected}")]
    ValueParse { input: String, expected: &'static str },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Terminal IO error
    #[error("terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}
