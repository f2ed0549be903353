//! Menu data model
//!
//! # Module Structure
//!
//! - `entry` - Entry, its kinds and the scalar values input entries edit
//! - `node` - Menu: ordered entries plus the selection cursor
//! - `tree` - MenuTree arena, parent links and action callbacks

mod entry;
mod node;
mod tree;

pub use entry::{Action, Callback, Entry, EntryId, EntryKind, Value};
pub use node::{Activation, Menu, DEFAULT_MARGIN};
pub use tree::{ActionContext, MenuId, MenuTree};
