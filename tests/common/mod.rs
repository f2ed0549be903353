//! Shared fixtures for integration tests.

#![allow(dead_code)]

use crossterm::event::KeyCode;
use termenu::{Entry, Menu, MenuId, MenuTree, Navigator, ScriptedSurface, Value};

pub struct Fixture {
    pub tree: MenuTree,
    pub root: MenuId,
    pub sub: MenuId,
}

/// Root: [Text("hi"), Action("Go" -> Sub), Checkbox("Flag")]
/// Sub:  [Action("Back-trigger", noop), Input("Number", 12345)]
pub fn root_and_sub() -> Fixture {
    let mut tree = MenuTree::new();
    let sub = tree.insert(Menu::from_entries(
        "Sub",
        [
            Entry::action(1, "Back-trigger", |_| {}),
            Entry::input(2, "Number", Value::Int(12345)),
        ],
    ));
    let root = tree.insert(Menu::from_entries(
        "Root",
        [
            Entry::text(1, "hi"),
            Entry::submenu(2, "Go", sub),
            Entry::checkbox(3, "Flag", 0),
        ],
    ));
    Fixture { tree, root, sub }
}

pub fn navigator(fixture: Fixture, keys: &[KeyCode]) -> Navigator<ScriptedSurface> {
    let surface = ScriptedSurface::new(72, 12).with_keys(keys.iter().copied());
    Navigator::new(fixture.tree, fixture.root, surface).expect("root exists")
}

/// Start the navigator and feed it every scripted key
pub fn drive(nav: &mut Navigator<ScriptedSurface>) {
    nav.start().unwrap();
    while nav.surface().pending_keys() > 0 {
        nav.step().unwrap();
    }
}
