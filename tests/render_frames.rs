//! Snapshot tests for rendered frames.
//!
//! Frames are captured from a `ScriptedSurface` so the layout can be
//! reviewed as plain text.

use insta::assert_snapshot;
use termenu::{Entry, Menu, MenuTree, RenderStyle, Renderer, ScriptedSurface, Value};

fn main_menu() -> Menu {
    let mut tree = MenuTree::new();
    let options = tree.insert(Menu::new("Options"));
    Menu::from_entries(
        "Test Menu 1",
        [
            Entry::text(1, "Test text"),
            Entry::checkbox(2, "Random check box", 0).with_checked(true),
            Entry::input(3, "Number", Value::Int(12345)),
            Entry::submenu(4, "Options", options),
            Entry::exit(5, "Quit", 0),
        ],
    )
}

#[test]
fn snapshot_main_menu_ascii() {
    let mut surface = ScriptedSurface::new(72, 10);
    let menu = main_menu();
    Renderer::default().refresh(&mut surface, &menu).unwrap();

    assert_snapshot!("main_menu_ascii", surface.screen());
    assert_eq!(
        surface.highlighted(),
        vec![(3, "  [x] Random check box".to_string())]
    );
}

#[test]
fn snapshot_tall_entries_unicode() {
    let menu = Menu::from_entries(
        "Options",
        [
            Entry::checkbox(1, "Small", 1).with_checked(true),
            Entry::checkbox(2, "Medium", 1),
            Entry::input(3, "Name", Value::Text("guest".into())),
            Entry::text(4, "notes").with_height(2),
            Entry::exit(5, "Done", 0),
        ],
    )
    .with_margin(4);
    let renderer = Renderer::new(RenderStyle {
        unicode: true,
        ..RenderStyle::default()
    });
    let mut surface = ScriptedSurface::new(72, 10);
    renderer.refresh(&mut surface, &menu).unwrap();

    assert_snapshot!("tall_entries_unicode", surface.screen());
}

#[test]
fn snapshot_after_selection_moves() {
    let mut menu = main_menu();
    let renderer = Renderer::default();
    let mut surface = ScriptedSurface::new(72, 10);
    renderer.refresh(&mut surface, &menu).unwrap();
    let first = surface.screen();

    menu.move_selection_down();
    menu.move_selection_down();
    renderer.render(&mut surface, &menu).unwrap();

    // Only the highlight moves; the text is unchanged.
    assert_eq!(surface.screen(), first);
    assert_eq!(surface.highlighted(), vec![(5, "  Options".to_string())]);
}
