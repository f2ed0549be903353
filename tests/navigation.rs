//! End-to-end navigation through scripted key input.

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termenu::{Entry, EntryId, ExitReason, Menu, MenuTree, NavState, Navigator, ScriptedSurface};

use common::{drive, navigator, root_and_sub};

#[test]
fn checkbox_scenario_down_down_enter() {
    let fixture = root_and_sub();
    let root = fixture.root;
    let mut nav = navigator(fixture, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    drive(&mut nav);

    let menu = nav.tree().menu(root).unwrap();
    assert_eq!(menu.entry(EntryId(3)).unwrap().is_checked(), Some(true));
    assert_eq!(menu.selected_index(), Some(1));
    assert_eq!(menu.selected_entry().unwrap().id(), EntryId(3));
    assert!(!menu.entry(EntryId(1)).unwrap().is_selectable());
    assert_eq!(nav.state(), NavState::Active(root));
}

#[test]
fn text_entry_is_never_highlighted() {
    let fixture = root_and_sub();
    let mut nav = navigator(
        fixture,
        &[KeyCode::Up, KeyCode::Up, KeyCode::Down, KeyCode::Up, KeyCode::Up],
    );
    drive(&mut nav);

    let highlighted = nav.surface().highlighted();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].1, "  Go");
}

#[test]
fn down_at_last_entry_does_not_wrap() {
    let fixture = root_and_sub();
    let root = fixture.root;
    let mut nav = navigator(fixture, &[KeyCode::Down, KeyCode::Down, KeyCode::Down]);
    drive(&mut nav);
    assert_eq!(nav.tree().menu(root).unwrap().selected_index(), Some(1));
}

#[test]
fn descend_and_ascend_return_to_same_menu() {
    let fixture = root_and_sub();
    let (root, sub) = (fixture.root, fixture.sub);
    let mut nav = navigator(fixture, &[KeyCode::Right]);
    drive(&mut nav);
    assert_eq!(nav.current(), Some(sub));
    assert_eq!(nav.tree().parent_of(sub), Some(root));

    for back in [KeyCode::Left, KeyCode::Esc, KeyCode::Backspace] {
        nav.surface_mut().push_key(KeyEvent::new(back, KeyModifiers::NONE));
        nav.step().unwrap();
        assert_eq!(nav.current(), Some(root));

        nav.surface_mut().push_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        nav.step().unwrap();
        assert_eq!(nav.current(), Some(sub));
    }
}

#[test]
fn noop_action_keeps_submenu_open() {
    let fixture = root_and_sub();
    let sub = fixture.sub;
    let mut nav = navigator(fixture, &[KeyCode::Enter, KeyCode::Enter]);
    drive(&mut nav);
    assert_eq!(nav.state(), NavState::Active(sub));
    assert_eq!(nav.surface().row_text(0), "Sub");
}

#[test]
fn shared_submenu_takes_parent_of_latest_caller() {
    let mut tree = MenuTree::new();
    let shared = tree.insert(Menu::from_entries("Shared", [Entry::exit(1, "Quit", 3)]));
    let left = tree.insert(Menu::from_entries("Left", [Entry::submenu(1, "Shared", shared)]));
    let right = tree.insert(Menu::from_entries("Right", [Entry::submenu(1, "Shared", shared)]));
    let root = tree.insert(Menu::from_entries(
        "Root",
        [Entry::submenu(1, "Left", left), Entry::submenu(2, "Right", right)],
    ));

    let surface = ScriptedSurface::new(40, 10).with_keys([
        KeyCode::Enter, // Left
        KeyCode::Enter, // Shared
        KeyCode::Esc,
        KeyCode::Esc, // back at Root
        KeyCode::Down,
        KeyCode::Enter, // Right
        KeyCode::Enter, // Shared
    ]);
    let mut nav = Navigator::new(tree, root, surface).unwrap();
    nav.start().unwrap();

    nav.step().unwrap();
    nav.step().unwrap();
    assert_eq!(nav.tree().parent_of(shared), Some(left));

    for _ in 0..5 {
        nav.step().unwrap();
    }
    assert_eq!(nav.current(), Some(shared));
    assert_eq!(nav.tree().parent_of(shared), Some(right));
    assert_eq!(nav.tree().root_of(shared), root);

    nav.surface_mut().push_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(nav.run().unwrap(), ExitReason::Requested(3));
}

#[test]
fn callback_can_grow_the_current_menu() {
    let mut tree = MenuTree::new();
    let root = tree.insert(Menu::from_entries(
        "Root",
        [Entry::action(1, "Add", |ctx| {
            let next = ctx.menu().len() as u32 + 1;
            ctx.menu()
                .add_entry(Entry::text(next, format!("line {next}")))
                .unwrap();
        })],
    ));
    let surface = ScriptedSurface::new(40, 10).with_keys([KeyCode::Enter, KeyCode::Enter]);
    let mut nav = Navigator::new(tree, root, surface).unwrap();
    nav.start().unwrap();
    nav.step().unwrap();
    nav.step().unwrap();

    assert_eq!(nav.surface().row_text(3), "  line 2");
    assert_eq!(nav.surface().row_text(4), "  line 3");
}

#[test]
fn callback_can_request_exit_and_ascend() {
    let mut tree = MenuTree::new();
    let sub = tree.insert(Menu::from_entries(
        "Sub",
        [
            Entry::action(1, "Up", |ctx| ctx.ascend()),
            Entry::action(2, "Bail", |ctx| ctx.exit(9)),
        ],
    ));
    let root = tree.insert(Menu::from_entries("Root", [Entry::submenu(1, "Sub", sub)]));
    let surface = ScriptedSurface::new(40, 10).with_keys([
        KeyCode::Enter,
        KeyCode::Enter, // Up
        KeyCode::Enter,
        KeyCode::Down,
        KeyCode::Enter, // Bail
    ]);
    let mut nav = Navigator::new(tree, root, surface).unwrap();
    nav.start().unwrap();
    nav.step().unwrap();
    nav.step().unwrap();
    assert_eq!(nav.current(), Some(root));

    assert_eq!(nav.run().unwrap(), ExitReason::Requested(9));
}

#[test]
fn empty_menu_ignores_navigation() {
    let mut tree = MenuTree::new();
    let root = tree.insert(Menu::from_entries("Nothing here", [Entry::text(1, "just text")]));
    let surface = ScriptedSurface::new(40, 6).with_keys([
        KeyCode::Down,
        KeyCode::Up,
        KeyCode::Enter,
        KeyCode::Esc,
    ]);
    let mut nav = Navigator::new(tree, root, surface).unwrap();
    assert_eq!(nav.run().unwrap(), ExitReason::RootBack);
    assert!(nav.surface().highlighted().is_empty());
}

#[test]
fn refresh_redraws_identical_frame() {
    let fixture = root_and_sub();
    let mut nav = navigator(fixture, &[KeyCode::Down]);
    drive(&mut nav);
    let before = nav.surface().screen();

    nav.surface_mut().push_key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
    nav.step().unwrap();
    assert_eq!(nav.surface().screen(), before);
}

#[test]
fn run_restores_terminal_and_clears_screen() {
    let fixture = root_and_sub();
    let mut nav = navigator(fixture, &[KeyCode::Esc]);
    nav.run().unwrap();
    let surface = nav.surface();
    assert!(!surface.is_entered());
    assert!(surface.is_cursor_visible());
    assert_eq!(surface.screen(), "");
    assert_eq!(surface.cursor(), (0, 0));
}
