//! Property tests for selection movement.

use proptest::prelude::*;

use termenu::{Entry, Menu, Value};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Text,
    Checkbox,
    Input,
    Exit,
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Text),
        Just(Kind::Checkbox),
        Just(Kind::Input),
        Just(Kind::Exit),
    ]
}

fn build(kinds: &[Kind]) -> Menu {
    let entries = kinds.iter().enumerate().map(|(i, kind)| {
        let id = i as u32 + 1;
        let label = format!("entry {id}");
        match kind {
            Kind::Text => Entry::text(id, label),
            Kind::Checkbox => Entry::checkbox(id, label, 0),
            Kind::Input => Entry::input(id, label, Value::Int(0)),
            Kind::Exit => Entry::exit(id, label, 0),
        }
    });
    Menu::from_entries("props", entries)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selection always points at a selectable entry, or is absent
    /// exactly when nothing is selectable.
    #[test]
    fn property_selection_stays_on_selectable_entry(
        kinds in proptest::collection::vec(kind(), 0..12),
        moves in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut menu = build(&kinds);
        let selectable = menu.selectable_entries().len();

        for down in moves {
            if down {
                menu.move_selection_down();
            } else {
                menu.move_selection_up();
            }
            match menu.selected_index() {
                Some(index) => {
                    prop_assert!(index < selectable);
                    prop_assert!(menu.selected_entry().unwrap().is_selectable());
                }
                None => prop_assert_eq!(selectable, 0),
            }
        }
    }

    /// PROPERTY: movement never wraps around either end.
    #[test]
    fn property_selection_never_wraps(
        kinds in proptest::collection::vec(kind(), 1..12),
        extra in 0usize..5,
    ) {
        let mut menu = build(&kinds);
        let selectable = menu.selectable_entries().len();
        prop_assume!(selectable > 0);

        for _ in 0..selectable + extra {
            menu.move_selection_down();
        }
        prop_assert_eq!(menu.selected_index(), Some(selectable - 1));
        prop_assert!(!menu.move_selection_down());

        for _ in 0..selectable + extra {
            menu.move_selection_up();
        }
        prop_assert_eq!(menu.selected_index(), Some(0));
        prop_assert!(!menu.move_selection_up());
    }

    /// PROPERTY: removing the selected entry leaves a valid selection.
    #[test]
    fn property_remove_selected_keeps_selection_valid(
        kinds in proptest::collection::vec(kind(), 1..12),
        downs in 0usize..12,
    ) {
        let mut menu = build(&kinds);
        for _ in 0..downs {
            menu.move_selection_down();
        }
        let Some(selected) = menu.selected_entry().map(|e| e.id()) else {
            return Ok(());
        };
        menu.remove_entry(selected).unwrap();

        let remaining = menu.selectable_entries().len();
        if remaining == 0 {
            prop_assert_eq!(menu.selected_index(), None);
        } else {
            prop_assert_eq!(menu.selected_index(), Some(0));
        }
    }
}
