//! Property tests for entry identity within a menu.

use std::collections::HashSet;

use proptest::prelude::*;

use termenu::{Entry, EntryId, Menu, MenuError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a menu built from ids with a repeat is rejected and the
    /// lenient constructor falls back to an empty menu.
    #[test]
    fn property_duplicate_ids_rejected_at_construction(
        ids in proptest::collection::vec(0u32..20, 1..10),
    ) {
        let unique: HashSet<u32> = ids.iter().copied().collect();
        let has_duplicate = unique.len() != ids.len();
        let entries = || ids.iter().map(|&id| Entry::exit(id, format!("e{id}"), 0));

        let strict = Menu::try_from_entries("strict", entries());
        prop_assert_eq!(strict.is_err(), has_duplicate);

        let lenient = Menu::from_entries("lenient", entries());
        if has_duplicate {
            prop_assert!(lenient.is_empty());
            prop_assert_eq!(lenient.selected_index(), None);
        } else {
            prop_assert_eq!(lenient.len(), ids.len());
        }
    }

    /// PROPERTY: adding an entry whose id is taken leaves the menu unchanged.
    #[test]
    fn property_duplicate_add_is_noop(
        count in 1u32..10,
        pick in 0u32..10,
    ) {
        let mut menu = Menu::from_entries(
            "m",
            (1..=count).map(|id| Entry::exit(id, format!("e{id}"), 0)),
        );
        let taken = pick % count + 1;
        let before: Vec<(EntryId, String)> = menu
            .entries()
            .iter()
            .map(|e| (e.id(), e.label.clone()))
            .collect();
        let selected = menu.selected_index();

        let err = menu.add_entry(Entry::text(taken, "intruder")).unwrap_err();
        let is_duplicate = matches!(err, MenuError::DuplicateIdentity { .. });
        prop_assert!(is_duplicate);

        let after: Vec<(EntryId, String)> = menu
            .entries()
            .iter()
            .map(|e| (e.id(), e.label.clone()))
            .collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(menu.selected_index(), selected);
    }

    /// PROPERTY: ids stay unique after any sequence of adds and removes.
    #[test]
    fn property_ids_stay_unique(
        ops in proptest::collection::vec((any::<bool>(), 0u32..8), 0..40),
    ) {
        let mut menu = Menu::new("ops");
        for (add, id) in ops {
            if add {
                let _ = menu.add_entry(Entry::checkbox(id, "c", 0));
            } else {
                let _ = menu.remove_entry(EntryId(id));
            }
            let ids: HashSet<EntryId> = menu.entries().iter().map(|e| e.id()).collect();
            prop_assert_eq!(ids.len(), menu.len());
        }
    }
}
