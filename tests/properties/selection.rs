//! Property tests for the selection state machine and viewport.

use proptest::prelude::*;

use sshw::ui::picker::{viewport, Key, Outcome, SelectionState};
use sshw::Node;

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Backspace),
        Just(Key::Confirm),
        Just(Key::Unrecognized),
        proptest::char::range('a', 'e').prop_map(Key::Char),
        Just(Key::Char(' ')),
    ]
}

fn hosts(names: &[String]) -> Vec<Node> {
    names.iter().map(Node::new).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The cursor always points into the filtered list (or 0 when empty).
    #[test]
    fn property_cursor_stays_in_range(
        names in proptest::collection::vec("[a-e]{1,5}", 0..12),
        keys in proptest::collection::vec(key_strategy(), 0..40),
    ) {
        let items = hosts(&names);
        let mut state = SelectionState::new(&items);
        for key in keys {
            let outcome = state.apply(&items, key);
            if let Outcome::Selected(index) = outcome {
                prop_assert!(index < items.len());
                prop_assert_eq!(Some(index), state.current());
            }
            let len = state.filtered().len();
            prop_assert!(state.cursor() < len.max(1));
        }
    }

    /// PROPERTY: Confirm selects exactly when something matches.
    #[test]
    fn property_confirm_needs_a_match(
        names in proptest::collection::vec("[a-e]{1,5}", 0..8),
        search in "[a-e]{0,3}",
    ) {
        let items = hosts(&names);
        let mut state = SelectionState::new(&items);
        for c in search.chars() {
            state.apply(&items, Key::Char(c));
        }
        let outcome = state.apply(&items, Key::Confirm);
        if state.filtered().is_empty() {
            prop_assert_eq!(outcome, Outcome::Ignored);
        } else {
            prop_assert!(matches!(outcome, Outcome::Selected(_)));
        }
    }

    /// PROPERTY: The viewport is within bounds and shows the cursor.
    #[test]
    fn property_viewport_contains_cursor(
        len in 0usize..200,
        page_size in 1usize..40,
        cursor_seed in any::<usize>(),
    ) {
        let cursor = if len == 0 { 0 } else { cursor_seed % len };
        let view = viewport(cursor, len, page_size);

        prop_assert_eq!(view.visible, page_size.min(len));
        prop_assert!(view.start + view.visible <= len);
        if len > 0 {
            prop_assert!(view.start <= cursor);
            prop_assert!(cursor < view.start + view.visible);
        }
    }
}
