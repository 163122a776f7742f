//! Property tests for the navigation state machine.

use proptest::prelude::*;

use oledmenu::domain::ports::NoopEventSink;
use oledmenu::{build_system, CallbackRegistry, Input, MenuSpec, MenuSystem, Step};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .]{0,16}").unwrap()
}

fn menu_spec() -> impl Strategy<Value = MenuSpec> {
    let leaf = label().prop_map(MenuSpec::new);
    leaf.prop_recursive(4, 48, 5, |inner| {
        (label(), proptest::collection::vec(inner, 0..5)).prop_map(|(label, children)| {
            let mut spec = MenuSpec::new(label);
            spec.children = children;
            spec
        })
    })
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::MoveUp),
        Just(Input::MoveDown),
        Just(Input::Commit),
        Just(Input::Back),
        Just(Input::Noop),
    ]
}

fn system_for(spec: &MenuSpec) -> MenuSystem {
    build_system(spec, &CallbackRegistry::strict()).unwrap()
}

/// Apply `inputs` but never back out of the root, so the session stays alive
fn walk(system: &mut MenuSystem, inputs: &[Input]) {
    for &input in inputs {
        if input == Input::Back && system.current() == system.root() {
            continue;
        }
        system.handle(input, &NoopEventSink);
    }
}

fn selections(system: &MenuSystem) -> Vec<usize> {
    let tree = system.tree();
    tree.ids().map(|id| tree.node(id).selected_index()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `MoveDown` applied once per child returns to the starting index.
    #[test]
    fn property_move_down_is_cyclic(
        spec in menu_spec(),
        path in proptest::collection::vec(input(), 0..24),
    ) {
        let mut system = system_for(&spec);
        walk(&mut system, &path);

        let count = system.current_node().children().len();
        prop_assume!(count > 0);

        let start = system.current_node().selected_index();
        for _ in 0..count {
            system.handle(Input::MoveDown, &NoopEventSink);
            prop_assert!(system.current_node().selected_index() < count);
        }
        prop_assert_eq!(system.current_node().selected_index(), start);
    }

    /// PROPERTY: `MoveUp` and `MoveDown` undo each other.
    #[test]
    fn property_moves_are_inverse(
        spec in menu_spec(),
        path in proptest::collection::vec(input(), 0..24),
        up_first in any::<bool>(),
    ) {
        let mut system = system_for(&spec);
        walk(&mut system, &path);
        prop_assume!(system.current_node().children().len() > 1);

        let start = system.current_node().selected_index();
        let (first, second) = if up_first {
            (Input::MoveUp, Input::MoveDown)
        } else {
            (Input::MoveDown, Input::MoveUp)
        };
        system.handle(first, &NoopEventSink);
        prop_assert_ne!(system.current_node().selected_index(), start);
        system.handle(second, &NoopEventSink);
        prop_assert_eq!(system.current_node().selected_index(), start);
    }

    /// PROPERTY: `Commit` on a submenu descends one level and resets its selection.
    #[test]
    fn property_commit_enters_selected_child(
        spec in menu_spec(),
        path in proptest::collection::vec(input(), 0..24),
    ) {
        let mut system = system_for(&spec);
        walk(&mut system, &path);
        prop_assume!(!system.current_node().is_leaf());

        let previous = system.current();
        let expected = system.current_node().selected_child();

        prop_assert_eq!(system.handle(Input::Commit, &NoopEventSink), Step::Continue);
        prop_assert_eq!(Some(system.current()), expected);
        prop_assert_eq!(system.current_node().parent(), Some(previous));
        prop_assert_eq!(system.current_node().selected_index(), 0);
    }

    /// PROPERTY: `Commit` on a leaf always lands on the root.
    #[test]
    fn property_commit_on_leaf_returns_to_root(
        spec in menu_spec(),
        path in proptest::collection::vec(input(), 0..24),
    ) {
        let mut system = system_for(&spec);
        walk(&mut system, &path);
        prop_assume!(system.current_node().is_leaf());

        let before = selections(&system);
        system.handle(Input::Commit, &NoopEventSink);

        prop_assert_eq!(system.current(), system.root());
        prop_assert_eq!(selections(&system), before);
    }

    /// PROPERTY: `Back` below the root moves to the parent and keeps its selection.
    #[test]
    fn property_back_ascends_to_parent(
        spec in menu_spec(),
        path in proptest::collection::vec(input(), 0..24),
    ) {
        let mut system = system_for(&spec);
        walk(&mut system, &path);
        let Some(parent) = system.current_node().parent() else {
            return Ok(());
        };

        let parent_selection = system.tree().node(parent).selected_index();
        prop_assert_eq!(system.handle(Input::Back, &NoopEventSink), Step::Continue);
        prop_assert_eq!(system.current(), parent);
        prop_assert_eq!(system.current_node().selected_index(), parent_selection);
    }

    /// PROPERTY: `Back` at the root terminates and freezes all state.
    #[test]
    fn property_back_at_root_freezes_state(
        spec in menu_spec(),
        path in proptest::collection::vec(input(), 0..24),
        after in proptest::collection::vec(input(), 0..16),
    ) {
        let mut system = system_for(&spec);
        walk(&mut system, &path);
        while system.current() != system.root() {
            system.handle(Input::Back, &NoopEventSink);
        }

        prop_assert_eq!(system.handle(Input::Back, &NoopEventSink), Step::Terminated);
        let frozen = selections(&system);
        for input in after {
            prop_assert_eq!(system.handle(input, &NoopEventSink), Step::Terminated);
        }
        prop_assert!(system.is_terminated());
        prop_assert_eq!(system.current(), system.root());
        prop_assert_eq!(selections(&system), frozen);
    }

    /// PROPERTY: Every selection index stays inside its node's children.
    #[test]
    fn property_selection_stays_in_range(
        spec in menu_spec(),
        inputs in proptest::collection::vec(input(), 0..64),
    ) {
        let mut system = system_for(&spec);
        for input in inputs {
            system.handle(input, &NoopEventSink);
            let tree = system.tree();
            for id in tree.ids() {
                let node = tree.node(id);
                prop_assert!(node.is_leaf() || node.selected_index() < node.children().len());
            }
        }
    }
}
