//! Navigation engine.
//!
//! `MenuSystem` owns the tree and the single cursor of a session. Each call to
//! `handle` applies one input symbol, fires the lifecycle callbacks that the
//! transition calls for, and reports what happened to a `NavEventSink`.

use super::ports::{NavEvent, NavEventSink};
use super::tree::{Hook, MenuNode, MenuTree, NodeId};
use super::view::MenuView;

/// Abstract input alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Move the highlight to the previous child (wrapping)
    MoveUp,
    /// Move the highlight to the next child (wrapping)
    MoveDown,
    /// Enter the highlighted submenu, or run the action of a leaf
    Commit,
    /// Leave the current node; ends the session at the root
    Back,
    /// Unrecognized input
    Noop,
}

/// Result of processing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Terminated,
}

/// Root, cursor and termination flag of one navigation session
#[derive(Debug)]
pub struct MenuSystem {
    tree: MenuTree,
    root: NodeId,
    current: NodeId,
    terminated: bool,
}

impl MenuSystem {
    /// Start a session at `root`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a node of `tree` or has a parent.
    pub fn new(tree: MenuTree, root: NodeId) -> Self {
        assert!(
            root.index() < tree.len(),
            "root {root} is not a node of this tree"
        );
        assert!(
            tree.node(root).parent().is_none(),
            "root {root} must not have a parent"
        );
        Self {
            tree,
            root,
            current: root,
            terminated: false,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> &MenuNode {
        self.tree.node(self.current)
    }

    /// True once `Back` was processed at the root
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Snapshot of the current node for renderers
    pub fn view(&self) -> MenuView {
        MenuView::of(&self.tree, self.current)
    }

    /// Apply one input symbol.
    ///
    /// After termination every further input is ignored and `Terminated` is
    /// returned again without touching any state.
    pub fn handle(&mut self, input: Input, sink: &dyn NavEventSink) -> Step {
        if self.terminated {
            return Step::Terminated;
        }

        match input {
            Input::MoveUp => self.move_selection(-1, sink),
            Input::MoveDown => self.move_selection(1, sink),
            Input::Commit => self.commit(sink),
            Input::Back => return self.back(sink),
            Input::Noop => sink.on_event(&NavEvent::InputIgnored),
        }
        Step::Continue
    }

    fn move_selection(&mut self, delta: isize, sink: &dyn NavEventSink) {
        let node = self.tree.node(self.current);
        let count = node.children().len();
        if count == 0 {
            sink.on_event(&NavEvent::InputIgnored);
            return;
        }

        let selected = wrap_index(node.selected_index(), delta, count);
        self.tree.set_selected(self.current, selected);
        sink.on_event(&NavEvent::Moved {
            node: self.current,
            selected,
        });
    }

    fn commit(&mut self, sink: &dyn NavEventSink) {
        let from = self.current;
        match self.tree.node(from).selected_child() {
            Some(child) => {
                self.current = child;
                sink.on_event(&NavEvent::Entered { from, to: child });
                self.fire(child, Hook::Enter, sink);
                self.tree.set_selected(child, 0);
            }
            None => {
                self.fire(from, Hook::Action, sink);
                let root = self.tree.root_of(from);
                self.current = root;
                sink.on_event(&NavEvent::ReturnedToRoot { from, root });
            }
        }
    }

    fn back(&mut self, sink: &dyn NavEventSink) -> Step {
        let from = self.current;
        self.fire(from, Hook::Exit, sink);
        match self.tree.node(from).parent() {
            Some(parent) => {
                self.current = parent;
                sink.on_event(&NavEvent::Ascended { from, to: parent });
                Step::Continue
            }
            None => {
                self.terminated = true;
                Step::Terminated
            }
        }
    }

    fn fire(&mut self, node: NodeId, hook: Hook, sink: &dyn NavEventSink) {
        let binding = self.tree.fire(node, hook);
        sink.on_event(&NavEvent::HookFired {
            node,
            label: self.tree.node(node).label().to_string(),
            hook,
            binding,
        });
    }
}

/// Cyclic step of `index` by `delta` within `0..count`
fn wrap_index(index: usize, delta: isize, count: usize) -> usize {
    let count = count as isize;
    (index as isize + delta).rem_euclid(count) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{NoopEventSink, RecordingEventSink};
    use crate::domain::tree::{Binding, Callback, Callbacks};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// root -> [A -> [A1, A2], B]
    fn sample() -> (MenuSystem, [NodeId; 5]) {
        let mut tree = MenuTree::new();
        let root = tree.create_node("Main Menu", Callbacks::default());
        let a = tree.create_node("A", Callbacks::default());
        let a1 = tree.create_node("A1", Callbacks::default());
        let a2 = tree.create_node("A2", Callbacks::default());
        let b = tree.create_node("B", Callbacks::default());
        tree.add_child(root, a);
        tree.add_child(a, a1);
        tree.add_child(a, a2);
        tree.add_child(root, b);
        (MenuSystem::new(tree, root), [root, a, a1, a2, b])
    }

    #[test]
    fn starts_at_root() {
        let (system, [root, ..]) = sample();
        assert_eq!(system.current(), root);
        assert!(!system.is_terminated());
    }

    #[test]
    fn move_down_wraps() {
        let (mut system, _) = sample();
        let sink = NoopEventSink;

        system.handle(Input::MoveDown, &sink);
        assert_eq!(system.current_node().selected_index(), 1);
        system.handle(Input::MoveDown, &sink);
        assert_eq!(system.current_node().selected_index(), 0);
    }

    #[test]
    fn move_up_wraps_to_last() {
        let (mut system, _) = sample();
        system.handle(Input::MoveUp, &NoopEventSink);
        assert_eq!(system.current_node().selected_index(), 1);
    }

    #[test]
    fn move_on_leaf_is_ignored() {
        let sink = RecordingEventSink::new();
        let mut tree = MenuTree::new();
        let lonely = tree.create_node("Lonely", Callbacks::default());
        let mut leaf_system = MenuSystem::new(tree, lonely);
        leaf_system.handle(Input::MoveDown, &sink);
        leaf_system.handle(Input::MoveUp, &sink);

        assert_eq!(leaf_system.current_node().selected_index(), 0);
        assert_eq!(sink.events(), vec![NavEvent::InputIgnored, NavEvent::InputIgnored]);
    }

    #[test]
    fn commit_enters_submenu_and_resets_selection() {
        let (mut system, [root, a, ..]) = sample();
        let sink = RecordingEventSink::new();

        system.handle(Input::Commit, &sink);

        assert_eq!(system.current(), a);
        assert_eq!(system.current_node().parent(), Some(root));
        assert_eq!(system.current_node().selected_index(), 0);
        assert_eq!(sink.hooks(), vec![("A".to_string(), Hook::Enter)]);
    }

    #[test]
    fn commit_reset_happens_on_every_enter() {
        let (mut system, [_, a, ..]) = sample();
        let sink = NoopEventSink;

        system.handle(Input::Commit, &sink);
        system.handle(Input::MoveDown, &sink);
        assert_eq!(system.current_node().selected_index(), 1);

        system.handle(Input::Back, &sink);
        system.handle(Input::Commit, &sink);
        assert_eq!(system.current(), a);
        assert_eq!(system.current_node().selected_index(), 0);
    }

    #[test]
    fn commit_on_leaf_runs_action_and_returns_to_root() {
        let (mut system, [root, a, _, a2, _]) = sample();
        let sink = RecordingEventSink::new();

        system.handle(Input::Commit, &sink);
        system.handle(Input::MoveDown, &sink);
        system.handle(Input::Commit, &sink);
        assert_eq!(system.current(), a2);

        system.handle(Input::Commit, &sink);

        assert_eq!(system.current(), root);
        assert_eq!(
            sink.hooks(),
            vec![
                ("A".to_string(), Hook::Enter),
                ("A2".to_string(), Hook::Enter),
                ("A2".to_string(), Hook::Action),
            ]
        );
        assert!(sink.events().contains(&NavEvent::ReturnedToRoot { from: a2, root }));
        // A's selection is retained; only entering resets
        assert_eq!(system.tree().node(a).selected_index(), 1);
    }

    #[test]
    fn back_moves_to_parent_without_touching_its_selection() {
        let (mut system, [root, a, ..]) = sample();
        let sink = RecordingEventSink::new();

        system.handle(Input::Commit, &sink);
        let step = system.handle(Input::Back, &sink);

        assert_eq!(step, Step::Continue);
        assert_eq!(system.current(), root);
        assert_eq!(system.current_node().selected_index(), 0);
        assert_eq!(
            sink.hooks(),
            vec![("A".to_string(), Hook::Enter), ("A".to_string(), Hook::Exit)]
        );
        assert!(sink.events().contains(&NavEvent::Ascended { from: a, to: root }));
    }

    #[test]
    fn back_at_root_terminates_once() {
        let (mut system, [root, ..]) = sample();
        let sink = RecordingEventSink::new();

        assert_eq!(system.handle(Input::Back, &sink), Step::Terminated);
        assert!(system.is_terminated());
        assert_eq!(sink.hooks(), vec![("Main Menu".to_string(), Hook::Exit)]);

        let before = sink.events().len();
        assert_eq!(system.handle(Input::MoveDown, &sink), Step::Terminated);
        assert_eq!(system.handle(Input::Back, &sink), Step::Terminated);
        assert_eq!(sink.events().len(), before);
        assert_eq!(system.current(), root);
        assert_eq!(system.current_node().selected_index(), 0);
    }

    #[test]
    fn noop_changes_nothing() {
        let (mut system, [root, ..]) = sample();
        let sink = RecordingEventSink::new();

        assert_eq!(system.handle(Input::Noop, &sink), Step::Continue);
        assert_eq!(system.current(), root);
        assert_eq!(sink.events(), vec![NavEvent::InputIgnored]);
    }

    #[test]
    fn handlers_fire_in_transition_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = MenuTree::new();

        let push = |tag: &'static str| {
            let log = Rc::clone(&log);
            Callback::handler(move || log.borrow_mut().push(tag))
        };

        let root = tree.create_node(
            "Main",
            Callbacks {
                on_exit: push("main:exit"),
                ..Callbacks::default()
            },
        );
        let sub = tree.create_node(
            "Sub",
            Callbacks {
                on_enter: push("sub:enter"),
                on_exit: push("sub:exit"),
                ..Callbacks::default()
            },
        );
        let leaf = tree.create_node(
            "Leaf",
            Callbacks {
                on_enter: push("leaf:enter"),
                on_action: push("leaf:action"),
                ..Callbacks::default()
            },
        );
        tree.add_child(root, sub);
        tree.add_child(sub, leaf);

        let mut system = MenuSystem::new(tree, root);
        let sink = RecordingEventSink::new();
        let inputs = [
            Input::Commit,
            Input::Commit,
            Input::Commit,
            Input::Commit,
            Input::Back,
            Input::Back,
            Input::Back,
        ];
        for input in inputs {
            system.handle(input, &sink);
        }

        assert_eq!(
            *log.borrow(),
            vec![
                "sub:enter",
                "leaf:enter",
                "leaf:action",
                "sub:enter",
                "sub:exit",
                "main:exit",
            ]
        );
        assert!(system.is_terminated());
        assert!(sink.events().iter().any(|e| matches!(
            e,
            NavEvent::HookFired { binding: Binding::Handler, hook: Hook::Action, .. }
        )));
    }

    #[test]
    fn wrap_index_is_cyclic() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 1, 1), 0);
    }

    #[test]
    #[should_panic(expected = "must not have a parent")]
    fn new_rejects_non_root() {
        let mut tree = MenuTree::new();
        let root = tree.create_node("Root", Callbacks::default());
        let child = tree.create_node("Child", Callbacks::default());
        tree.add_child(root, child);
        let _ = MenuSystem::new(tree, child);
    }
}
