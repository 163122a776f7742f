//! Read-only snapshot of the current node, handed to renderers.

use serde::Serialize;

use super::tree::{MenuTree, NodeId};

/// One child row as a renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewItem {
    pub label: String,
    pub selected: bool,
    pub has_children: bool,
}

/// Current node title plus all of its children in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub node: usize,
    pub title: String,
    pub depth: usize,
    pub items: Vec<ViewItem>,
}

impl MenuView {
    /// Capture `id` and its children
    pub fn of(tree: &MenuTree, id: NodeId) -> Self {
        let node = tree.node(id);
        let items = node
            .children()
            .iter()
            .enumerate()
            .map(|(i, &child)| {
                let child = tree.node(child);
                ViewItem {
                    label: child.label().to_string(),
                    selected: i == node.selected_index(),
                    has_children: !child.is_leaf(),
                }
            })
            .collect();

        Self {
            node: id.index(),
            title: node.label().to_string(),
            depth: tree.depth(id),
            items,
        }
    }

    /// The first `limit` rows, as a viewport-limited display would show them
    pub fn visible(&self, limit: usize) -> &[ViewItem] {
        &self.items[..self.items.len().min(limit)]
    }
}
