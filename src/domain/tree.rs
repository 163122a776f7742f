//! Menu tree model.
//!
//! Nodes live in an arena owned by `MenuTree` and are addressed by `NodeId`.
//! The parent link is a plain index, so ownership only flows downward through
//! each node's `children` list.

use std::fmt;

/// Index of a node inside its `MenuTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle point at which a callback fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Enter,
    Exit,
    Action,
}

impl Hook {
    /// Informational message of the default handler for this hook
    pub fn default_message(self) -> &'static str {
        match self {
            Hook::Enter => "Entered a menu.",
            Hook::Exit => "Exited a menu.",
            Hook::Action => "Default action executed.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hook::Enter => "enter",
            Hook::Exit => "exit",
            Hook::Action => "action",
        }
    }
}

/// A lifecycle callback, resolved once when the node is created
#[derive(Default)]
pub enum Callback {
    /// No handler was supplied; firing only reports the hook's default message
    #[default]
    Default,
    /// Handler bound by name outside this process; firing only reports the name
    Named(String),
    /// In-process handler
    Handler(Box<dyn FnMut()>),
}

impl Callback {
    /// Wrap a closure as a callback
    pub fn handler(f: impl FnMut() + 'static) -> Self {
        Callback::Handler(Box::new(f))
    }

    /// Run the handler (if any) and describe what fired
    pub fn fire(&mut self) -> Binding {
        match self {
            Callback::Default => Binding::Default,
            Callback::Named(name) => Binding::Named(name.clone()),
            Callback::Handler(f) => {
                f();
                Binding::Handler
            }
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Default => f.write_str("Default"),
            Callback::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Callback::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// What kind of callback answered a hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Default,
    Named(String),
    Handler,
}

/// The three lifecycle callbacks of a node
#[derive(Debug, Default)]
pub struct Callbacks {
    pub on_enter: Callback,
    pub on_exit: Callback,
    pub on_action: Callback,
}

impl Callbacks {
    pub fn get_mut(&mut self, hook: Hook) -> &mut Callback {
        match hook {
            Hook::Enter => &mut self.on_enter,
            Hook::Exit => &mut self.on_exit,
            Hook::Action => &mut self.on_action,
        }
    }
}

/// One entry in the menu hierarchy
#[derive(Debug)]
pub struct MenuNode {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    selected_index: usize,
    callbacks: Callbacks,
}

impl MenuNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A node without children is an action node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Highlighted child index; meaningless on a leaf
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Child under the selection marker
    pub fn selected_child(&self) -> Option<NodeId> {
        self.children.get(self.selected_index).copied()
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }
}

/// Arena holding every node of one menu
#[derive(Debug, Default)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached node with no children and selection at 0
    pub fn create_node(&mut self, label: impl Into<String>, callbacks: Callbacks) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MenuNode {
            label: label.into(),
            parent: None,
            children: Vec::new(),
            selected_index: 0,
            callbacks,
        });
        id
    }

    /// Append `child` to `parent`'s children and link it back.
    ///
    /// Callers guarantee the result stays a tree: `child` must be detached
    /// and must not be an ancestor of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(parent != child, "node {child} cannot be its own child");
        debug_assert!(
            self.nodes[child.0].parent.is_none(),
            "node {child} already has a parent"
        );
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    pub fn node(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate node ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Walk parent links up to the node that has none
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current
    }

    /// Number of parent links between `id` and its root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    pub(crate) fn set_selected(&mut self, id: NodeId, index: usize) {
        let node = &mut self.nodes[id.0];
        debug_assert!(node.children.is_empty() || index < node.children.len());
        node.selected_index = index;
    }

    pub(crate) fn fire(&mut self, id: NodeId, hook: Hook) -> Binding {
        self.nodes[id.0].callbacks.get_mut(hook).fire()
    }
}
