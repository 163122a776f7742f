//! Tree construction from a declarative menu description.
//!
//! A `MenuSpec` is a nested record of label, optional callback bindings and
//! children. `build_tree` walks it depth-first and links nodes in document
//! order, so the order written is the order rendered and cycled through.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

use super::navigation::MenuSystem;
use super::tree::{Callback, Callbacks, MenuTree, NodeId};

/// Declarative description of one node and its subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuSpec {
    #[serde(rename = "name")]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_enter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_exit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_action: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuSpec>,
}

impl MenuSpec {
    /// A node without callback bindings or children
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_enter: None,
            on_exit: None,
            on_action: None,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: MenuSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn on_enter(mut self, name: impl Into<String>) -> Self {
        self.on_enter = Some(name.into());
        self
    }

    pub fn on_exit(mut self, name: impl Into<String>) -> Self {
        self.on_exit = Some(name.into());
        self
    }

    pub fn on_action(mut self, name: impl Into<String>) -> Self {
        self.on_action = Some(name.into());
        self
    }

    /// Parse a YAML menu description
    pub fn from_yaml_str(content: &str, origin: &Path) -> MenuResult<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| MenuError::InvalidMenu {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a YAML menu file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, path)
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MenuSpec::node_count).sum::<usize>()
    }

    /// The stock three-submenu demo menu
    pub fn demo() -> Self {
        MenuSpec::new("Main Menu")
            .on_enter("main_menu_enter")
            .on_exit("main_menu_exit")
            .child(
                MenuSpec::new("Sub Menu 1")
                    .on_enter("submenu1_enter")
                    .child(MenuSpec::new("Option 1.1").on_action("option_1_1_action"))
                    .child(MenuSpec::new("Option 1.2").on_action("option_1_2_action"))
                    .child(
                        MenuSpec::new("Sub-Sub Menu 1.3")
                            .child(MenuSpec::new("Option 1.3.1").on_action("option_1_3_1_action")),
                    ),
            )
            .child(
                MenuSpec::new("Sub Menu 2")
                    .on_enter("submenu2_enter")
                    .child(MenuSpec::new("Option 2.1").on_action("option_2_1_action"))
                    .child(MenuSpec::new("Option 2.2").on_action("option_2_2_action")),
            )
            .child(
                MenuSpec::new("Sub Menu 3")
                    .on_enter("submenu3_enter")
                    .child(MenuSpec::new("Option 3.1").on_action("option_3_1_action"))
                    .child(MenuSpec::new("Option 3.2").on_action("option_3_2_action"))
                    .child(MenuSpec::new("Option 3.3").on_action("option_3_3_action"))
                    .child(
                        MenuSpec::new("Sub-Sub Menu 3.4")
                            .child(MenuSpec::new("Option 3.4.1").on_action("option_3_4_1_action"))
                            .child(MenuSpec::new("Option 3.4.2").on_action("option_3_4_2_action")),
                    ),
            )
    }
}

type SharedHandler = Rc<RefCell<Box<dyn FnMut()>>>;

/// Maps callback names in a `MenuSpec` to handlers
#[derive(Default)]
pub struct CallbackRegistry {
    handlers: HashMap<String, SharedHandler>,
    announce_unknown: bool,
}

impl CallbackRegistry {
    /// Registry that rejects names without a registered handler
    pub fn strict() -> Self {
        Self::default()
    }

    /// Registry that turns unregistered names into `Callback::Named`
    pub fn announcing() -> Self {
        Self {
            handlers: HashMap::new(),
            announce_unknown: true,
        }
    }

    /// Bind `name` to a handler. The same handler may serve several nodes.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut() + 'static,
    ) -> &mut Self {
        self.handlers
            .insert(name.into(), Rc::new(RefCell::new(Box::new(handler))));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Resolve an optional binding to a concrete callback
    pub fn resolve(&self, name: Option<&str>) -> MenuResult<Callback> {
        let Some(name) = name else {
            return Ok(Callback::Default);
        };

        if let Some(shared) = self.handlers.get(name) {
            let shared = Rc::clone(shared);
            return Ok(Callback::handler(move || {
                let mut handler = shared.borrow_mut();
                (*handler)()
            }));
        }

        if self.announce_unknown {
            Ok(Callback::Named(name.to_string()))
        } else {
            Err(MenuError::UnknownCallback {
                name: name.to_string(),
            })
        }
    }
}

/// Build the arena for `spec`; returns the tree and its root
pub fn build_tree(spec: &MenuSpec, registry: &CallbackRegistry) -> MenuResult<(MenuTree, NodeId)> {
    let mut tree = MenuTree::new();
    let root = build_node(&mut tree, spec, registry)?;
    Ok((tree, root))
}

/// Build a ready-to-navigate session for `spec`
pub fn build_system(spec: &MenuSpec, registry: &CallbackRegistry) -> MenuResult<MenuSystem> {
    let (tree, root) = build_tree(spec, registry)?;
    Ok(MenuSystem::new(tree, root))
}

fn build_node(
    tree: &mut MenuTree,
    spec: &MenuSpec,
    registry: &CallbackRegistry,
) -> MenuResult<NodeId> {
    let callbacks = Callbacks {
        on_enter: registry.resolve(spec.on_enter.as_deref())?,
        on_exit: registry.resolve(spec.on_exit.as_deref())?,
        on_action: registry.resolve(spec.on_action.as_deref())?,
    };
    let id = tree.create_node(spec.label.clone(), callbacks);

    for child in &spec.children {
        let child_id = build_node(tree, child, registry)?;
        tree.add_child(id, child_id);
    }

    Ok(id)
}
