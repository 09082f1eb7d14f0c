use std::{
    any::Any,
    fmt::Debug,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
};

use injexit::{Container, Inject, InjectError, TypeInfo};

use crate::view::View;

/// A behavior attached to a [Node]
///
/// This is the part of the host's scene graph the view pipeline needs: components can be
/// copied when their node is cloned, can be views, and receive dependency injection.
pub trait Component: Any + Send + Sync {
    /// A fresh copy of this component for a cloned node
    ///
    /// Must not have side effects beyond creating the copy, as clones can be
    /// discarded right away.
    fn duplicate(&self) -> Arc<dyn Component>;

    fn component_type(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    /// Views return themselves here
    fn into_view(self: Arc<Self>) -> Option<Arc<dyn View>> {
        None
    }

    /// Fills the component's dependencies from the container
    fn inject(&self, container: &Container) -> Result<(), InjectError> {
        let _ = container;
        Ok(())
    }

    /// Called once when the owning node is destroyed
    fn on_destroy(&self) {}
}

/// A named set of components
///
/// Fetched nodes act as templates, materialized nodes are live instances.
/// Cloning a `Node` clones the handle, use [Node::instantiate] for a copy.
#[derive(Clone)]
pub struct Node(Arc<NodeInner>);

struct NodeInner {
    name: String,
    components: Vec<Arc<dyn Component>>,
    destroyed: AtomicBool,
}

/// Non-owning handle to a [Node], held by the views attached to it
#[derive(Clone, Default)]
pub struct WeakNode(Weak<NodeInner>);

impl WeakNode {
    pub fn upgrade(&self) -> Option<Node> {
        self.0.upgrade().map(Node)
    }
}

impl Debug for WeakNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.upgrade() {
            Some(node) => f.debug_tuple("WeakNode").field(&node.name()).finish(),
            None => f.write_str("WeakNode(<dropped>)"),
        }
    }
}

impl Node {
    pub fn new(name: impl Into<String>, components: Vec<Arc<dyn Component>>) -> Self {
        let node = Node(Arc::new(NodeInner {
            name: name.into(),
            components,
            destroyed: AtomicBool::new(false),
        }));

        for view in node.views() {
            view.base().attach(&node);
        }

        node
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn components(&self) -> &[Arc<dyn Component>] {
        &self.0.components
    }

    /// All components which are views, in attachment order
    pub fn views(&self) -> impl Iterator<Item = Arc<dyn View>> + '_ {
        self.0
            .components
            .iter()
            .filter_map(|component| component.clone().into_view())
    }

    /// The first view whose concrete type is `view_type`
    pub fn view_of(&self, view_type: TypeInfo) -> Option<Arc<dyn View>> {
        self.0
            .components
            .iter()
            .find(|component| component.component_type() == view_type)
            .and_then(|component| component.clone().into_view())
    }

    /// Creates an independent copy with duplicated components
    ///
    /// The copy is kept alive by its views until [Node::destroy] is called.
    pub fn instantiate(&self) -> Node {
        let components = self
            .0
            .components
            .iter()
            .map(|component| component.duplicate())
            .collect();

        let instance = Node::new(self.0.name.clone(), components);
        for view in instance.views() {
            view.base().own(&instance);
        }
        instance
    }

    /// Destroys the node, notifying its components once
    pub fn destroy(&self) {
        if self.0.destroyed.swap(true, Ordering::AcqRel) {
            return;
        }

        tracing::trace!("Destroying node {}", self.0.name);
        for component in &self.0.components {
            component.on_destroy();
        }
        // Views let go of their instance only after all components were notified
        for view in self.views() {
            view.base().release();
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.0.destroyed.load(Ordering::Acquire)
    }

    pub fn downgrade(&self) -> WeakNode {
        WeakNode(Arc::downgrade(&self.0))
    }

    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.0.name)
            .field(
                "components",
                &self
                    .0
                    .components
                    .iter()
                    .map(|component| component.component_type().short_name())
                    .collect::<Vec<_>>(),
            )
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}

/// Injecting a node injects all of its components, stopping at the first failure
impl Inject for Node {
    fn inject(&self, container: &Container) -> Result<(), InjectError> {
        self.0
            .components
            .iter()
            .try_for_each(|component| component.inject(container))
    }
}
