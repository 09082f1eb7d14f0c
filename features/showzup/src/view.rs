use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

use futures::future::BoxFuture;
use injexit::{DynError, Instance};

use crate::scene::{Component, Node, WeakNode};

/// The domain object a view-model is derived from
pub type Model = Instance;
/// The presentation object a view displays
pub type ViewModel = Instance;

/// A component displaying a view-model
///
/// Views keep their state in a [ViewBase]. Optional capabilities are exposed
/// through the `as_*` queries, views implementing them override the query to
/// return themselves.
pub trait View: Component {
    fn base(&self) -> &ViewBase;

    fn is_active(&self) -> bool {
        self.base().is_active()
    }

    fn set_active(&self, active: bool) {
        self.base().set_active(active);
    }

    fn view_model(&self) -> Option<ViewModel> {
        self.base().view_model()
    }

    fn set_view_model(&self, view_model: Option<ViewModel>) {
        self.base().set_view_model(view_model);
    }

    /// The node this view is attached to, if it still exists
    fn node(&self) -> Option<Node> {
        self.base().node()
    }

    fn as_loadable(&self) -> Option<&dyn Loadable> {
        None
    }

    fn as_activatable(&self) -> Option<&dyn Activatable> {
        None
    }
}

/// Asynchronous setup step, run once after the view has been injected
pub trait Loadable: Send + Sync {
    fn load(&self) -> BoxFuture<'_, Result<(), DynError>>;
}

/// Hooks run when the owner activates or deactivates the view
pub trait Activatable: Send + Sync {
    fn activate(&self);
    fn deactivate(&self);
}

/// Marks the view active and runs its activation hook
pub fn activate(view: &dyn View) {
    view.set_active(true);
    if let Some(activatable) = view.as_activatable() {
        activatable.activate();
    }
}

/// Runs the deactivation hook and marks the view inactive
pub fn deactivate(view: &dyn View) {
    if let Some(activatable) = view.as_activatable() {
        activatable.deactivate();
    }
    view.set_active(false);
}

/// State shared by every view
///
/// Views of an instantiated node own it until it is destroyed, views of any
/// other node only refer to it.
#[derive(Default)]
pub struct ViewBase {
    active: AtomicBool,
    view_model: Mutex<Option<ViewModel>>,
    node: Mutex<WeakNode>,
    owner: Mutex<Option<Node>>,
}

impl ViewBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state a copy of this view starts with
    ///
    /// Only the active flag is carried over, view-model and node belong to the original.
    pub fn duplicate(&self) -> Self {
        ViewBase {
            active: AtomicBool::new(self.is_active()),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Release);
    }

    pub fn view_model(&self) -> Option<ViewModel> {
        lock(&self.view_model).clone()
    }

    pub fn set_view_model(&self, view_model: Option<ViewModel>) {
        *lock(&self.view_model) = view_model;
    }

    pub fn node(&self) -> Option<Node> {
        if let Some(owner) = &*lock(&self.owner) {
            return Some(owner.clone());
        }
        lock(&self.node).upgrade()
    }

    pub(crate) fn attach(&self, node: &Node) {
        *lock(&self.node) = node.downgrade();
    }

    pub(crate) fn own(&self, node: &Node) {
        *lock(&self.owner) = Some(node.clone());
    }

    pub(crate) fn release(&self) {
        let owner = lock(&self.owner).take();
        drop(owner);
    }
}

impl Debug for ViewBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewBase")
            .field("active", &self.is_active())
            .field("view_model", &self.view_model())
            .field("node", &*lock(&self.node))
            .finish()
    }
}

impl Debug for dyn View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("View")
            .field(&self.component_type().short_name())
            .field(&self.is_active())
            .finish()
    }
}

// The guarded values are plain slots, a panic elsewhere can't leave them half written
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
