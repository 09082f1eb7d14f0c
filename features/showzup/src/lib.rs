//! Showzup loads views for display.
//!
//! A [ViewRequest] either carries a ready view, or describes one by view type and
//! template [AssetUri](loadzup::AssetUri), optionally with a model to derive the
//! view-model from. The [ViewLoader] fetches the template through a
//! [Loader](loadzup::Loader), instantiates it with the [Materializer], binds the
//! view-model, injects dependencies and runs the view's [Loadable] step.
//!
//! ```rust
//! # use std::sync::Arc;
//! # use futures::executor::block_on;
//! # use injexit::Container;
//! # use loadzup::MemoryLoader;
//! # use showzup::{
//! #     CancellationToken, Component, Node, View, ViewBase, ViewLoader, ViewModelRegistry,
//! #     ViewRequest,
//! # };
//! #[derive(Default)]
//! struct Greeting {
//!     base: ViewBase,
//! }
//! impl Component for Greeting {
//!     fn duplicate(&self) -> Arc<dyn Component> {
//!         Arc::new(Greeting {
//!             base: self.base.duplicate(),
//!         })
//!     }
//!
//!     fn into_view(self: Arc<Self>) -> Option<Arc<dyn View>> {
//!         Some(self)
//!     }
//! }
//! impl View for Greeting {
//!     fn base(&self) -> &ViewBase {
//!         &self.base
//!     }
//! }
//!
//! let assets = MemoryLoader::new();
//! assets.insert("ui/Greeting", Node::new("Greeting", vec![Arc::new(Greeting::default())]));
//!
//! let container = Container::default();
//! let views = ViewLoader::new(
//!     Arc::new(assets),
//!     Arc::new(container.clone()),
//!     Arc::new(ViewModelRegistry::new(container)),
//! );
//!
//! let request = ViewRequest::from_view_model::<Greeting>(None, "ui/Greeting");
//! let view = block_on(views.load(request, &CancellationToken::new()))
//!     .unwrap()
//!     .unwrap();
//! assert!(!view.is_active());
//! ```

pub mod config;
pub mod errors;
pub mod logger;
pub mod materializer;
pub mod request;
pub mod scene;
pub mod view;
pub mod view_loader;
pub mod view_model;

pub use config::ShowzupConfig;
pub use errors::{LoadError, ViewModelError};
pub use logger::{Logger, TracingLogger};
pub use materializer::{ExecutionMode, Materializer};
pub use request::{RequestShape, ViewRequest};
pub use scene::{Component, Node, WeakNode};
pub use tokio_util::sync::CancellationToken;
pub use view::{activate, deactivate, Activatable, Loadable, Model, View, ViewBase, ViewModel};
pub use view_loader::ViewLoader;
pub use view_model::{ViewModelFactory, ViewModelRegistry};
