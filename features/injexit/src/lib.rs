//! Injexit is an async dependency injection container.
//!
//! It works in two phases:
//! 1. [ContainerBuilder] collects ready instances and [Factory]s. On build, the
//!    dependency graph is validated and all factories are constructed concurrently,
//!    resolving their dependencies through a [DiHandle].
//! 2. The finished [Container] hands out instances and performs runtime
//!    injection into objects created later on, through the [Injector] trait.
//!
//! ```rust
//! # use std::sync::Arc;
//! # use injexit::{ContainerBuilder, DependencyInfo, DiHandle, Factory, InjectError, Resolver};
//! struct Greeting(String);
//!
//! struct GreetingFactory;
//! impl Factory for GreetingFactory {
//!     type Provides = Greeting;
//!
//!     fn dependencies() -> Vec<DependencyInfo> {
//!         vec![Arc::<String>::dependency_info()]
//!     }
//!
//!     async fn construct(&mut self, mut di: DiHandle) -> Result<Greeting, InjectError> {
//!         let name = di.resolve::<Arc<String>>().await?;
//!         Ok(Greeting(format!("Hello {name}")))
//!     }
//! }
//!
//! let container = futures::executor::block_on(
//!     ContainerBuilder::new()
//!         .add_instance("world".to_string())
//!         .add_factory(GreetingFactory)
//!         .build(),
//! )
//! .unwrap();
//!
//! assert_eq!(container.require::<Greeting>().unwrap().0, "Hello world");
//! ```

pub mod builder;
pub mod container;
pub mod dependency_graph;
pub mod errors;
pub mod factories;
pub mod inject;
pub mod initiator;
pub mod resolver;
pub mod types;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use dependency_graph::{DependencyGraph, DependencyGraphError, DependencyGraphErrors};
pub use errors::{InitError, InjectError, RequireError};
pub use factories::Factory;
pub use inject::{Inject, Injector};
pub use initiator::DiHandle;
pub use resolver::{Resolve, Resolver};
pub use types::{DependencyInfo, DynError, Injectable, Instance, TypeInfo};
