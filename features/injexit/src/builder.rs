use std::{sync::Arc, time::Duration};

use crate::{
    container::Container,
    errors::InitError,
    factories::{DynFactory, Factory},
    initiator::Initiator,
    types::{Injectable, Instance},
};

/// Collects everything the [Container] should provide
///
/// Instances are available as they are, factories are constructed concurrently
/// during [ContainerBuilder::build] and may depend on each other.
pub struct ContainerBuilder {
    /// Registered factories which can provide instances
    pub(crate) registered_factories: Vec<Box<dyn DynFactory>>,
    /// Registered already created instances
    pub(crate) registered_instances: Vec<Instance>,
}
impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field("factories", &self.registered_factories.len())
            .field("instances", &self.registered_instances)
            .finish()
    }
}

impl ContainerBuilder {
    pub fn new() -> Self {
        ContainerBuilder {
            registered_factories: Vec::new(),
            registered_instances: Vec::new(),
        }
    }

    pub fn add_instance<T: Injectable>(mut self, instance: T) -> Self {
        self.registered_instances.push(Instance::new(instance));
        self
    }

    /// Registers a value that is already shared elsewhere
    pub fn add_shared<T: Injectable>(mut self, instance: Arc<T>) -> Self {
        self.registered_instances.push(Instance::from_arc(instance));
        self
    }

    pub fn add_factory<F: Factory + 'static>(mut self, factory: F) -> Self {
        self.registered_factories.push(Box::new(factory));
        self
    }

    pub async fn build(self) -> Result<Container, InitError> {
        Initiator::new().initiate(self, None).await
    }

    pub async fn build_timeout(self, timeout: Duration) -> Result<Container, InitError> {
        Initiator::new().initiate(self, Some(timeout)).await
    }
}
