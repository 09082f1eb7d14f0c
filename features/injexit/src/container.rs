use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
};

use crate::{
    dependency_graph::DependencyGraph,
    errors::{InjectError, RequireError},
    resolver::Resolve,
    types::{Injectable, Instance, TypeInfo},
};

/// The built set of instances
///
/// Clones share the same instances. The default container is empty, every
/// required dependency is missing from it.
#[derive(Clone, Default)]
pub struct Container(Arc<Registry>);

#[derive(Default)]
struct Registry {
    /// `None` marks a type whose factory was disabled
    slots: HashMap<TypeId, (TypeInfo, Option<Instance>)>,
    graph: DependencyGraph,
}

impl Container {
    pub(crate) fn new(
        slots: HashMap<TypeId, (TypeInfo, Option<Instance>)>,
        graph: DependencyGraph,
    ) -> Self {
        Container(Arc::new(Registry { slots, graph }))
    }

    pub fn require<T: Injectable>(&self) -> Result<Arc<T>, RequireError> {
        let Some((_, slot)) = self.0.slots.get(&TypeId::of::<T>()) else {
            return Err(RequireError::TypeMissing(type_name::<T>()));
        };
        let instance = slot
            .as_ref()
            .ok_or(RequireError::TypeDisabled(type_name::<T>()))?;

        instance
            .downcast()
            .map_err(|actual_type| RequireError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            })
    }

    /// Resolves anything implementing [Resolve], e.g. `Arc<T>` or `Option<Arc<T>>`
    pub fn resolve<R: Resolve>(&self) -> Result<R, InjectError> {
        R::resolve_from(self)
    }

    /// Whether an enabled instance of `T` is available
    pub fn contains<T: Injectable>(&self) -> bool {
        matches!(self.0.slots.get(&TypeId::of::<T>()), Some((_, Some(_))))
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.0.graph
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.slots.values().map(|(info, slot)| {
                let state = if slot.is_some() { "enabled" } else { "disabled" };
                (info.type_name, state)
            }))
            .finish()
    }
}
