use std::{
    any::TypeId,
    collections::{BTreeMap, HashSet},
};

use thiserror::Error;

use crate::{
    builder::ContainerBuilder,
    types::{DependencyInfo, TypeInfo},
};

/// Graph of every registered type and what it depends on
///
/// Used to reject circular or missing dependencies before any factory runs.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    map: BTreeMap<TypeId, DependencyGraphEntry>,
}
impl DependencyGraph {
    pub fn new(builder: &ContainerBuilder) -> Result<Self, DependencyGraphErrors> {
        let mut graph = Self::default();
        let mut errors = Vec::new();

        let registered = builder
            .registered_instances
            .iter()
            .map(|instance| (instance.type_info(), Vec::new()))
            .chain(
                builder
                    .registered_factories
                    .iter()
                    .map(|factory| (factory.supplies(), factory.dependencies())),
            );

        for (info, dependencies) in registered {
            if let Err(error) = graph.add(info, dependencies) {
                errors.push(error);
            }
        }

        if !errors.is_empty() {
            return Err(DependencyGraphErrors { errors });
        }
        Ok(graph)
    }

    pub fn add(
        &mut self,
        info: TypeInfo,
        dependencies: Vec<DependencyInfo>,
    ) -> Result<(), DependencyGraphError> {
        if self.map.contains_key(&info.type_id) {
            return Err(DependencyGraphError::Duplicate(info));
        }
        self.map
            .insert(info.type_id, DependencyGraphEntry { info, dependencies });

        Ok(())
    }

    /// Whether the type is registered at all
    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.map.contains_key(&info.type_id)
    }

    /// The registered dependencies of a type
    pub fn dependencies_of(&self, info: &TypeInfo) -> Option<&[DependencyInfo]> {
        self.map
            .get(&info.type_id)
            .map(|entry| entry.dependencies.as_slice())
    }

    /// Reports every missing required dependency and every cycle at once
    pub fn check(&self) -> Result<(), DependencyGraphErrors> {
        let mut walk = Walk {
            graph: self,
            visited: HashSet::new(),
            path: Vec::new(),
            errors: Vec::new(),
        };
        for entry in self.map.values() {
            walk.visit(entry);
        }

        if walk.errors.is_empty() {
            Ok(())
        } else {
            Err(DependencyGraphErrors {
                errors: walk.errors,
            })
        }
    }
}

#[derive(Debug)]
struct DependencyGraphEntry {
    info: TypeInfo,
    dependencies: Vec<DependencyInfo>,
}

/// Depth first traversal, `path` holds the chain of dependents leading to the current entry
struct Walk<'g> {
    graph: &'g DependencyGraph,
    visited: HashSet<TypeId>,
    path: Vec<TypeInfo>,
    errors: Vec<DependencyGraphError>,
}

impl<'g> Walk<'g> {
    fn visit(&mut self, entry: &'g DependencyGraphEntry) {
        if let Some(start) = self.path.iter().position(|info| *info == entry.info) {
            let mut chain = self.path[start..].to_vec();
            chain.push(entry.info);
            self.errors.push(DependencyGraphError::CircularDependency {
                from: self.path[start],
                to: entry.info,
                chain,
            });
            return;
        }
        if !self.visited.insert(entry.info.type_id) {
            return;
        }

        let graph = self.graph;
        self.path.push(entry.info);
        for dependency in &entry.dependencies {
            match graph.map.get(&dependency.type_info.type_id) {
                Some(next) => self.visit(next),
                None if dependency.optional => {}
                None => self.errors.push(DependencyGraphError::MissingDependency {
                    dependency: dependency.type_info,
                    required_by: entry.info,
                }),
            }
        }
        self.path.pop();
    }
}

#[derive(Error, Debug, Clone)]
pub enum DependencyGraphError {
    #[error("'{0}' is registered more than once")]
    Duplicate(TypeInfo),
    #[error("'{required_by}' requires '{dependency}', which is not registered")]
    MissingDependency {
        dependency: TypeInfo,
        required_by: TypeInfo,
    },
    #[error("'{from}' and '{to}' depend on each other: {chain:?}")]
    CircularDependency {
        from: TypeInfo,
        to: TypeInfo,
        chain: Vec<TypeInfo>,
    },
}

/// All problems found in a [DependencyGraph]
#[derive(Error, Debug, Clone)]
pub struct DependencyGraphErrors {
    pub errors: Vec<DependencyGraphError>,
}

impl std::fmt::Display for DependencyGraphErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid dependency graph:")?;
        for error in &self.errors {
            write!(f, "\n - {error}")?;
        }
        Ok(())
    }
}
