use std::{any::TypeId, collections::HashMap, fmt::Debug, sync::Arc};

use injexit::{Container, InjectError, Injectable, Instance, TypeInfo};

use crate::{
    errors::ViewModelError,
    view::{Model, ViewModel},
};

/// Creates view-models from models
pub trait ViewModelFactory: Send + Sync {
    fn create(&self, model: &Model, view_model_type: TypeInfo) -> Result<ViewModel, ViewModelError>;
}

type Constructor =
    Box<dyn Fn(&Model, &Container) -> Result<ViewModel, ViewModelError> + Send + Sync>;

/// [ViewModelFactory] backed by constructors registered per model and view-model type
///
/// Constructors receive the registry's container to resolve the view-model's dependencies.
pub struct ViewModelRegistry {
    container: Container,
    constructors: HashMap<(TypeId, TypeId), (TypeInfo, TypeInfo, Constructor)>,
}

impl ViewModelRegistry {
    pub fn new(container: Container) -> Self {
        ViewModelRegistry {
            container,
            constructors: HashMap::new(),
        }
    }

    /// Registers how to build a `VM` for a `M`, replacing any previous constructor for the pair
    pub fn register<M, VM, F>(mut self, construct: F) -> Self
    where
        M: Injectable,
        VM: Injectable,
        F: Fn(Arc<M>, &Container) -> Result<VM, InjectError> + Send + Sync + 'static,
    {
        let model_type = TypeInfo::of::<M>();
        let view_model_type = TypeInfo::of::<VM>();

        let constructor = move |model: &Model, container: &Container| {
            let model = model
                .downcast::<M>()
                .map_err(|actual| ViewModelError::ModelMismatch {
                    expected: model_type,
                    actual,
                })?;
            Ok(Instance::new(construct(model, container)?))
        };

        self.constructors.insert(
            (model_type.type_id, view_model_type.type_id),
            (model_type, view_model_type, Box::new(constructor)),
        );
        self
    }
}

impl ViewModelFactory for ViewModelRegistry {
    fn create(
        &self,
        model: &Model,
        view_model_type: TypeInfo,
    ) -> Result<ViewModel, ViewModelError> {
        let model_type = model.type_info();
        let (_, _, constructor) = self
            .constructors
            .get(&(model_type.type_id, view_model_type.type_id))
            .ok_or(ViewModelError::Unregistered {
                model: model_type,
                view_model: view_model_type,
            })?;

        constructor(model, &self.container)
    }
}

impl Debug for ViewModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.constructors
                    .values()
                    .map(|(model, view_model, _)| (model.type_name, view_model.type_name)),
            )
            .finish()
    }
}
