use std::{any::TypeId, collections::HashMap, fmt::Debug, sync::Arc};

use injexit::{Instance, TypeInfo};

use crate::errors::ConfigError;

/// Registry holding at most one config value per type
///
/// Register the provider itself as an instance of the container, configs are
/// then resolved through [Config](crate::Config).
#[derive(Default)]
pub struct ConfigProvider {
    configs: HashMap<TypeId, Instance>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The config of type `T`, `Ok(None)` if none was registered
    pub fn get_config<T: Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>, ConfigError> {
        let Some(config) = self.configs.get(&TypeId::of::<T>()) else {
            return Ok(None);
        };

        config
            .downcast()
            .map(Some)
            .map_err(|_| ConfigError::Mismatch(config.type_info()))
    }

    /// Registers `config`, failing with [ConfigError::AlreadyRegistered] if its type already is
    pub fn add_config<T: Send + Sync + 'static>(
        &mut self,
        config: T,
    ) -> Result<&mut Self, ConfigError> {
        let info = TypeInfo::of::<T>();
        if self.configs.contains_key(&info.type_id) {
            return Err(ConfigError::AlreadyRegistered(info));
        }

        self.configs.insert(info.type_id, Instance::new(config));
        Ok(self)
    }

    /// [ConfigProvider::add_config] for `Some`, a no-op for `None`
    pub fn maybe_add_config<T: Send + Sync + 'static>(
        &mut self,
        config: Option<T>,
    ) -> Result<&mut Self, ConfigError> {
        match config {
            Some(config) => self.add_config(config),
            None => Ok(self),
        }
    }
}

impl Debug for ConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.configs.values().map(|config| config.type_info().type_name))
            .finish()
    }
}
