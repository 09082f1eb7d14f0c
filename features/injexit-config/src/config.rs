use std::{any::type_name, fmt::Debug, ops::Deref, sync::Arc};

use injexit::{
    Container, DependencyInfo, DiHandle, InjectError, RequireError, Resolve, Resolver, TypeInfo,
};

use crate::provider::ConfigProvider;

/// A wrapper type to allow for config injections
///
/// Resolves the config of type `T` from the [ConfigProvider] registered in the container.
/// Wrap it in an `Option` to fall back to defaults when the config is absent.
///
/// # Example
/// ```rust
/// # use std::sync::Arc;
/// # use injexit::ContainerBuilder;
/// # use injexit_config::{Config, ConfigProvider};
/// struct ServerConfig {
///     port: u16,
/// }
///
/// let mut provider = ConfigProvider::new();
/// provider.add_config(ServerConfig { port: 8080 }).unwrap();
///
/// let container = futures::executor::block_on(
///     ContainerBuilder::new().add_instance(provider).build(),
/// )
/// .unwrap();
///
/// let config = container.resolve::<Config<ServerConfig>>().unwrap();
/// assert_eq!(config.port, 8080);
/// ```
pub struct Config<T> {
    inner: Arc<T>,
}
impl<T> Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T: Debug> Debug for Config<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Config").field(&self.inner).finish()
    }
}
impl<T> Config<T> {
    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }

    fn from_provider(provider: &ConfigProvider) -> Result<Self, InjectError>
    where
        T: Send + Sync + 'static,
    {
        let inner = provider
            .get_config()
            .map_err(|e| InjectError::Other(Box::new(e)))?
            .ok_or_else(|| InjectError::RequireError(RequireError::TypeMissing(type_name::<T>())))?;

        Ok(Config { inner })
    }
}

impl<T: Send + Sync + 'static> Resolver for Config<T> {
    async fn resolve(handle: &mut DiHandle) -> Result<Self, InjectError>
    where
        Self: Sized,
    {
        let config_provider = handle.resolve::<Arc<ConfigProvider>>().await?;
        Self::from_provider(&config_provider)
    }

    fn dependency_info() -> DependencyInfo {
        DependencyInfo {
            type_info: TypeInfo::of::<ConfigProvider>(),
            optional: false,
        }
    }
}

impl<T: Send + Sync + 'static> Resolve for Config<T> {
    fn resolve_from(container: &Container) -> Result<Self, InjectError> {
        let config_provider = container.require::<ConfigProvider>()?;
        Self::from_provider(&config_provider)
    }
}
