use std::{convert::Infallible, future::Future};

use futures::{future::BoxFuture, FutureExt};

use crate::{
    initiator::DiHandle,
    types::{DependencyInfo, DynError, Injectable, Instance, TypeInfo},
};

/// Produces the value of one type while the [Container](crate::Container) is built
///
/// All factories of a builder run concurrently. A factory has to declare everything it
/// resolves through its [DiHandle] in [Factory::dependencies], so the dependency graph can
/// be checked before anything is constructed.
pub trait Factory: Send + Sync {
    type Provides: Injectable;

    fn supplies() -> TypeInfo {
        TypeInfo::of::<Self::Provides>()
    }

    fn dependencies() -> Vec<DependencyInfo>;

    fn construct(
        &mut self,
        di: DiHandle,
    ) -> impl Future<Output = Result<Self::Provides, impl Into<DynError>>> + Send + '_;

    /// A disabled factory provides nothing, optional dependents resolve it to `None`
    fn is_enabled(
        &mut self,
        di: DiHandle,
    ) -> impl Future<Output = Result<bool, impl Into<DynError>>> + Send + '_ {
        drop(di);
        async { Ok::<_, Infallible>(true) }
    }
}

/// Object safe view on a [Factory]
pub(crate) trait DynFactory: Send {
    fn supplies(&self) -> TypeInfo;

    fn dependencies(&self) -> Vec<DependencyInfo>;

    /// Constructs the product, `None` if the factory is disabled
    fn produce(&mut self, di: DiHandle) -> BoxFuture<'_, Result<Option<Instance>, DynError>>;
}

impl<F: Factory> DynFactory for F {
    fn supplies(&self) -> TypeInfo {
        <F as Factory>::supplies()
    }

    fn dependencies(&self) -> Vec<DependencyInfo> {
        <F as Factory>::dependencies()
    }

    fn produce(&mut self, di: DiHandle) -> BoxFuture<'_, Result<Option<Instance>, DynError>> {
        async move {
            if !self.is_enabled(di.clone()).await.map_err(Into::<DynError>::into)? {
                return Ok(None);
            }

            let product = self.construct(di).await.map_err(Into::<DynError>::into)?;
            Ok::<_, DynError>(Some(Instance::new(product)))
        }
        .boxed()
    }
}
