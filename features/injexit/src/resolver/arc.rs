use std::{any::type_name, sync::Arc};

use crate::{
    container::Container,
    errors::{InjectError, RequireError},
    initiator::DiHandle,
    resolver::{Resolve, Resolver},
    types::{DependencyInfo, Injectable, TypeInfo},
};

/// `Arc<T>` is a required dependency on `T`
impl<T: Injectable> Resolver for Arc<T> {
    async fn resolve(handle: &mut DiHandle) -> Result<Self, InjectError> {
        let instance = handle.request(TypeInfo::of::<T>()).await?;

        instance.downcast::<T>().map_err(|actual_type| {
            RequireError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            }
            .into()
        })
    }

    fn dependency_info() -> DependencyInfo {
        DependencyInfo {
            type_info: TypeInfo::of::<T>(),
            optional: false,
        }
    }
}

impl<T: Injectable> Resolve for Arc<T> {
    fn resolve_from(container: &Container) -> Result<Self, InjectError> {
        Ok(container.require::<T>()?)
    }
}

/// `Option<R>` turns a missing or disabled dependency into `None`
impl<R: Resolver> Resolver for Option<R> {
    async fn resolve(handle: &mut DiHandle) -> Result<Self, InjectError>
    where
        Self: Sized,
    {
        optional(R::resolve(handle).await)
    }

    fn dependency_info() -> DependencyInfo {
        DependencyInfo {
            optional: true,
            ..R::dependency_info()
        }
    }
}

impl<R: Resolve> Resolve for Option<R> {
    fn resolve_from(container: &Container) -> Result<Self, InjectError> {
        optional(R::resolve_from(container))
    }
}

fn optional<R>(resolved: Result<R, InjectError>) -> Result<Option<R>, InjectError> {
    match resolved {
        Ok(resolved) => Ok(Some(resolved)),
        Err(err) if err.is_unavailable() => Ok(None),
        Err(err) => Err(err),
    }
}
