use crate::{container::Container, errors::InjectError, initiator::DiHandle, types::DependencyInfo};

pub mod arc;

/// Allows custom behaviour on injection while the container is being built
pub trait Resolver {
    #[allow(async_fn_in_trait)]
    async fn resolve(handle: &mut DiHandle) -> Result<Self, InjectError>
    where
        Self: Sized;

    fn dependency_info() -> DependencyInfo;
}

/// Resolution from a finished [Container]
///
/// Used when injecting into objects created after the container was built.
pub trait Resolve: Sized {
    fn resolve_from(container: &Container) -> Result<Self, InjectError>;
}
