use crate::{container::Container, errors::InjectError};

/// An object graph which can have its dependencies filled in place
///
/// Implementors pull what they need from the container, usually through
/// [Container::resolve]. Optional dependencies must not fail when missing.
pub trait Inject {
    fn inject(&self, container: &Container) -> Result<(), InjectError>;
}

/// Performs injection into object graphs created outside of the container
pub trait Injector: Send + Sync {
    fn inject(&self, target: &dyn Inject) -> Result<(), InjectError>;
}

impl Injector for Container {
    fn inject(&self, target: &dyn Inject) -> Result<(), InjectError> {
        target.inject(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures::executor::block_on;

    use crate::{ContainerBuilder, RequireError};

    use super::*;

    #[derive(Default)]
    struct Greeter {
        name: Mutex<Option<Arc<String>>>,
        volume: Mutex<Option<Arc<u32>>>,
    }
    impl Inject for Greeter {
        fn inject(&self, container: &Container) -> Result<(), InjectError> {
            *self.name.lock().unwrap() = Some(container.resolve()?);
            *self.volume.lock().unwrap() = container.resolve()?;
            Ok(())
        }
    }

    #[test]
    fn container_fills_required_and_optional_dependencies() {
        let container = block_on(
            ContainerBuilder::new()
                .add_instance("world".to_string())
                .build(),
        )
        .unwrap();

        let greeter = Greeter::default();
        Injector::inject(&container, &greeter).unwrap();

        assert_eq!(greeter.name.lock().unwrap().as_deref().map(String::as_str), Some("world"));
        assert!(greeter.volume.lock().unwrap().is_none());
    }

    #[test]
    fn missing_required_dependency_fails() {
        let greeter = Greeter::default();
        let err = Injector::inject(&Container::default(), &greeter).unwrap_err();

        assert!(matches!(err, InjectError::RequireError(RequireError::TypeMissing(_))));
        assert!(greeter.name.lock().unwrap().is_none());
    }
}
