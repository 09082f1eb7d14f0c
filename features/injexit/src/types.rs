use std::{
    any::{Any, TypeId},
    fmt::Debug,
    sync::Arc,
};

/// All errors must be Send + Sync so they can cross threads
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// We assume that we are using a multithreaded async runtime
/// So anything injectable needs to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A type erased, shared value together with the type it was created from
#[derive(Clone)]
pub struct Instance {
    info: TypeInfo,
    value: Arc<dyn Any + Send + Sync + 'static>,
}
impl Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

impl Instance {
    pub fn new<T: Injectable>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared value without cloning it
    pub fn from_arc<T: Injectable>(value: Arc<T>) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            value,
        }
    }

    pub fn type_info(&self) -> TypeInfo {
        self.info
    }

    pub fn is<T: Injectable>(&self) -> bool {
        self.info.type_id == TypeId::of::<T>()
    }

    /// Returns the typed value, or the name of the actual type on mismatch
    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.value.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }
}

/// Information about a Factory dependency
#[derive(Debug, Clone, Copy)]
pub struct DependencyInfo {
    /// The required Type
    pub type_info: TypeInfo,
    /// If it is optional or required
    pub optional: bool,
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// The type name without its module path, e.g. `BarView` for `app::views::BarView`
    ///
    /// Generic arguments are kept as written.
    pub fn short_name(&self) -> &'static str {
        let path_end = self.type_name.find('<').unwrap_or(self.type_name.len());
        match self.type_name[..path_end].rfind("::") {
            Some(index) => &self.type_name[index + 2..],
            None => self.type_name,
        }
    }
}
