use injexit::{DynError, InjectError, TypeInfo};
use loadzup::{AssetUri, FetchError};
use thiserror::Error;

/// Errors of [ViewLoader::load](crate::ViewLoader::load)
///
/// Cancellation is not an error, a cancelled load resolves to no view.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The template could not be fetched
    #[error("Failed to load view '{}' from '{uri}': {source}", .view_type.short_name())]
    Fetch {
        view_type: TypeInfo,
        uri: AssetUri,
        #[source]
        source: FetchError,
    },
    /// The instantiated template has no component of the requested view type
    #[error("Loaded template '{instance}' has no view component of type '{}'", .view_type.short_name())]
    MissingViewComponent {
        instance: String,
        view_type: TypeInfo,
    },
    /// A required dependency of the view could not be injected
    #[error(transparent)]
    Injection(#[from] InjectError),
    /// The view-model could not be created from the model
    #[error("Failed to create view-model '{}': {source}", .view_model_type.short_name())]
    ViewModel {
        view_model_type: TypeInfo,
        #[source]
        source: ViewModelError,
    },
    /// The view's own load step failed
    #[error("View '{}' failed to load: {source}", .view.short_name())]
    Initialization { view: TypeInfo, source: DynError },
}

/// Errors of a [ViewModelFactory](crate::ViewModelFactory)
#[derive(Error, Debug)]
pub enum ViewModelError {
    #[error("No view-model '{view_model}' is registered for model '{model}'")]
    Unregistered {
        model: TypeInfo,
        view_model: TypeInfo,
    },
    #[error("Expected a model of type '{expected}', got '{actual}'")]
    ModelMismatch {
        expected: TypeInfo,
        actual: &'static str,
    },
    #[error(transparent)]
    Injection(#[from] InjectError),
}
