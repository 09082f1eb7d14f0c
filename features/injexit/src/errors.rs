use std::sync::Arc;

use futures_channel::{mpsc, oneshot};
use thiserror::Error;

use crate::{dependency_graph::DependencyGraphErrors, types::DynError};

/// Failure to hand a dependency to a factory or an injection target
#[derive(Error, Debug)]
pub enum InjectError {
    #[error(transparent)]
    RequireError(#[from] RequireError),
    /// The [DiHandle](crate::DiHandle) outlived the build it belongs to
    #[error("DI handle used after the container was built")]
    HandleClosed,
    #[error("Injection failed: {0}")]
    Other(DynError),
}

impl InjectError {
    /// Whether the dependency simply isn't there
    ///
    /// Optional dependencies resolve to `None` on these.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            InjectError::RequireError(RequireError::TypeMissing(_) | RequireError::TypeDisabled(_))
        )
    }
}

// Both channel ends only close when the initiator is gone
impl From<mpsc::SendError> for InjectError {
    fn from(_: mpsc::SendError) -> Self {
        InjectError::HandleClosed
    }
}
impl From<oneshot::Canceled> for InjectError {
    fn from(_: oneshot::Canceled) -> Self {
        InjectError::HandleClosed
    }
}

#[derive(Error, Debug, Clone)]
pub enum RequireError {
    #[error("'{0}' is not registered")]
    TypeMissing(&'static str),
    #[error("'{0}' is registered but its factory is disabled")]
    TypeDisabled(&'static str),
    #[error(transparent)]
    InitError(#[from] InitError),
    #[error("Expected an instance of '{required_type}', found '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Reasons a [ContainerBuilder](crate::ContainerBuilder) fails to build
#[derive(Error, Debug, Clone)]
pub enum InitError {
    #[error(transparent)]
    DependencyGraphError(#[from] DependencyGraphErrors),
    #[error("Factory for '{product}' failed: {error}")]
    FactoryFailed {
        product: &'static str,
        error: Arc<DynError>,
    },
    #[error("Container build timed out")]
    Timeout,
}
