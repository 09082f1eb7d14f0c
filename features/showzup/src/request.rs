use std::{fmt::Debug, sync::Arc};

use injexit::{Injectable, TypeInfo};
use loadzup::AssetUri;

use crate::view::{Model, View, ViewModel};

/// Description of what to show
///
/// Which fields are set decides how the view is produced, see [ViewRequest::classify].
#[derive(Clone, Default)]
pub struct ViewRequest {
    pub view: Option<Arc<dyn View>>,
    pub view_model: Option<ViewModel>,
    pub model: Option<Model>,
    pub view_model_type: Option<TypeInfo>,
    pub view_type: Option<TypeInfo>,
    pub uri: Option<AssetUri>,
}

/// A classified [ViewRequest]
pub enum RequestShape {
    /// Use an existing view, nothing is fetched
    PreBuilt {
        view: Arc<dyn View>,
        view_model: Option<ViewModel>,
    },
    /// Build the view-model from the model, then fetch and instantiate the view
    FullSpec {
        model: Model,
        view_model_type: TypeInfo,
        view_type: TypeInfo,
        uri: AssetUri,
    },
    /// Fetch and instantiate the view for an existing view-model
    PartialSpec {
        view_model: Option<ViewModel>,
        view_type: TypeInfo,
        uri: AssetUri,
    },
    /// Nothing to show
    Empty,
}

impl ViewRequest {
    pub fn prebuilt(view: Arc<dyn View>, view_model: Option<ViewModel>) -> Self {
        ViewRequest {
            view: Some(view),
            view_model,
            ..Default::default()
        }
    }

    pub fn from_model<VM: Injectable, V: View>(model: Model, uri: impl Into<AssetUri>) -> Self {
        ViewRequest {
            model: Some(model),
            view_model_type: Some(TypeInfo::of::<VM>()),
            view_type: Some(TypeInfo::of::<V>()),
            uri: Some(uri.into()),
            ..Default::default()
        }
    }

    pub fn from_view_model<V: View>(
        view_model: Option<ViewModel>,
        uri: impl Into<AssetUri>,
    ) -> Self {
        ViewRequest {
            view_model,
            view_type: Some(TypeInfo::of::<V>()),
            uri: Some(uri.into()),
            ..Default::default()
        }
    }

    /// Decides how the request is served
    ///
    /// The first matching shape wins: a set `view` always makes the request pre-built,
    /// a complete model description beats a view-model one. Anything else is empty.
    pub fn classify(self) -> RequestShape {
        match self {
            ViewRequest {
                view: Some(view),
                view_model,
                ..
            } => RequestShape::PreBuilt { view, view_model },
            ViewRequest {
                model: Some(model),
                view_model_type: Some(view_model_type),
                view_type: Some(view_type),
                uri: Some(uri),
                ..
            } => RequestShape::FullSpec {
                model,
                view_model_type,
                view_type,
                uri,
            },
            ViewRequest {
                view_model,
                view_type: Some(view_type),
                uri: Some(uri),
                ..
            } => RequestShape::PartialSpec {
                view_model,
                view_type,
                uri,
            },
            _ => RequestShape::Empty,
        }
    }
}

impl RequestShape {
    pub fn name(&self) -> &'static str {
        match self {
            RequestShape::PreBuilt { .. } => "pre-built",
            RequestShape::FullSpec { .. } => "full-spec",
            RequestShape::PartialSpec { .. } => "partial-spec",
            RequestShape::Empty => "empty",
        }
    }
}

impl Debug for ViewRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRequest")
            .field(
                "view",
                &self.view.as_ref().map(|view| view.component_type().type_name),
            )
            .field("view_model", &self.view_model)
            .field("model", &self.model)
            .field("view_model_type", &self.view_model_type)
            .field("view_type", &self.view_type)
            .field("uri", &self.uri)
            .finish()
    }
}

impl Debug for RequestShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
