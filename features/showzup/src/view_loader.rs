use std::{fmt::Debug, sync::Arc};

use injexit::{Container, Inject, InjectError, Injector, TypeInfo};
use injexit_config::Config;
use loadzup::{AssetUri, FetchError, Loader, LoaderExt};
use tokio_util::sync::CancellationToken;

use crate::{
    config::ShowzupConfig,
    errors::LoadError,
    logger::Logger,
    materializer::Materializer,
    request::{RequestShape, ViewRequest},
    scene::{Component, Node},
    view::{Model, View, ViewModel},
    view_model::ViewModelFactory,
};

const TAG: &str = "ViewLoader";

/// Turns [ViewRequest]s into ready views
///
/// Depending on the request a view is either taken as is or fetched as a template,
/// instantiated and bound to its view-model. Either way the view is injected and loaded
/// before it is returned; the caller decides when to activate it.
pub struct ViewLoader {
    loader: Arc<dyn Loader>,
    injector: Arc<dyn Injector>,
    view_models: Arc<dyn ViewModelFactory>,
    logger: Option<Arc<dyn Logger>>,
    materializer: Materializer,
}

impl ViewLoader {
    pub fn new(
        loader: Arc<dyn Loader>,
        injector: Arc<dyn Injector>,
        view_models: Arc<dyn ViewModelFactory>,
    ) -> Self {
        ViewLoader {
            loader,
            injector,
            view_models,
            logger: None,
            materializer: Materializer::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_config(mut self, config: &ShowzupConfig) -> Self {
        self.materializer = Materializer::new(config.execution_mode);
        self
    }

    /// Wires the pipeline from a container, which also becomes the injector
    ///
    /// Requires `Arc<dyn Loader>` and `Arc<dyn ViewModelFactory>` bindings.
    /// An `Arc<dyn Logger>` binding and a [ShowzupConfig] are picked up when present.
    pub fn from_container(container: &Container) -> Result<Self, InjectError> {
        let loader = container.require::<Arc<dyn Loader>>()?;
        let view_models = container.require::<Arc<dyn ViewModelFactory>>()?;

        let mut view_loader = ViewLoader::new(
            Arc::clone(&*loader),
            Arc::new(container.clone()),
            Arc::clone(&*view_models),
        );

        if let Some(logger) = container.resolve::<Option<Arc<Arc<dyn Logger>>>>()? {
            view_loader = view_loader.with_logger(Arc::clone(&*logger));
        }
        if let Some(config) = container.resolve::<Option<Config<ShowzupConfig>>>()? {
            view_loader = view_loader.with_config(&config);
        }

        Ok(view_loader)
    }

    pub fn materializer(&self) -> &Materializer {
        &self.materializer
    }

    /// Produces the view described by `request`
    ///
    /// Resolves to `Ok(None)` for empty requests and when `cancellation` fires before the
    /// view is bound. Pre-built views ignore cancellation. Instances created here are
    /// destroyed again if the load fails.
    pub async fn load(
        &self,
        request: ViewRequest,
        cancellation: &CancellationToken,
    ) -> Result<Option<Arc<dyn View>>, LoadError> {
        let shape = request.classify();
        tracing::trace!("Loading {} view request", shape.name());

        match shape {
            RequestShape::PreBuilt { view, view_model } => {
                self.initialize(&*view, view_model).await?;
                Ok(Some(view))
            }
            RequestShape::FullSpec {
                model,
                view_model_type,
                view_type,
                uri,
            } => {
                if cancellation.is_cancelled() {
                    return Ok(None);
                }

                let view_model = self.create_view_model(&model, view_model_type)?;
                self.load_from_template(Some(view_model), view_type, &uri, cancellation)
                    .await
            }
            RequestShape::PartialSpec {
                view_model,
                view_type,
                uri,
            } => {
                self.load_from_template(view_model, view_type, &uri, cancellation)
                    .await
            }
            RequestShape::Empty => Ok(None),
        }
    }

    fn create_view_model(
        &self,
        model: &Model,
        view_model_type: TypeInfo,
    ) -> Result<ViewModel, LoadError> {
        self.view_models
            .create(model, view_model_type)
            .map_err(|source| {
                let err = LoadError::ViewModel {
                    view_model_type,
                    source,
                };
                self.log_error(|| err.to_string());
                err
            })
    }

    async fn load_from_template(
        &self,
        view_model: Option<ViewModel>,
        view_type: TypeInfo,
        uri: &AssetUri,
        cancellation: &CancellationToken,
    ) -> Result<Option<Arc<dyn View>>, LoadError> {
        if cancellation.is_cancelled() {
            return Ok(None);
        }

        self.log(|| format!("Loading view '{}' from '{uri}'", view_type.short_name()));
        let template = self.fetch_template(view_type, uri).await?;

        if cancellation.is_cancelled() {
            return Ok(None);
        }
        let Some(instance) = self.materializer.materialize(&template, cancellation) else {
            return Ok(None);
        };

        let Some(view) = instance.view_of(view_type) else {
            instance.destroy();
            let err = LoadError::MissingViewComponent {
                instance: instance.name().to_string(),
                view_type,
            };
            self.log_error(|| err.to_string());
            return Err(err);
        };

        if let Err(err) = self.initialize(&*view, view_model).await {
            instance.destroy();
            return Err(err);
        }

        Ok(Some(view))
    }

    async fn fetch_template(&self, view_type: TypeInfo, uri: &AssetUri) -> Result<Node, LoadError> {
        let fetched = match self.loader.load_last::<Node>(uri).await {
            Ok(Some(template)) => Ok(template),
            Ok(None) => Err(FetchError::Empty { uri: uri.clone() }),
            Err(err) => Err(err),
        };

        fetched.map(|template| (*template).clone()).map_err(|source| {
            let err = LoadError::Fetch {
                view_type,
                uri: uri.clone(),
                source,
            };
            self.log_error(|| err.to_string());
            err
        })
    }

    /// Binds, injects and loads the view, in that order
    async fn initialize(
        &self,
        view: &dyn View,
        view_model: Option<ViewModel>,
    ) -> Result<(), LoadError> {
        view.set_view_model(view_model);
        self.log(|| format!("Initializing view '{}'", view.component_type().short_name()));

        match view.node() {
            Some(node) => self.injector.inject(&node)?,
            None => self.injector.inject(&DetachedView(view))?,
        }

        if let Some(loadable) = view.as_loadable() {
            loadable
                .load()
                .await
                .map_err(|source| LoadError::Initialization {
                    view: view.component_type(),
                    source,
                })?;
        }

        Ok(())
    }

    fn log(&self, message: impl FnOnce() -> String) {
        if let Some(logger) = &self.logger {
            logger.log(TAG, &message());
        }
    }

    fn log_error(&self, message: impl FnOnce() -> String) {
        if let Some(logger) = &self.logger {
            logger.log_error(TAG, &message());
        }
    }
}

impl Debug for ViewLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewLoader")
            .field("logger", &self.logger.is_some())
            .field("materializer", &self.materializer)
            .finish_non_exhaustive()
    }
}

/// A view without a node, injected on its own
struct DetachedView<'a>(&'a dyn View);

impl Inject for DetachedView<'_> {
    fn inject(&self, container: &Container) -> Result<(), InjectError> {
        Component::inject(self.0, container)
    }
}
