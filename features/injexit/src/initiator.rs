use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    sync::Arc,
    thread,
    time::Duration,
};

use futures::{future::BoxFuture, stream::FuturesUnordered, FutureExt, SinkExt, StreamExt};
use futures_channel::{mpsc, oneshot};

use crate::{
    builder::ContainerBuilder,
    container::Container,
    dependency_graph::DependencyGraph,
    errors::{InitError, InjectError, RequireError},
    resolver::Resolver,
    types::{DynError, Instance, TypeInfo},
};

type Production = (TypeInfo, Result<Option<Instance>, DynError>);

/// Runs all factories of a builder and answers their requests for each other's products
pub(crate) struct Initiator {
    requests: mpsc::Receiver<DiRequest>,
    handle: DiHandle,

    /// Every type a factory or instance was registered for
    registered: HashSet<TypeId>,
    /// Requests for types whose factory hasn't finished yet
    waiting: HashMap<TypeId, Vec<DiResponseSender<Instance>>>,
    /// Finished products, `None` for disabled factories
    products: HashMap<TypeId, (TypeInfo, Option<Instance>)>,
}

impl Initiator {
    pub(crate) fn new() -> Initiator {
        let (sender, requests) = mpsc::channel(16);
        Initiator {
            requests,
            handle: DiHandle {
                request_sender: sender,
            },
            registered: HashSet::new(),
            waiting: HashMap::new(),
            products: HashMap::new(),
        }
    }

    pub(crate) async fn initiate(
        mut self,
        builder: ContainerBuilder,
        timeout: Option<Duration>,
    ) -> Result<Container, InitError> {
        let graph = DependencyGraph::new(&builder)?;
        graph.check()?;

        // Dropping the sender without a timeout leaves the receiver pending forever
        let (expired_tx, expired) = oneshot::channel::<()>();
        let _keep_pending = match timeout {
            Some(timeout) => {
                thread::spawn(move || {
                    thread::sleep(timeout);
                    let _ = expired_tx.send(());
                });
                None
            }
            None => Some(expired_tx),
        };

        match self.run(builder, expired).await {
            Ok(()) => {
                tracing::debug!("Container built with {} types", self.registered.len());
                Ok(Container::new(self.products, graph))
            }
            Err(err) => {
                let failure = Err(RequireError::from(err.clone()));
                for waiter in self.waiting.into_values().flatten() {
                    let _ = waiter.send(failure.clone());
                }
                Err(err)
            }
        }
    }

    async fn run(
        &mut self,
        builder: ContainerBuilder,
        mut expired: oneshot::Receiver<()>,
    ) -> Result<(), InitError> {
        tracing::debug!(
            "Building container from {} factories and {} instances",
            builder.registered_factories.len(),
            builder.registered_instances.len()
        );

        for instance in builder.registered_instances {
            let info = instance.type_info();
            self.registered.insert(info.type_id);
            self.products.insert(info.type_id, (info, Some(instance)));
        }

        let mut running: FuturesUnordered<BoxFuture<'static, Production>> = builder
            .registered_factories
            .into_iter()
            .map(|mut factory| {
                let info = factory.supplies();
                self.registered.insert(info.type_id);
                let handle = self.handle.clone();

                async move {
                    let produced = factory.produce(handle).await;
                    (info, produced)
                }
                .boxed()
            })
            .collect();
        let total = running.len();

        loop {
            tracing::trace!("{} of {total} factories finished", total - running.len());

            futures::select! {
                request = self.requests.select_next_some() => self.answer(request),
                production = running.next() => match production {
                    Some((info, produced)) => self.store(info, produced)?,
                    None => break,
                },
                _ = expired => return Err(InitError::Timeout),
            }
        }

        debug_assert!(self.waiting.is_empty(), "requests left unanswered");
        Ok(())
    }

    fn store(
        &mut self,
        info: TypeInfo,
        produced: Result<Option<Instance>, DynError>,
    ) -> Result<(), InitError> {
        let product = produced.map_err(|error| {
            tracing::error!("Factory for {} failed: {error}", info.type_name);
            InitError::FactoryFailed {
                product: info.type_name,
                error: Arc::new(error),
            }
        })?;

        match &product {
            Some(_) => tracing::debug!("Constructed {}", info.type_name),
            None => tracing::debug!("Factory for {} is disabled", info.type_name),
        }

        let answer = product
            .clone()
            .ok_or(RequireError::TypeDisabled(info.type_name));
        for waiter in self.waiting.remove(&info.type_id).unwrap_or_default() {
            let _ = waiter.send(answer.clone());
        }

        self.products.insert(info.type_id, (info, product));
        Ok(())
    }

    fn answer(&mut self, request: DiRequest) {
        let DiRequest::Require {
            type_info,
            response_channel,
        } = request;

        if !self.registered.contains(&type_info.type_id) {
            tracing::debug!("{} was required but is not registered", type_info.type_name);
            let _ = response_channel.send(Err(RequireError::TypeMissing(type_info.type_name)));
            return;
        }

        match self.products.get(&type_info.type_id) {
            Some((_, product)) => {
                let _ = response_channel.send(
                    product
                        .clone()
                        .ok_or(RequireError::TypeDisabled(type_info.type_name)),
                );
            }
            None => self
                .waiting
                .entry(type_info.type_id)
                .or_default()
                .push(response_channel),
        }
    }
}

/// Resolves dependencies for a [Factory](crate::Factory) while the [Container] is built
///
/// Only valid during the build, use the [Container] itself afterwards.
#[derive(Clone, Debug)]
pub struct DiHandle {
    pub(crate) request_sender: mpsc::Sender<DiRequest>,
}

impl DiHandle {
    pub async fn resolve<T: Resolver>(&mut self) -> Result<T, InjectError> {
        T::resolve(self).await
    }

    /// Waits for the product of `type_info`, or for the reason it won't come
    pub(crate) async fn request(&mut self, type_info: TypeInfo) -> Result<Instance, InjectError> {
        let (response_channel, response) = oneshot::channel();
        self.request_sender
            .send(DiRequest::Require {
                type_info,
                response_channel,
            })
            .await?;

        Ok(response.await??)
    }
}

pub(crate) type DiResponseSender<T> = oneshot::Sender<Result<T, RequireError>>;

#[derive(Debug)]
pub(crate) enum DiRequest {
    Require {
        type_info: TypeInfo,
        response_channel: DiResponseSender<Instance>,
    },
}
