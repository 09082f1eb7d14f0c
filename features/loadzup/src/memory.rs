use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use futures::stream::{self, BoxStream, StreamExt};
use injexit::{Injectable, Instance, TypeInfo};

use crate::{errors::FetchError, loader::Loader, uri::AssetUri};

/// A [Loader] serving assets kept in memory
///
/// Useful for built-in assets and for running views without any transport.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    entries: RwLock<HashMap<AssetUri, Entry>>,
}

#[derive(Debug, Clone)]
enum Entry {
    Emissions(Vec<Instance>),
    Failure(FetchError),
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `asset` at `uri`, replacing anything registered before
    pub fn insert<T: Injectable>(&self, uri: impl Into<AssetUri>, asset: T) -> &Self {
        self.insert_emissions(uri, vec![Instance::new(asset)])
    }

    /// Serves every emission in order, the way a transport reporting progress would
    pub fn insert_emissions(&self, uri: impl Into<AssetUri>, emissions: Vec<Instance>) -> &Self {
        self.set(uri.into(), Entry::Emissions(emissions));
        self
    }

    /// Fails every fetch of `uri` with `error`
    pub fn insert_failure(&self, uri: impl Into<AssetUri>, error: FetchError) -> &Self {
        self.set(uri.into(), Entry::Failure(error));
        self
    }

    pub fn remove(&self, uri: &AssetUri) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(uri)
            .is_some()
    }

    fn set(&self, uri: AssetUri, entry: Entry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(uri, entry);
    }
}

impl Loader for MemoryLoader {
    fn load_any(
        &self,
        uri: &AssetUri,
        asset_type: TypeInfo,
    ) -> BoxStream<'static, Result<Instance, FetchError>> {
        let entry = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(uri)
            .cloned();

        match entry {
            Some(Entry::Emissions(emissions)) => {
                tracing::debug!(
                    "Serving {} emissions of {asset_type} from memory for {uri}",
                    emissions.len()
                );
                stream::iter(emissions.into_iter().map(Ok)).boxed()
            }
            Some(Entry::Failure(error)) => stream::once(async move { Err(error) }).boxed(),
            None => {
                tracing::debug!("No asset in memory for {uri}");
                let uri = uri.clone();
                stream::once(async move { Err(FetchError::NotFound { uri }) }).boxed()
            }
        }
    }
}
