use std::{future::Future, sync::Arc};

use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use injexit::{Injectable, Instance, TypeInfo};

use crate::{errors::FetchError, uri::AssetUri};

/// Fetches assets by identifier
///
/// A fetch is a finite stream: loaders may emit intermediate versions of an asset
/// (e.g. a cached copy before the fresh one), the last emission is authoritative.
/// Implementations must be safe to use from many concurrent fetches.
pub trait Loader: Send + Sync {
    fn load_any(
        &self,
        uri: &AssetUri,
        asset_type: TypeInfo,
    ) -> BoxStream<'static, Result<Instance, FetchError>>;
}

/// Typed access on top of any [Loader]
pub trait LoaderExt: Loader {
    /// Fetches the asset as `T`, failing with [FetchError::TypeMismatch] on any other type
    fn load<T: Injectable>(
        &self,
        uri: &AssetUri,
    ) -> BoxStream<'static, Result<Arc<T>, FetchError>> {
        let expected = TypeInfo::of::<T>();
        let uri = uri.clone();

        self.load_any(&uri, expected)
            .map(move |emission| {
                emission.and_then(|asset| {
                    asset
                        .downcast::<T>()
                        .map_err(|actual| FetchError::TypeMismatch {
                            uri: uri.clone(),
                            expected,
                            actual,
                        })
                })
            })
            .boxed()
    }

    /// Fetches the asset and keeps only the final emission
    ///
    /// Resolves to `None` if the fetch finished without emitting anything.
    /// The first failing emission aborts the fetch.
    fn load_last<T: Injectable>(
        &self,
        uri: &AssetUri,
    ) -> impl Future<Output = Result<Option<Arc<T>>, FetchError>> + Send + 'static {
        self.load::<T>(uri)
            .try_fold(None, |_, asset| async move { Ok(Some(asset)) })
    }
}
impl<L: Loader + ?Sized> LoaderExt for L {}
