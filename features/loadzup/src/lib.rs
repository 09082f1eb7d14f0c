//! Loadzup is the asset loading boundary.
//!
//! Assets are fetched by [AssetUri] through a [Loader], which produces a finite stream of
//! type erased values; [LoaderExt] adds typed access and keeps the authoritative last
//! emission. Transport failures are reported as [FetchError].

pub mod errors;
pub mod loader;
pub mod memory;
pub mod uri;

pub use errors::{FetchError, HttpError};
pub use loader::{Loader, LoaderExt};
pub use memory::MemoryLoader;
pub use uri::AssetUri;
