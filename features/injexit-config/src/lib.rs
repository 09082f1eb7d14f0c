//! Injexit Config provides a registry of configs that can be injected in the rest of the
//! application.
//!
//! It is split into two major parts:
//! 1. [ConfigProvider]: the registry of all configs, registered once as an instance
//!    of the container
//! 2. [Config<T>]: a wrapper type to resolve and retrieve a single config, both while
//!    factories are constructed and from a finished container
//!
//! # Examples
//!
//! ```rust
//! # use injexit_config::ConfigProvider;
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut config_provider = ConfigProvider::new();
//! config_provider
//!     .add_config(AppConfig {
//!         host: "localhost".to_string(),
//!         port: 8080_u16,
//!     })
//!     .unwrap();
//!
//! let retrieved = config_provider.get_config::<AppConfig>().unwrap().unwrap();
//! assert_eq!(retrieved.host, "localhost");
//! assert_eq!(retrieved.port, 8080);
//! ```

pub mod config;
pub mod errors;
pub mod provider;

pub use config::Config;
pub use errors::ConfigError;
pub use provider::ConfigProvider;
