use injexit::TypeInfo;

/// Errors when registering or acquiring a config
#[derive(thiserror::Error, Debug, Clone)]
pub enum ConfigError {
    /// The stored config could not be returned as the requested type
    #[error("The config stored for '{0}' has an unexpected type")]
    Mismatch(TypeInfo),
    /// The config type is already registered
    #[error("The config type '{0}' is already registered")]
    AlreadyRegistered(TypeInfo),
}
